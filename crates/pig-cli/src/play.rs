use std::io::{self, BufRead, Write};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use pig_core::{Event, Game, GameConfig, GameError, Player};

pub fn run(players: usize, target: u32, seed: Option<u64>) -> Result<(), String> {
    if players < 2 {
        return Err(GameError::NotEnoughPlayers(players).to_string());
    }

    let mut config = GameConfig::default().with_target(target);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let roster = collect_players(&mut reader, players)?;
    let mut game = Game::new(roster, config).map_err(|e| e.to_string())?;

    println!();
    println!("  {} first to {} wins.", "Pig:".bold(), game.target());
    println!("  Each turn, enter 'r' to roll or 'h' to hold.\n");

    let mut line = String::new();
    while !game.is_over() {
        let current = game.current_player();
        println!(
            "  {} (banked: {})",
            format!("{}'s turn", current.name()).bold(),
            current.score()
        );

        // One turn: decisions until it ends by hold, bust, or win.
        loop {
            print!("> ");
            io::stdout().flush().map_err(|e| e.to_string())?;

            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) => return Err(GameError::InputExhausted.to_string()),
                Err(e) => return Err(e.to_string()),
                _ => {}
            }

            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            match game.process(input) {
                Ok(event) => {
                    print_event(&event);
                    if !matches!(event, Event::Rolled { .. }) {
                        break;
                    }
                }
                Err(e) => println!("  {}", e.to_string().yellow()),
            }
        }
    }

    print_leaderboard(&game);
    Ok(())
}

/// Prompt for each player's name, re-prompting until one is accepted.
fn collect_players(reader: &mut impl BufRead, count: usize) -> Result<Vec<Player>, String> {
    let mut roster = Vec::with_capacity(count);
    for i in 1..=count {
        loop {
            print!("What is Player {i}'s name? ");
            io::stdout().flush().map_err(|e| e.to_string())?;

            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) => return Err(GameError::InputExhausted.to_string()),
                Err(e) => return Err(e.to_string()),
                _ => {}
            }

            match Player::new(&line) {
                Ok(player) => {
                    roster.push(player);
                    break;
                }
                Err(e) => println!("  {}", e.to_string().yellow()),
            }
        }
    }
    Ok(roster)
}

fn print_event(event: &Event) {
    match event {
        Event::Rolled {
            player,
            value,
            turn_score,
            would_total,
        } => {
            println!(
                "  {player} rolls a {value}. Turn score: {turn_score} (holding would bank {would_total})."
            );
        }
        Event::Busted { player, total, .. } => {
            println!(
                "  {player} rolls a 1. {} Banked total stays at {total}.\n",
                "Bust!".red().bold()
            );
        }
        Event::Held {
            player,
            points,
            total,
            ..
        } => {
            println!("  {player} holds and banks {points} for a total of {total}.\n");
        }
        Event::Won {
            player,
            value,
            total,
        } => {
            println!(
                "  {player} rolls a {value} and {} with {total}!\n",
                "wins".green().bold()
            );
        }
    }
}

/// Print the winner line and the final standings as a bordered table.
fn print_leaderboard(game: &Game) {
    if let Some(winner) = game.winner() {
        println!(
            "  {} {} takes the game.\n",
            "Game over:".bold(),
            winner.name().green().bold()
        );
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Player", "Score", "Rolls"]);

    for row in game.standings() {
        table.add_row(vec![row.name, row.score.to_string(), row.rolls.to_string()]);
    }

    println!("{table}");
}
