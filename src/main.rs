use anyhow::Result;
use clap::Parser;
use indicatif::ProgressBar;
use log::info;

use std::io::{stdin, stdout, Write};

use connect4_minimax::board::Side;
use connect4_minimax::config::{DrawRule, SearchConfig, DEFAULT_DEPTH};
use connect4_minimax::game::Game;
use connect4_minimax::terminal::GameState;

mod display;
use display::display;

/// Play Connect 4 against a minimax agent
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect 4 against a minimax agent")]
struct Cli {
    /// Plies the agent searches before falling back to the heuristic
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    /// Move 1st or 2nd (asked interactively when omitted)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    first: Option<u8>,

    /// Only call a draw one move after the board fills up
    #[arg(long)]
    legacy_draw: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let draw_rule = if cli.legacy_draw {
        DrawRule::PastCapacity
    } else {
        DrawRule::AtCapacity
    };
    let config = SearchConfig::default()
        .with_depth(cli.depth)
        .with_draw_rule(draw_rule);
    config.validate()?;

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // choose who moves first
    let first = match cli.first {
        Some(1) => Side::Player,
        Some(_) => Side::Computer,
        None => loop {
            let mut buffer = String::new();
            print!("Would you like to play (1)st or (2)nd? ");
            stdout().flush()?;
            if stdin.read_line(&mut buffer)? == 0 {
                return Ok(());
            }
            match buffer.trim().parse::<u8>() {
                Ok(1) => break Side::Player,
                Ok(2) => break Side::Computer,
                _ => println!("Unknown answer given"),
            }
        },
    };
    info!("starting game, depth {}, {:?} moves first", config.depth, first);

    let mut game = Game::new(config, first);

    // game loop
    loop {
        match game.state() {
            GameState::InProgress => match game.to_move() {
                Side::Computer => {
                    let spinner = ProgressBar::new_spinner();
                    spinner.set_message("AI is thinking...");
                    spinner.enable_steady_tick(100);

                    let (column, _) = game.play_computer()?;

                    spinner.finish_and_clear();
                    println!("AI plays column {}", column);
                }
                Side::Player => {
                    display(game.board())?;
                    print!("It's your move! Pick a column (0-6) > ");
                    stdout().flush()?;
                    let mut input_str = String::new();
                    if stdin.read_line(&mut input_str)? == 0 {
                        println!();
                        break;
                    }

                    let column = match input_str.trim().parse::<usize>() {
                        Err(_) => {
                            println!("Invalid number: {}", input_str.trim());
                            continue;
                        }
                        Ok(column) => column,
                    };

                    if let Err(err) = game.play_human(column) {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                }
            },

            // end states
            GameState::PlayerWin => {
                display(game.board())?;
                println!("The game is over! Player won!");
                break;
            }
            GameState::ComputerWin => {
                display(game.board())?;
                println!("The game is over! AI won!");
                break;
            }
            GameState::Draw => {
                display(game.board())?;
                println!("It's a tie!");
                break;
            }
        }
    }
    Ok(())
}
