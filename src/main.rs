//! # Blokus Self-Play Driver
//!
//! A small consumer of the rule engine: plays a complete random game between
//! 2 to 4 seats, printing moves as they happen and the final board and score
//! table. Useful as a smoke test of the engine and as a usage example for
//! the enumeration and apply APIs.
//!
//! ## Usage
//! ```text
//! play [--players N] [--seed S] [--show-boards]
//! ```
//! The same seed always replays the same game.

use blokus::{Color, Game};
use clap::Parser;
use colored::Colorize;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Random self-play for the Blokus rule engine.
#[derive(Parser)]
#[command(name = "play", version, about)]
struct Args {
    /// Number of seats at the table (2 to 4)
    #[arg(long, default_value_t = 4)]
    players: usize,

    /// RNG seed; identical seeds replay identical games
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print the board after every move instead of only at the end
    #[arg(long)]
    show_boards: bool,
}

fn main() {
    let args = Args::parse();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(args.seed);
    let mut game = Game::new(args.players);

    println!(
        "Playing a random {}-player game (seed {})\n",
        args.players, args.seed
    );

    while !game.is_over() {
        let moves = game.legal_moves_for_current();
        // The controller only hands the turn to seats that can move.
        let mv = moves[rng.random_range(0..moves.len())];
        game.play(mv.kind, mv.orientation, mv.anchor)
            .expect("enumerated move must apply on an unchanged board");
        println!("{:>3}. {}", game.history().len(), tint(&mv.to_string(), mv.color));
        if args.show_boards {
            print_board(&game);
        }
    }

    println!("\nFinal board:");
    print_board(&game);

    println!("Scores:");
    for (color, score) in game.scores() {
        let player = game.player(color);
        let note = if player.inventory.is_empty() {
            "placed everything".to_string()
        } else {
            format!("{} pieces left", player.inventory.len())
        };
        println!(
            "  {:<8} {:>3}  ({})",
            tint(color.name(), color),
            score,
            note
        );
    }
    match game.winner() {
        Some(color) => println!("\nWinner: {}", tint(color.name(), color)),
        None => println!("\nDraw at the top of the table."),
    }
}

/// Renders the board with one colored glyph per cell.
fn print_board(game: &Game) {
    let board = game.board();
    let size = board.size() as i32;
    for r in 0..size {
        let mut line = String::new();
        for c in 0..size {
            match board.owner_at(r, c) {
                Some(color) => {
                    line.push_str(&tint(&color.glyph().to_string(), color));
                }
                None => line.push('.'),
            }
            line.push(' ');
        }
        println!("{line}");
    }
    println!();
}

fn tint(text: &str, color: Color) -> String {
    match color {
        Color::Blue => text.blue().to_string(),
        Color::Yellow => text.yellow().to_string(),
        Color::Red => text.red().to_string(),
        Color::Green => text.green().to_string(),
    }
}
