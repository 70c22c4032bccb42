//! Interactive console front end for the board engine.
//!
//! Thin glue only: renders the board, reads a command line, dispatches to
//! the engine, and reports the outcome. All decision logic lives in
//! `board-engine`.

mod command;

use board_engine::Board;
use command::{Command, CommandError};
use std::io::{self, BufRead};

fn print_help() {
    println!("Commands:");
    println!("    move <row> <col> <row1> <col1>               -- move or capture");
    println!("    promote <row> <col> <row1> <col1> <Q|R|B|N>  -- move a pawn to the last row");
    println!("                                                    and promote it");
    println!("    castle0                                      -- queenside castling");
    println!("    castle7                                      -- kingside castling");
    println!("    exit                                         -- quit");
}

fn main() {
    let stdin = io::stdin();
    let mut board = Board::new();

    print_help();
    loop {
        println!("{}", board);
        println!("{} to move:", board.turn());

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading command: {}", e);
                break;
            }
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let applied = match command {
            Command::Move { from, to } => board.move_piece(from, to),
            Command::Promote {
                from,
                to,
                promotion,
            } => board.move_and_promote_pawn(from, to, promotion),
            Command::CastleQueenside => board.castle_queenside(),
            Command::CastleKingside => board.castle_kingside(),
            Command::Exit => break,
        };

        if applied {
            println!("Move played.");
        } else {
            println!("Illegal move, try another.");
        }
    }
}
