//! Console command parsing.

use board_core::{Promotion, PromotionParseError, Square};
use thiserror::Error;

/// Errors produced while parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("expected {expected} arguments, got {got}")]
    WrongArgumentCount { expected: usize, got: usize },

    #[error("invalid coordinate '{0}': expected an integer in 0-7")]
    InvalidCoordinate(String),

    #[error(transparent)]
    Promotion(#[from] PromotionParseError),

    #[error("invalid promotion kind '{0}': expected a single character")]
    BadPromotionToken(String),
}

/// Commands accepted by the console loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move or capture: `move <row> <col> <row1> <col1>`.
    Move { from: Square, to: Square },
    /// Pawn promotion: `promote <row> <col> <row1> <col1> <Q|R|B|N>`.
    Promote {
        from: Square,
        to: Square,
        promotion: Promotion,
    },
    /// Queenside castling: `castle0`.
    CastleQueenside,
    /// Kingside castling: `castle7`.
    CastleKingside,
    /// Leave the game: `exit`.
    Exit,
}

impl Command {
    /// Parses a command line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let mut parts = input.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = parts.collect();

        match cmd {
            "move" => {
                let (from, to) = parse_move_args(&args, 4)?;
                Ok(Command::Move { from, to })
            }
            "promote" => {
                let (from, to) = parse_move_args(&args, 5)?;
                let promotion = parse_promotion(args[4])?;
                Ok(Command::Promote {
                    from,
                    to,
                    promotion,
                })
            }
            "castle0" => Ok(Command::CastleQueenside),
            "castle7" => Ok(Command::CastleKingside),
            "exit" => Ok(Command::Exit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Parses the four leading coordinate arguments of `move`/`promote`.
fn parse_move_args(args: &[&str], expected: usize) -> Result<(Square, Square), CommandError> {
    if args.len() != expected {
        return Err(CommandError::WrongArgumentCount {
            expected,
            got: args.len(),
        });
    }
    let from = parse_square(args[0], args[1])?;
    let to = parse_square(args[2], args[3])?;
    Ok((from, to))
}

fn parse_square(row: &str, col: &str) -> Result<Square, CommandError> {
    let row = parse_coordinate(row)?;
    let col = parse_coordinate(col)?;
    Ok(Square::new(row, col).expect("validated coordinate"))
}

fn parse_coordinate(token: &str) -> Result<u8, CommandError> {
    token
        .parse::<u8>()
        .ok()
        .filter(|&value| value < 8)
        .ok_or_else(|| CommandError::InvalidCoordinate(token.to_string()))
}

fn parse_promotion(token: &str) -> Result<Promotion, CommandError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Promotion::from_char(c)?),
        _ => Err(CommandError::BadPromotionToken(token.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn parse_move() {
        assert_eq!(
            Command::parse("move 1 4 3 4").unwrap(),
            Command::Move {
                from: sq(1, 4),
                to: sq(3, 4),
            }
        );
    }

    #[test]
    fn parse_move_with_extra_whitespace() {
        assert_eq!(
            Command::parse("  move  1 4  3 4 ").unwrap(),
            Command::Move {
                from: sq(1, 4),
                to: sq(3, 4),
            }
        );
    }

    #[test]
    fn parse_promote() {
        assert_eq!(
            Command::parse("promote 6 0 7 0 Q").unwrap(),
            Command::Promote {
                from: sq(6, 0),
                to: sq(7, 0),
                promotion: Promotion::Queen,
            }
        );
    }

    #[test]
    fn parse_castles_and_exit() {
        assert_eq!(Command::parse("castle0").unwrap(), Command::CastleQueenside);
        assert_eq!(Command::parse("castle7").unwrap(), Command::CastleKingside);
        assert_eq!(Command::parse("exit").unwrap(), Command::Exit);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(Command::parse(""), Err(CommandError::Empty));
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
    }

    #[test]
    fn rejects_unknown_command() {
        assert_eq!(
            Command::parse("dance 1 2"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn rejects_wrong_argument_count() {
        assert_eq!(
            Command::parse("move 1 4 3"),
            Err(CommandError::WrongArgumentCount {
                expected: 4,
                got: 3,
            })
        );
        assert_eq!(
            Command::parse("promote 6 0 7 0"),
            Err(CommandError::WrongArgumentCount {
                expected: 5,
                got: 4,
            })
        );
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert_eq!(
            Command::parse("move 1 4 8 4"),
            Err(CommandError::InvalidCoordinate("8".to_string()))
        );
        assert_eq!(
            Command::parse("move a 4 3 4"),
            Err(CommandError::InvalidCoordinate("a".to_string()))
        );
        assert_eq!(
            Command::parse("move -1 4 3 4"),
            Err(CommandError::InvalidCoordinate("-1".to_string()))
        );
    }

    #[test]
    fn rejects_bad_promotion_kinds() {
        assert_eq!(
            Command::parse("promote 6 0 7 0 K"),
            Err(CommandError::Promotion(PromotionParseError('K')))
        );
        assert_eq!(
            Command::parse("promote 6 0 7 0 QQ"),
            Err(CommandError::BadPromotionToken("QQ".to_string()))
        );
    }
}
