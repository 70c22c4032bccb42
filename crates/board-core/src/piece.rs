//! Chess piece representation.

use crate::Color;
use thiserror::Error;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the single-letter code used in board rendering.
    /// The knight renders as `N`; `K` belongs to the king.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece standing on the board.
///
/// A piece is owned by exactly one board cell at a time. `castling_eligible`
/// starts out true for rooks and kings and is cleared the first time the
/// piece moves; it is never read for the other kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    castling_eligible: bool,
}

impl Piece {
    /// Creates a new piece as it stands at game start (or promotion time).
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            castling_eligible: matches!(kind, PieceKind::Rook | PieceKind::King),
        }
    }

    /// Returns the kind of this piece.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Returns the color of this piece.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Returns true if this piece may still take part in castling.
    /// Only meaningful for rooks and kings.
    #[inline]
    pub const fn castling_eligible(self) -> bool {
        self.castling_eligible
    }

    /// Records that the piece has moved, ending its castling eligibility.
    #[inline]
    pub fn mark_moved(&mut self) {
        self.castling_eligible = false;
    }

    /// Returns the two-character cell code used in board rendering,
    /// color letter then kind letter (e.g. `wP`, `bK`).
    pub fn code(self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.color.letter());
        code.push(self.kind.letter());
        code
    }
}

/// Error parsing a promotion kind character.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid promotion kind '{0}': expected one of Q, R, B, N")]
pub struct PromotionParseError(pub char);

/// The piece kinds a pawn may promote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    /// Parses a promotion kind from its character encoding.
    pub const fn from_char(c: char) -> Result<Self, PromotionParseError> {
        match c {
            'Q' => Ok(Promotion::Queen),
            'R' => Ok(Promotion::Rook),
            'B' => Ok(Promotion::Bishop),
            'N' => Ok(Promotion::Knight),
            other => Err(PromotionParseError(other)),
        }
    }

    /// Returns the piece kind this promotion produces.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            Promotion::Queen => PieceKind::Queen,
            Promotion::Rook => PieceKind::Rook,
            Promotion::Bishop => PieceKind::Bishop,
            Promotion::Knight => PieceKind::Knight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_letters() {
        assert_eq!(PieceKind::Pawn.letter(), 'P');
        assert_eq!(PieceKind::Knight.letter(), 'N');
        assert_eq!(PieceKind::King.letter(), 'K');
    }

    #[test]
    fn new_piece_castling_eligibility() {
        assert!(Piece::new(PieceKind::Rook, Color::White).castling_eligible());
        assert!(Piece::new(PieceKind::King, Color::Black).castling_eligible());
        assert!(!Piece::new(PieceKind::Pawn, Color::White).castling_eligible());
        assert!(!Piece::new(PieceKind::Queen, Color::Black).castling_eligible());
    }

    #[test]
    fn mark_moved_clears_eligibility() {
        let mut rook = Piece::new(PieceKind::Rook, Color::White);
        rook.mark_moved();
        assert!(!rook.castling_eligible());
    }

    #[test]
    fn cell_codes() {
        assert_eq!(Piece::new(PieceKind::Pawn, Color::White).code(), "wP");
        assert_eq!(Piece::new(PieceKind::Knight, Color::Black).code(), "bN");
        assert_eq!(Piece::new(PieceKind::King, Color::White).code(), "wK");
    }

    #[test]
    fn promotion_from_char() {
        assert_eq!(Promotion::from_char('Q'), Ok(Promotion::Queen));
        assert_eq!(Promotion::from_char('R'), Ok(Promotion::Rook));
        assert_eq!(Promotion::from_char('B'), Ok(Promotion::Bishop));
        assert_eq!(Promotion::from_char('N'), Ok(Promotion::Knight));
        assert_eq!(Promotion::from_char('K'), Err(PromotionParseError('K')));
        assert_eq!(Promotion::from_char('q'), Err(PromotionParseError('q')));
    }

    #[test]
    fn promotion_kinds() {
        assert_eq!(Promotion::Queen.kind(), PieceKind::Queen);
        assert_eq!(Promotion::Knight.kind(), PieceKind::Knight);
    }

    #[test]
    fn kind_display() {
        assert_eq!(format!("{}", PieceKind::Knight), "Knight");
        assert_eq!(format!("{}", PieceKind::Queen), "Queen");
    }
}
