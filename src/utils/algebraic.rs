//! Square name conversions.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and [`Position`]
//! values reused by the FEN, long algebraic and wire components.

use crate::chess_errors::ChessErrors;
use crate::game_state::board_position::Position;

/// Convert a square name (for example: "e4") to a position.
#[inline]
pub fn algebraic_to_position(square: &str) -> Result<Position, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Ok(Position::new((rank - b'0') as i8, (file - b'a' + 1) as i8))
}

/// Convert an on-board position to its square name (for example: "e4").
#[inline]
pub fn position_to_algebraic(position: Position) -> Result<String, ChessErrors> {
    if !position.is_on_board() {
        return Err(ChessErrors::OutOfBounds(position));
    }
    Ok(position.to_string())
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_position, position_to_algebraic};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::board_position::Position;

    #[test]
    fn square_names_convert_both_ways() {
        assert_eq!(algebraic_to_position("a1").expect("a1 should parse"), Position::new(1, 1));
        assert_eq!(algebraic_to_position("h8").expect("h8 should parse"), Position::new(8, 8));
        assert_eq!(algebraic_to_position("E2").expect("E2 should parse"), Position::new(2, 5));
        assert_eq!(position_to_algebraic(Position::new(4, 5)).expect("e4 should convert"), "e4");
    }

    #[test]
    fn malformed_squares_are_rejected() {
        for bad in ["", "i1", "a9", "a0", "e10", "4e"] {
            assert!(algebraic_to_position(bad).is_err(), "{bad} should not parse");
        }
        assert_eq!(
            position_to_algebraic(Position::new(0, 1)),
            Err(ChessErrors::OutOfBounds(Position::new(0, 1)))
        );
    }
}
