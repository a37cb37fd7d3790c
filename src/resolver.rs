use crate::board::Board;
use crate::types::{Cell, Color, Move, Position};

/// Walk order: E, W, S, N, then SE, NE, SW, NW as `(dx, dy)`.
/// This is the browser client's table; flip sets list discs in this order.
const DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Returns the discs flipped if `color` plays at `pos`.
///
/// Pure over the board, so callers recompute it after every mutation.
/// Directions are concatenated in `DIRECTIONS` order, innermost disc first
/// within each direction. An occupied target always yields an empty set.
pub fn flips_for(board: &Board, pos: Position, color: Color) -> Vec<Position> {
    if !board.is_empty(pos) {
        return Vec::new();
    }

    let opponent = Cell::Stone(color.opposite());
    let mine = Cell::Stone(color);
    let mut flips = Vec::new();

    for (dx, dy) in DIRECTIONS {
        let mut line = Vec::new();
        let mut cursor = pos.offset(dx, dy);

        while let Some(next) = cursor {
            if board.get(next) != opponent {
                break;
            }
            line.push(next);
            cursor = next.offset(dx, dy);
        }

        let closed = cursor.is_some_and(|end| board.get(end) == mine);
        if closed && !line.is_empty() {
            flips.extend(line);
        }
    }

    flips
}

/// Every square where `color` captures at least one disc, row-major.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Position> {
    Position::all()
        .filter(|&pos| !flips_for(board, pos, color).is_empty())
        .collect()
}

pub fn is_legal(board: &Board, mv: Move) -> bool {
    !flips_for(board, mv.pos, mv.color).is_empty()
}

/// Short-circuits on the first legal square.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    Position::all().any(|pos| !flips_for(board, pos, color).is_empty())
}
