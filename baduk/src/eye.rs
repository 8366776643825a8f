use crate::{board::Board, player::Player, point::Point};

/// Whether a point is an eye for `color`: an empty point with every
/// neighbor a friendly stone, plus control of the corners. On the edge
/// all corners must be friendly or off the board; in the middle three
/// of the four are enough.
///
/// A heuristic, not a life-and-death proof. Agents use it to avoid
/// filling in their own eyes.
pub fn is_eye(board: &Board, point: Point, color: Player) -> bool {
    if board.stone_at(point).is_some() {
        return false;
    }
    for &neighbor in board.neighbors(point) {
        if board.stone_at(neighbor) != Some(color) {
            return false;
        }
    }

    let corners = board.corners(point);
    let off_board = 4 - corners.len();
    let friendly = corners
        .iter()
        .filter(|&&corner| board.stone_at(corner) == Some(color))
        .count();
    if off_board > 0 {
        friendly + off_board == 4
    } else {
        friendly >= 3
    }
}
