//! The classic four-orientation rule set for the 2D Hilbert curve.

use super::{CurveRule, CurveTable, RuleId};
use crate::error::Result;

/// Orientation opening downward; the traversal root.
const UP: RuleId = 0;
/// Orientation opening leftward.
const RIGHT: RuleId = 1;
/// Orientation opening upward.
const DOWN: RuleId = 2;
/// Orientation opening rightward.
const LEFT: RuleId = 3;

/// Build the 2D Hilbert table.
///
/// With n-point `x << 1 | y`, the root visits `(0,0), (0,1), (1,1), (1,0)`,
/// so the curve enters at the lower-left tile (key 0) and exits at the
/// lower-right tile (the last key) at every level.
pub(super) fn table() -> Result<CurveTable> {
    let rules = vec![
        CurveRule::new(&[0, 1, 3, 2], &[RIGHT, UP, UP, LEFT]),
        CurveRule::new(&[0, 2, 3, 1], &[UP, RIGHT, RIGHT, DOWN]),
        CurveRule::new(&[3, 2, 0, 1], &[LEFT, DOWN, DOWN, RIGHT]),
        CurveRule::new(&[3, 1, 0, 2], &[DOWN, LEFT, LEFT, UP]),
    ];
    CurveTable::new("hilbert", 2, UP, rules)
}
