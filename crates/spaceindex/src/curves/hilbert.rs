//! Hilbert curve rule tables.
//!
//! The 2D table is the classic hand-written four-orientation rule set; the
//! 3D table is generated from the Hamilton state machine. Both describe the
//! same family: continuous curves where successive keys always address
//! edge-adjacent tiles.

use super::{CurveTable, hilbert2, hilbertn};
use crate::error::{Error, Result};

/// Build the Hilbert rule table for `dimension` (2 or 3).
pub fn table(dimension: u32) -> Result<CurveTable> {
    match dimension {
        2 => hilbert2::table(),
        3 => hilbertn::table(3),
        _ => Err(Error::Argument(format!(
            "Hilbert curve supports 2 or 3 dimensions, got {dimension}"
        ))),
    }
}
