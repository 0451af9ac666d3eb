//! Z-order (Morton) rule tables.
//!
//! A single self-referential rule with identity n-point order: the derived
//! key is plain MSB-first bit interleaving with axis 0 highest. Not
//! continuous, but cheap and order-preserving per bit plane.

use super::{CurveRule, CurveTable};
use crate::{
    envelope::MAX_DIMENSION,
    error::{Error, Result},
};

/// Build the Z-order rule table for `dimension` (1 to 3).
pub fn table(dimension: u32) -> Result<CurveTable> {
    if dimension < 1 || dimension > MAX_DIMENSION {
        return Err(Error::Argument(format!(
            "Z-order curve supports 1 to {MAX_DIMENSION} dimensions, got {dimension}"
        )));
    }
    let slots = 1u8 << dimension;
    let npoints: Vec<u8> = (0..slots).collect();
    let children = vec![0; slots as usize];
    CurveTable::new("zorder", dimension, 0, vec![CurveRule::new(&npoints, &children)])
}
