//! Space-filling curve index core.
//!
//! Maps coordinates in up to three dimensions onto a totally ordered `u64`
//! key space and answers rectangular range queries with sorted, merged key
//! intervals — the form an ordered one-dimensional index (typically a
//! B-tree) consumes to accelerate spatial lookups.
//!
//! # Supported Curves
//!
//! - Hilbert (2D, 3D)
//! - Z-order / Morton (1D, 2D, 3D)
//!
//! Callers can also supply their own rule tables through
//! [`curves::CurveTable`].

/// Curve rule tables for built-in and caller-supplied curves.
pub mod curves;
/// Axis-aligned coordinate envelopes.
pub mod envelope;
/// Error types used across the crate.
pub mod error;
/// The index engine mapping coordinates to keys and back.
mod index;
/// Internal bit operations shared by curve implementations.
#[doc(hidden)]
pub mod ops;
/// Closed key ranges and the merged-range accumulator.
pub mod range;
/// Central registry of curve metadata and constructors.
pub mod registry;
/// Normalized-space search envelopes used by range queries.
mod search;

pub use crate::{envelope::Envelope, index::SpaceFillingCurve, range::KeyRange};

/// Construct an index by curve name over `range` with the given `max_level`.
///
/// Returns an error if the name is unknown, the named curve does not support
/// the envelope's dimension, or the level is invalid.
pub fn index_from_name(
    name: &str,
    range: Envelope,
    max_level: u32,
) -> error::Result<SpaceFillingCurve> {
    let table = registry::construct(name, range.dimension())?;
    SpaceFillingCurve::new(table, range, max_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_by_name() -> error::Result<()> {
        let range = Envelope::new(&[0.0, 0.0], &[8.0, 8.0])?;
        let index = index_from_name("hilbert", range, 3)?;
        assert_eq!(index.value_width(), 64);
        Ok(())
    }

    #[test]
    fn unknown_name_is_rejected() {
        let range = Envelope::new(&[0.0], &[1.0]).unwrap();
        assert!(index_from_name("peano", range, 3).is_err());
    }
}
