//! Central registry of built-in curve families.

use crate::{
    curves::{self, CurveTable},
    error::{Error, Result},
};

/// Metadata describing one built-in curve family.
#[derive(Debug, Clone, Copy)]
pub struct RegistryEntry {
    /// Stable lookup key.
    pub key: &'static str,
    /// Human-readable display name.
    pub display: &'static str,
    /// Constraint summary.
    pub constraints: &'static str,
}

/// Built-in curve families with metadata.
pub const REGISTRY: &[RegistryEntry] = &[
    RegistryEntry {
        key: "hilbert",
        display: "Hilbert",
        constraints: "2 or 3 dimensions",
    },
    RegistryEntry {
        key: "zorder",
        display: "Z-order (Morton)",
        constraints: "1 to 3 dimensions",
    },
];

/// Keys of all built-in curve families.
pub const CURVE_NAMES: &[&str] = &["hilbert", "zorder"];

/// Construct the rule table of a built-in curve family.
///
/// Returns an error for unknown names or unsupported dimensions.
pub fn construct(name: &str, dimension: u32) -> Result<CurveTable> {
    match name {
        "hilbert" => curves::hilbert::table(dimension),
        "zorder" => curves::zorder::table(dimension),
        _ => Err(Error::Argument(format!(
            "unknown curve '{name}'; valid options: {}",
            CURVE_NAMES.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_and_names_agree() {
        let keys: Vec<&str> = REGISTRY.iter().map(|e| e.key).collect();
        assert_eq!(keys, CURVE_NAMES);
    }

    #[test]
    fn constructs_every_registered_family() -> Result<()> {
        assert_eq!(construct("hilbert", 2)?.name(), "hilbert");
        assert_eq!(construct("zorder", 3)?.name(), "zorder");
        assert!(construct("peano", 2).is_err());
        Ok(())
    }
}
