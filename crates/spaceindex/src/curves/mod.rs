//! Curve rule tables: the self-similar structure of each supported curve.
//!
//! A curve is described by a finite set of [`CurveRule`]s held in a
//! [`CurveTable`]. Each rule fixes the order in which the `2^d` children of a
//! tile are visited (as n-point masks) and which rule applies within each
//! child. The rule graph may be cyclic; rules reference each other by
//! [`RuleId`] so the whole table is a flat, immutable structure with no
//! dispatch in the traversal loop.

/// Hilbert curve rule tables (2D and 3D).
pub mod hilbert;
/// Hand-written four-orientation 2D Hilbert table.
mod hilbert2;
/// State-machine rule-table generation for d-dimensional Hilbert curves.
mod hilbertn;
/// Z-order (Morton) rule tables.
pub mod zorder;

use smallvec::SmallVec;

use crate::{
    envelope::MAX_DIMENSION,
    error::{Error, Result},
};

/// Index of a rule within its [`CurveTable`].
pub type RuleId = usize;

/// One orientation of a self-similar curve.
///
/// `npoints` lists, in traversal order, the n-point mask of each visited
/// child (bit `d - 1 - dim` selects the upper half of axis `dim`).
/// `children` gives the rule applied within each child, in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveRule {
    /// n-point visited at each slot, in traversal order.
    npoints: SmallVec<[u8; 8]>,
    /// Inverse of `npoints`: slot index per n-point value. Filled in by
    /// table validation.
    slots: SmallVec<[u8; 8]>,
    /// Rule applied within the child at each slot.
    children: SmallVec<[RuleId; 8]>,
}

impl CurveRule {
    /// Build a rule row. The inverse lookup is computed when the rule is
    /// validated as part of [`CurveTable::new`].
    pub fn new(npoints: &[u8], children: &[RuleId]) -> Self {
        Self {
            npoints: SmallVec::from_slice(npoints),
            slots: SmallVec::new(),
            children: SmallVec::from_slice(children),
        }
    }

    /// n-point visited at `slot`.
    #[inline]
    pub fn npoint_for_slot(&self, slot: usize) -> u8 {
        self.npoints[slot]
    }

    /// Traversal slot at which `npoint` is visited.
    #[inline]
    pub fn slot_for_npoint(&self, npoint: u8) -> u8 {
        self.slots[npoint as usize]
    }

    /// Rule id applied within the child at `slot`.
    #[inline]
    pub fn child_at(&self, slot: usize) -> RuleId {
        self.children[slot]
    }

    /// Number of children: `2^d`.
    pub fn len(&self) -> usize {
        self.npoints.len()
    }

    /// Whether the rule has no children (never true for a validated rule).
    pub fn is_empty(&self) -> bool {
        self.npoints.is_empty()
    }

    /// Check the permutation and child-id invariants, filling in the
    /// inverse n-point lookup.
    fn validate(&mut self, id: RuleId, dimension: u32, rule_count: usize) -> Result<()> {
        let len = 1usize << dimension;
        if self.npoints.len() != len {
            return Err(Error::Rule(format!(
                "rule {id}: expected {len} n-points for dimension {dimension}, got {}",
                self.npoints.len()
            )));
        }
        if self.children.len() != len {
            return Err(Error::Rule(format!(
                "rule {id}: expected {len} children, got {}",
                self.children.len()
            )));
        }
        self.slots = smallvec::smallvec![u8::MAX; len];
        for (slot, &npoint) in self.npoints.iter().enumerate() {
            if npoint as usize >= len {
                return Err(Error::Rule(format!(
                    "rule {id}: n-point {npoint} out of range for dimension {dimension}"
                )));
            }
            if self.slots[npoint as usize] != u8::MAX {
                return Err(Error::Rule(format!(
                    "rule {id}: n-point {npoint} appears more than once"
                )));
            }
            self.slots[npoint as usize] = slot as u8;
        }
        for &child in &self.children {
            if child >= rule_count {
                return Err(Error::Rule(format!(
                    "rule {id}: child id {child} out of range ({rule_count} rules)"
                )));
            }
        }
        Ok(())
    }
}

/// A validated, immutable rule table describing one curve.
///
/// Shareable across threads; the index engine only reads it.
#[derive(Debug, Clone)]
pub struct CurveTable {
    /// Curve family name, e.g. `"hilbert"`.
    name: String,
    /// Dimension count shared by every rule.
    dimension: u32,
    /// Rule the traversal starts from.
    root: RuleId,
    /// All rules, indexed by [`RuleId`].
    rules: Vec<CurveRule>,
}

impl CurveTable {
    /// Validate `rules` and assemble a table.
    ///
    /// Every rule's n-points must be a permutation of `[0, 2^dimension)` and
    /// every child id must name a rule in the table.
    pub fn new(
        name: impl Into<String>,
        dimension: u32,
        root: RuleId,
        mut rules: Vec<CurveRule>,
    ) -> Result<Self> {
        if dimension < 1 || dimension > MAX_DIMENSION {
            return Err(Error::Rule(format!(
                "table dimension must be 1 to {MAX_DIMENSION}, got {dimension}"
            )));
        }
        if rules.is_empty() {
            return Err(Error::Rule("table has no rules".to_string()));
        }
        if root >= rules.len() {
            return Err(Error::Rule(format!(
                "root rule id {root} out of range ({} rules)",
                rules.len()
            )));
        }
        let rule_count = rules.len();
        for (id, rule) in rules.iter_mut().enumerate() {
            rule.validate(id, dimension, rule_count)?;
        }
        Ok(Self {
            name: name.into(),
            dimension,
            root,
            rules,
        })
    }

    /// Curve family name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dimension count shared by every rule.
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    /// The rule the traversal starts from.
    #[inline]
    pub fn root(&self) -> &CurveRule {
        &self.rules[self.root]
    }

    /// Look up a rule by id.
    #[inline]
    pub fn rule(&self, id: RuleId) -> &CurveRule {
        &self.rules[id]
    }

    /// Number of rules in the table.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}
