//! Rule-table generation for the d-dimensional Hilbert curve.
//!
//! Unrolls the Hamilton entry/direction state machine into a finite rule
//! enumeration: every `(entry, direction)` state reachable from the root
//! becomes one table row, so the traversal loop never recomputes transforms.

use smallvec::SmallVec;

use super::{CurveRule, CurveTable, RuleId};
use crate::{error::Result, ops};

/// Entry point of the sub-cube visited at slot `i`.
fn entry(i: u32) -> u32 {
    match i {
        0 => 0,
        _ => ops::graycode(2 * ((i - 1) / 2)),
    }
}

/// Axis along which the curve leaves the sub-cube visited at slot `i`.
fn direction(i: u32, d: u32) -> u32 {
    let masked = i & ops::bitmask(d);
    if masked == 0 {
        0
    } else if masked.is_multiple_of(2) {
        ops::tsb(masked - 1, d) % d
    } else {
        ops::tsb(masked, d) % d
    }
}

/// n-point visited at `slot` within the state `(entry, direction)`.
fn npoint_for(e: u32, dir: u32, d: u32, slot: u32) -> u8 {
    (ops::lrot(ops::graycode(slot) & ops::bitmask(d), dir + 1, d) ^ e) as u8
}

/// Successor state entered through `slot`.
fn child_state(e: u32, dir: u32, d: u32, slot: u32) -> (u32, u32) {
    (
        e ^ ops::lrot(entry(slot), dir + 1, d),
        (dir + direction(slot, d) + 1) % d,
    )
}

/// Generate the Hilbert rule table for dimension `d` by walking every state
/// reachable from `(0, 0)`. At most `d * 2^d` rules result.
pub(super) fn table(d: u32) -> Result<CurveTable> {
    let slots = 1u32 << d;
    let mut states: Vec<(u32, u32)> = vec![(0, 0)];
    let mut rules: Vec<CurveRule> = Vec::new();

    let mut next = 0;
    while next < states.len() {
        let (e, dir) = states[next];
        let mut npoints: SmallVec<[u8; 8]> = SmallVec::new();
        let mut children: SmallVec<[RuleId; 8]> = SmallVec::new();
        for slot in 0..slots {
            npoints.push(npoint_for(e, dir, d, slot));
            let child = child_state(e, dir, d, slot);
            let id = match states.iter().position(|s| *s == child) {
                Some(id) => id,
                None => {
                    states.push(child);
                    states.len() - 1
                }
            };
            children.push(id);
        }
        rules.push(CurveRule::new(&npoints, &children));
        next += 1;
    }

    CurveTable::new("hilbert", d, 0, rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_valid_3d_table() -> Result<()> {
        let table = table(3)?;
        assert_eq!(table.dimension(), 3);
        // Reachable states are bounded by d * 2^d.
        assert!(table.rule_count() <= 24, "{} rules", table.rule_count());
        Ok(())
    }

    #[test]
    fn root_starts_at_origin() -> Result<()> {
        for d in 1..=3 {
            let table = table(d)?;
            assert_eq!(table.root().npoint_for_slot(0), 0, "dimension {d}");
        }
        Ok(())
    }

    #[test]
    fn base_order_is_a_gray_sequence() -> Result<()> {
        // Consecutive slots of any rule visit face-adjacent children: their
        // n-points differ in exactly one bit.
        let table = table(3)?;
        for id in 0..table.rule_count() {
            let rule = table.rule(id);
            for slot in 1..rule.len() {
                let a = rule.npoint_for_slot(slot - 1);
                let b = rule.npoint_for_slot(slot);
                assert_eq!((a ^ b).count_ones(), 1, "rule {id} slot {slot}");
            }
        }
        Ok(())
    }
}
