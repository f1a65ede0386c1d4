use super::value_objects::{SlotCount, SlotIndex};

/// Deterministically map an opaque identifier to a gallery slot.
///
/// Folds the identifier's UTF-16 code units into a 32-bit signed
/// accumulator (`acc = acc * 31 + unit`, two's-complement wraparound),
/// takes the unsigned absolute value, and reduces into `1..=count`.
///
/// The arithmetic is a compatibility contract with the historical
/// implementation: callers rely on the same identifier selecting the same
/// image across deployments. `unsigned_abs` (not `wrapping_abs`) keeps the
/// most-negative accumulator at 2^31 instead of folding it back negative.
pub fn select_slot(identifier: &str, count: SlotCount) -> SlotIndex {
    let mut acc: i32 = 0;
    for unit in identifier.encode_utf16() {
        acc = acc.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    SlotIndex::new(acc.unsigned_abs() % count.get() + 1)
}
