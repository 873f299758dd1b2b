//! Derives the visible listing from the repository and the current selection.

use rand::seq::SliceRandom;
use rand::Rng;

use pcmap_core::StoreRecord;

use crate::selection::Selection;

/// Produces the ordered records to display for `selection`.
///
/// 1. Keep records matching the selected region, and the selected sub-region
///    when one is set (verbatim string compare — a sub-region that does not
///    belong to the region matches nothing).
/// 2. Fisher–Yates shuffle the matching copy; the source slice is never
///    mutated.
/// 3. Stable sort, premium first. The shuffle supplies the tie-break order
///    within each premium group, so equally-ranked stores rotate between
///    renders.
///
/// An empty result is valid and drives the presenter's empty state.
#[must_use]
pub fn visible_stores<R: Rng + ?Sized>(
    stores: &[StoreRecord],
    selection: &Selection,
    rng: &mut R,
) -> Vec<StoreRecord> {
    let mut picked: Vec<StoreRecord> = stores
        .iter()
        .filter(|s| s.region == selection.region().name)
        .filter(|s| selection.sub_region().is_none_or(|sub| s.sub_region == sub))
        .cloned()
        .collect();

    picked.shuffle(rng);
    picked.sort_by_key(|s| !s.is_premium);
    picked
}
