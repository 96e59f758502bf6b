//! Fast hash set aliases for channel id sets.
//!
//! Exclusion sets hold small integer channel ids, so the Fx hash from
//! `rustc-hash` is used instead of SipHash. Iteration order of these sets is
//! unspecified; use [`sorted_ids`] wherever output must be deterministic.
//!
//! # Examples
//!
//! ```
//! use fg_core::{ChannelId, ChannelIdSet, sorted_ids};
//!
//! let set: ChannelIdSet = [ChannelId(9), ChannelId(2)].into_iter().collect();
//! assert_eq!(sorted_ids(&set), vec![ChannelId(2), ChannelId(9)]);
//! ```

use crate::types::ChannelId;

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;

/// The set type backing both channel exclusion sets.
pub type ChannelIdSet = FxHashSet<ChannelId>;

/// Creates a new empty [`FxHashSet`].
#[inline]
#[must_use]
pub fn fx_hash_set<V>() -> FxHashSet<V> {
    FxHashSet::default()
}

/// Returns the ids of `set` in ascending order.
#[must_use]
pub fn sorted_ids(set: &ChannelIdSet) -> Vec<ChannelId> {
    let mut ids: Vec<ChannelId> = set.iter().copied().collect();
    ids.sort_unstable();
    ids
}
