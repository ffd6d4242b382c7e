//! Display ordering for catalog grids.
//!
//! Both halves are pure functions over in-memory slices: the randomizer
//! shuffles product and cover order per request, the interleaver drops
//! selling-link banners into a product grid at fixed positions.

pub mod interleave;
pub mod shuffle;

pub use interleave::{banner_positions, interleave, Identified, Slot};
pub use shuffle::{group_by_key, shuffle, shuffle_groups, shuffle_with};
