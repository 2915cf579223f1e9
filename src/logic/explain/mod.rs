//! Explain Module - pre-computed feature attributions
//!
//! The attribution artifact is produced entirely outside this service and
//! loaded as an opaque sequence, one entry per client, in the same order as
//! the client table's index. This module never re-sorts either side.

pub mod store;
pub mod types;


pub use store::ExplanationStore;
pub use types::{AttributionEntry, Contribution, GlobalFeature, LocalAttribution};

/// Charts are capped to the strongest contributors
pub const MAX_DISPLAY: usize = 10;
