//! Per-editor declaration storage.
//!
//! - [`RuleStore`]: the current value of each [`StyleProperty`](crate::StyleProperty)
//!   for one selector scope
//! - [`Snapshot`]: an immutable, canonically ordered copy of a store's declarations
//!
//! Values reaching the store are already validated and formatted; the store
//! itself never fails.

mod rule_store;
mod snapshot;

pub use rule_store::RuleStore;
pub use snapshot::Snapshot;
