//! Menu entry model and reconciliation.
//!
//! The host hands over its live menu every render cycle; this module merges
//! it with a saved [`ConfigDocument`](crate::config::ConfigDocument) into
//! the final ordered, visibility-annotated list, synthesizing any
//! user-created separators the saved order references.

mod entry;
mod reconcile;
mod separators;

pub use entry::{MenuEntry, ResolvedEntry, strip_title};
pub use reconcile::{collapsed_separators, reconcile};
pub use separators::{NATIVE_SEPARATOR_COUNT, SeparatorAllocator, separator_index};
