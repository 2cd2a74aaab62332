//! Ordina kernel — admin menu layout scoping, storage, and reconciliation.
//!
//! The engine lets an administrator reorder, hide, and group (via
//! separators) a host-supplied admin menu, with the saved layout scoped
//! globally, per role, or per user, and portable as a JSON exchange
//! document. Each render cycle it merges the saved layout with the live
//! menu the host hands over, so stale configuration degrades gracefully
//! instead of ever breaking rendering.
//!
//! The host embeds the engine by implementing the
//! [`host::MenuProvider`] / [`host::RoleProvider`] traits and a
//! [`storage::KeyValueStore`], then driving [`service::MenuService`].

pub mod codec;
pub mod config;
pub mod error;
pub mod host;
pub mod menu;
pub mod models;
pub mod scope;
pub mod service;
pub mod storage;
