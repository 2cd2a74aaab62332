//! Engine data models.

pub mod role;
pub mod viewer;

pub use role::{Role, RoleTab};
pub use viewer::Viewer;
