//! Viewer identity.
//!
//! The viewer context is resolved by the host and passed explicitly into
//! every engine call; the engine never reads ambient "current user" state.

use uuid::Uuid;

use super::Role;

/// The person the menu is being resolved for.
#[derive(Debug, Clone)]
pub struct Viewer {
    pub id: Uuid,

    /// Roles the viewer holds, with their permission sets.
    pub roles: Vec<Role>,
}

impl Viewer {
    pub fn new(id: Uuid, roles: Vec<Role>) -> Self {
        Self { id, roles }
    }
}
