//! Engine error types.

use thiserror::Error;

/// Errors surfaced by engine operations.
///
/// Reconciliation itself never fails: stale slugs, missing scope documents,
/// and malformed saved state all degrade to "no customization" so a broken
/// configuration can never break menu rendering. These variants cover the
/// operations that do reject input — saves, resets, imports, exports.
#[derive(Debug, Error)]
pub enum KernelError {
    /// Malformed input shape (order/hidden not list-like, import document
    /// missing required fields). Carries a human-readable message.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A role-scoped operation named a role the host does not recognize or
    /// that cannot reach the admin area. Rejected before any write.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// The caller lacks authority for the operation. The host enforces
    /// authorization before calling in; the engine keeps the variant so
    /// adapters can surface host-side rejections uniformly.
    #[error("permission denied")]
    PermissionDenied,

    /// Role-based scope resolution was requested for a viewer holding no
    /// roles. Callers fall back to the global scope.
    #[error("no applicable configuration scope for viewer")]
    NoScope,

    /// A collaborator (persistence store or host provider) failed.
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias using KernelError.
pub type KernelResult<T> = Result<T, KernelError>;
