//! Error taxonomy for the view layer.
//!
//! ERROR HANDLING
//! ==============
//! Only [`ViewError::InvalidHost`] is fatal, and only at construction. Remote
//! failures are reported where they happen and leave the view at its last
//! known good state; stale responses are dropped without reaching the user.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure reported by a remote resource call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success HTTP status.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The server answered `success: false`.
    #[error("rejected by server: {0}")]
    Rejected(String),
    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

/// Failure writing to or querying the host subtree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// No element with the given class exists under the host.
    #[error("host has no element with class `{0}`")]
    MissingElement(String),
    /// The control was removed from the host before it could be bound.
    #[error("control `{class_name}`[{index}] is no longer attached")]
    Detached { class_name: String, index: usize },
}

/// Errors surfaced by pages and components.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// The host anchor is absent or lacks a required control.
    #[error("invalid host element: {0}")]
    InvalidHost(String),
    /// A resource call failed.
    #[error(transparent)]
    Remote(#[from] RemoteError),
    /// A response arrived for a render that has since been superseded.
    #[error("response belongs to a superseded render")]
    StaleResponse,
    /// The host rejected a write.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl ViewError {
    /// Whether the error should be shown to the user at all.
    #[must_use]
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, Self::StaleResponse)
    }
}
