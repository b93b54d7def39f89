//! Effect descriptors.
//!
//! State transitions stay pure: instead of reaching into the clipboard or
//! the filesystem, they return a list of effects for the caller (the UI
//! shell) to execute. This keeps every presenter testable without a
//! rendering environment.

/// A side effect requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Put the given text on the system clipboard.
    CopyToClipboard(String),

    /// Show a transient notification to the user.
    Notify(String),

    /// Offer the given bytes to the user as a file save.
    SaveFile { name: String, bytes: Vec<u8> },
}
