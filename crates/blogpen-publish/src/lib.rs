//! # blogpen-publish
//!
//! The save flow for blogpen: an [`EditorShell`] owns the post title and an
//! editor session, serializes the document on save, and submits it through
//! an injected [`HostServices`] capability. [`HeadlessDeliveryClient`] is
//! the HTTP implementation of that capability.
//!
//! ## Example
//!
//! ```rust
//! use blogpen_publish::{EditorShell, HostServices, Post, Result};
//!
//! struct NullHost;
//!
//! impl HostServices for NullHost {
//!     fn resolve_site_id(&self) -> Result<String> {
//!         Ok("20121".to_string())
//!     }
//!
//!     fn submit_post(&self, _site_id: &str, headline: &str, _body: &str) -> Result<Post> {
//!         Ok(Post {
//!             headline: headline.to_string(),
//!         })
//!     }
//! }
//!
//! let mut shell = EditorShell::new(NullHost);
//! shell.set_title("Hello");
//! shell.editor_mut().insert_text("Hi");
//!
//! let post = shell.save().unwrap();
//! assert_eq!(post.headline, "Hello");
//! assert!(shell.title().is_empty());
//! ```

mod client;
mod host;
mod shell;

pub use client::HeadlessDeliveryClient;
pub use host::{HostServices, Post};
pub use shell::{EditorShell, Notification, NotificationKind};

/// Error type for publish operations
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// A save is already outstanding; no second request was issued
    #[error("a save is already in progress")]
    SaveInProgress,

    /// No site id was configured and the host could not resolve one
    #[error("no site id available")]
    MissingSiteId,

    /// The server answered but rejected the post (a `status` field in the
    /// response body)
    #[error("the server rejected the blog post: {0}")]
    Rejected(String),

    /// The request never completed
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with something that is not the expected JSON
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, PublishError>;
