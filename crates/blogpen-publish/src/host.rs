//! The host-services capability.
//!
//! The editor shell never talks to the host page or the network directly;
//! it is handed an implementation of [`HostServices`] at construction.
//! Production code uses [`crate::HeadlessDeliveryClient`]; tests use mocks.

use crate::Result;

/// A published blog post, as echoed by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// The post title the server stored
    pub headline: String,
}

/// What the shell needs from its host: a site to publish under, and a way
/// to submit a post to it.
pub trait HostServices {
    /// The site id to publish under when none was configured explicitly
    fn resolve_site_id(&self) -> Result<String>;

    /// Submit a post with the given title and serialized HTML body
    fn submit_post(&self, site_id: &str, headline: &str, body: &str) -> Result<Post>;
}
