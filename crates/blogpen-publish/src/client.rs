//! HTTP client for the headless-delivery blog-postings API.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::host::{HostServices, Post};
use crate::{PublishError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the content-management HTTP API.
///
/// Posts go to `{base_url}/o/headless-delivery/v1.0/sites/{site_id}/blog-postings`
/// as JSON.
pub struct HeadlessDeliveryClient {
    base_url: String,
    site_id: Option<String>,
    http: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct BlogPostingPayload<'a> {
    headline: &'a str,
    #[serde(rename = "articleBody")]
    article_body: &'a str,
}

#[derive(Deserialize)]
struct BlogPostingResponse {
    status: Option<serde_json::Value>,
    headline: Option<String>,
}

impl HeadlessDeliveryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            site_id: None,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// A client that resolves the given site id for shells that do not
    /// carry one themselves
    pub fn with_site_id(base_url: impl Into<String>, site_id: impl Into<String>) -> Self {
        Self {
            site_id: Some(site_id.into()),
            ..Self::new(base_url)
        }
    }

    fn postings_url(&self, site_id: &str) -> String {
        format!(
            "{}/o/headless-delivery/v1.0/sites/{}/blog-postings",
            self.base_url.trim_end_matches('/'),
            site_id
        )
    }
}

impl HostServices for HeadlessDeliveryClient {
    fn resolve_site_id(&self) -> Result<String> {
        self.site_id.clone().ok_or(PublishError::MissingSiteId)
    }

    fn submit_post(&self, site_id: &str, headline: &str, body: &str) -> Result<Post> {
        let payload = BlogPostingPayload {
            headline,
            article_body: body,
        };

        let response = self
            .http
            .post(self.postings_url(site_id))
            .json(&payload)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .map_err(|err| PublishError::Network(err.to_string()))?;

        let parsed: BlogPostingResponse = response
            .json()
            .map_err(|err| PublishError::InvalidResponse(err.to_string()))?;

        // The API signals rejection with a `status` field in the body, not
        // through the HTTP status code.
        if let Some(status) = parsed.status {
            let status = match status {
                serde_json::Value::String(text) => text,
                other => other.to_string(),
            };
            return Err(PublishError::Rejected(status));
        }

        Ok(Post {
            headline: parsed.headline.unwrap_or_default(),
        })
    }
}
