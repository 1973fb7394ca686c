//! The editor shell: title + editor session + save flow.

use blogpen_core::{initial_document, serialize_document, SerializeOptions};
use blogpen_editor::{mark_for_event, toggle_mark, Editor, KeyEvent};

use crate::host::{HostServices, Post};
use crate::{PublishError, Result};

const REJECTED_MESSAGE: &str = "Something went wrong creating your blog post";
const FAILURE_MESSAGE: &str = "An error occurred creating your blog post";

/// Hosts one editing session and its save action.
///
/// Owns the title and the editor for the lifetime of the session. `save`
/// serializes the document, submits it through the host services, and on
/// success resets the session to an empty title and the initial document.
pub struct EditorShell<H: HostServices> {
    host: H,
    site_id: Option<String>,
    options: SerializeOptions,
    title: String,
    editor: Editor,
    in_flight: bool,
}

impl<H: HostServices> EditorShell<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            site_id: None,
            options: SerializeOptions::default(),
            title: String::new(),
            editor: Editor::new(),
            in_flight: false,
        }
    }

    /// A shell with an explicitly configured site id (the embedding
    /// attribute); it takes precedence over the host's resolution
    pub fn with_site_id(host: H, site_id: impl Into<String>) -> Self {
        Self {
            site_id: Some(site_id.into()),
            ..Self::new(host)
        }
    }

    pub fn set_serialize_options(&mut self, options: SerializeOptions) {
        self.options = options;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// Whether a save is currently outstanding
    pub fn is_saving(&self) -> bool {
        self.in_flight
    }

    /// Dispatch a key press through the shortcut table. Returns true when a
    /// mark was toggled, in which case the caller should suppress the
    /// default action of the key.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        match mark_for_event(event) {
            Some(mark) => {
                toggle_mark(&mut self.editor, mark);
                true
            }
            None => false,
        }
    }

    /// Serialize and submit the current document.
    ///
    /// On success the title and document are reset for the next post. On
    /// any failure the session is left untouched so the user can retry.
    pub fn save(&mut self) -> Result<Post> {
        if self.in_flight {
            return Err(PublishError::SaveInProgress);
        }
        self.in_flight = true;
        let result = self.submit();
        self.in_flight = false;

        match &result {
            Ok(post) => {
                log::info!("published blog post {:?}", post.headline);
                self.title.clear();
                self.editor.set_document(initial_document());
            }
            Err(err) => {
                log::error!("saving blog post failed: {err}");
            }
        }

        result
    }

    fn submit(&self) -> Result<Post> {
        let body = serialize_document(self.editor.document(), &self.options);
        let site_id = match &self.site_id {
            Some(site_id) => site_id.clone(),
            None => self.host.resolve_site_id()?,
        };
        self.host.submit_post(&site_id, &self.title, &body)
    }

    #[cfg(test)]
    fn set_in_flight(&mut self, in_flight: bool) {
        self.in_flight = in_flight;
    }
}

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Danger,
}

/// What the UI should show after a save attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: Option<String>,
    pub message: String,
}

impl Notification {
    /// Map a save result onto one of the fixed user-facing messages. The
    /// server's rejection detail goes into the title only.
    pub fn for_result(result: &Result<Post>) -> Self {
        match result {
            Ok(post) => Notification {
                kind: NotificationKind::Success,
                title: Some("Congrats".to_string()),
                message: format!("Your blog post \"{}\" is published.", post.headline),
            },
            Err(PublishError::Rejected(status)) => Notification {
                kind: NotificationKind::Danger,
                title: Some(status.clone()),
                message: REJECTED_MESSAGE.to_string(),
            },
            Err(_) => Notification {
                kind: NotificationKind::Danger,
                title: None,
                message: FAILURE_MESSAGE.to_string(),
            },
        }
    }
}
