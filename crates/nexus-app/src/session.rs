//! In-memory navigation state.

use log::debug;
use nexus_protocol::ViewId;

/// Tracks which view is shown and, for the studio, which post is being
/// edited. Navigation is plain state; there is no routing layer.
#[derive(Debug, Clone, Default)]
pub struct AppSession {
    view: ViewId,
    editing_post: Option<String>,
}

impl AppSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected view.
    pub fn view(&self) -> ViewId {
        self.view
    }

    /// Switch views. Entering the studio directly starts a fresh draft.
    pub fn set_view(&mut self, view: ViewId) {
        if view == ViewId::Studio {
            self.editing_post = None;
        }
        debug!("view changed (view={})", view.as_str());
        self.view = view;
    }

    /// Open the studio with an existing post loaded for editing.
    pub fn edit_post(&mut self, post_id: impl Into<String>) {
        self.editing_post = Some(post_id.into());
        self.view = ViewId::Studio;
    }

    /// Identifier of the post being edited, if any.
    pub fn editing_post(&self) -> Option<&str> {
        self.editing_post.as_deref()
    }
}
