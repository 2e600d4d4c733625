//! The post detail view: view/edit toggle with an in-flight state.

use quill_shared::dto::{PostResponse, UpdatePostRequest};

use crate::api::{ApiClient, ClientError};

use super::draft::Draft;
use super::liveness::{Ticket, ViewToken};

/// Mode of a loaded detail view.
///
/// Transitions: `Viewing` → `Editing` (loads server state into a draft),
/// `Editing` → `Viewing` (cancel discards the draft) or `Saving` (submit),
/// `Saving` → `Viewing` (success, the draft becomes server truth) or back
/// to `Editing` (failure, draft retained). Delete runs from `Viewing`
/// through `Deleting`.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Viewing,
    Editing(Draft),
    Saving(Draft),
    Deleting,
}

/// A detail view over a loaded post.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    post: PostResponse,
    mode: Mode,
    error: Option<String>,
}

impl DetailView {
    pub fn new(post: PostResponse) -> Self {
        Self {
            post,
            mode: Mode::Viewing,
            error: None,
        }
    }

    pub fn post(&self) -> &PostResponse {
        &self.post
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The last save/delete failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enter edit mode, loading current server state into a draft.
    pub fn edit(&mut self) -> bool {
        if self.mode != Mode::Viewing {
            return false;
        }
        self.error = None;
        self.mode = Mode::Editing(Draft::from_post(&self.post));
        true
    }

    /// Mutable access to the draft while editing.
    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match &mut self.mode {
            Mode::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    /// Discard the draft and return to viewing.
    pub fn cancel(&mut self) -> bool {
        match self.mode {
            Mode::Editing(_) => {
                self.mode = Mode::Viewing;
                self.error = None;
                true
            }
            _ => false,
        }
    }

    /// Submit the draft. Returns the update payload to send; the view is
    /// now saving and rejects further edits until resolved.
    pub fn begin_save(&mut self) -> Option<UpdatePostRequest> {
        match std::mem::replace(&mut self.mode, Mode::Viewing) {
            Mode::Editing(draft) => {
                let request = draft.to_update();
                self.mode = Mode::Saving(draft);
                self.error = None;
                Some(request)
            }
            other => {
                self.mode = other;
                None
            }
        }
    }

    /// The server accepted the update; its response becomes the new truth.
    pub fn save_succeeded(&mut self, post: PostResponse) -> bool {
        match self.mode {
            Mode::Saving(_) => {
                self.post = post;
                self.mode = Mode::Viewing;
                self.error = None;
                true
            }
            _ => false,
        }
    }

    /// The save failed; keep the draft so the user can re-attempt.
    pub fn save_failed(&mut self, message: impl Into<String>) -> bool {
        match std::mem::replace(&mut self.mode, Mode::Viewing) {
            Mode::Saving(draft) => {
                self.mode = Mode::Editing(draft);
                self.error = Some(message.into());
                true
            }
            other => {
                self.mode = other;
                false
            }
        }
    }

    /// Start deleting. Only valid while viewing.
    pub fn begin_delete(&mut self) -> bool {
        if self.mode != Mode::Viewing {
            return false;
        }
        self.error = None;
        self.mode = Mode::Deleting;
        true
    }

    /// The delete failed; back to viewing with the error surfaced.
    /// (On success the caller navigates away and drops the view.)
    pub fn delete_failed(&mut self, message: impl Into<String>) -> bool {
        if self.mode != Mode::Deleting {
            return false;
        }
        self.mode = Mode::Viewing;
        self.error = Some(message.into());
        true
    }

    /// Submit the current draft against the API and resolve the outcome.
    pub async fn save(&mut self, api: &ApiClient) -> Result<(), ClientError> {
        let Some(request) = self.begin_save() else {
            return Ok(());
        };

        match api.update_post(self.post.post_id, &request).await {
            Ok(post) => {
                self.save_succeeded(post);
                Ok(())
            }
            Err(e) => {
                self.save_failed(e.to_string());
                Err(e)
            }
        }
    }
}

/// Loading state wrapped around the detail view.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Ready(DetailView),
    Failed(String),
}

/// The detail page: fetches one post by id, guarded against stale
/// completions after navigation.
pub struct DetailPage {
    id: i64,
    token: ViewToken,
    state: DetailState,
}

impl DetailPage {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            token: ViewToken::new(),
            state: DetailState::Loading,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn view_mut(&mut self) -> Option<&mut DetailView> {
        match &mut self.state {
            DetailState::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.token.invalidate();
        self.state = DetailState::Loading;
        self.token.ticket()
    }

    /// Apply a fetch result; stale tickets change nothing.
    pub fn resolve(&mut self, ticket: &Ticket, result: Result<PostResponse, ClientError>) -> bool {
        if !ticket.is_current() {
            return false;
        }

        self.state = match result {
            Ok(post) => DetailState::Ready(DetailView::new(post)),
            Err(e) => DetailState::Failed(e.to_string()),
        };
        true
    }

    pub fn unmount(&self) {
        self.token.invalidate();
    }

    /// Fetch the post and apply it, end to end.
    pub async fn load(&mut self, api: &ApiClient) -> bool {
        let ticket = self.begin_load();
        let result = api.get_post(self.id).await;
        self.resolve(&ticket, result)
    }
}
