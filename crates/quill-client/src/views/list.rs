//! The post list view.

use quill_shared::dto::PostResponse;

use crate::api::{ApiClient, ClientError};

use super::liveness::{Ticket, ViewToken};

/// State of the list view.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<PostResponse>),
    Failed(String),
}

/// List view: starts loading, then either shows the posts or an inline
/// failure message. Results are applied through a liveness ticket.
pub struct ListView {
    token: ViewToken,
    state: ListState,
}

impl ListView {
    pub fn new() -> Self {
        Self {
            token: ViewToken::new(),
            state: ListState::Loading,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn posts(&self) -> &[PostResponse] {
        match &self.state {
            ListState::Loaded(posts) => posts,
            _ => &[],
        }
    }

    /// Start a refresh, superseding any fetch still in flight.
    pub fn begin_refresh(&mut self) -> Ticket {
        self.token.invalidate();
        self.state = ListState::Loading;
        self.token.ticket()
    }

    /// Apply a fetch result. Returns false (and changes nothing) when the
    /// ticket is stale.
    pub fn resolve(&mut self, ticket: &Ticket, result: Result<Vec<PostResponse>, ClientError>) -> bool {
        if !ticket.is_current() {
            return false;
        }

        self.state = match result {
            Ok(posts) => ListState::Loaded(posts),
            Err(e) => ListState::Failed(e.to_string()),
        };
        true
    }

    /// The view is going away; discard whatever is still in flight.
    pub fn unmount(&self) {
        self.token.invalidate();
    }

    /// Fetch the list and apply it, end to end.
    pub async fn refresh(&mut self, api: &ApiClient) -> bool {
        let ticket = self.begin_refresh();
        let result = api.list_posts().await;
        self.resolve(&ticket, result)
    }
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post(id: i64) -> PostResponse {
        PostResponse {
            post_id: id,
            author_id: 1,
            title: format!("Post {id}"),
            content: "…".to_string(),
            tags: vec![],
            images: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn loads_posts() {
        let mut view = ListView::new();
        assert_eq!(*view.state(), ListState::Loading);

        let ticket = view.begin_refresh();
        assert!(view.resolve(&ticket, Ok(vec![post(1), post(2)])));
        assert_eq!(view.posts().len(), 2);
    }

    #[test]
    fn failure_surfaces_inline_message() {
        let mut view = ListView::new();
        let ticket = view.begin_refresh();

        view.resolve(
            &ticket,
            Err(ClientError::Api {
                status: 500,
                message: "db down".to_string(),
            }),
        );

        assert_eq!(*view.state(), ListState::Failed("db down".to_string()));
    }

    #[test]
    fn stale_result_is_discarded_after_new_refresh() {
        let mut view = ListView::new();
        let old = view.begin_refresh();
        let new = view.begin_refresh();

        // The slow old fetch lands after a newer one started.
        assert!(!view.resolve(&old, Ok(vec![post(1)])));
        assert_eq!(*view.state(), ListState::Loading);

        assert!(view.resolve(&new, Ok(vec![post(2)])));
        assert_eq!(view.posts()[0].post_id, 2);
    }

    #[test]
    fn unmounted_view_ignores_late_results() {
        let mut view = ListView::new();
        let ticket = view.begin_refresh();
        view.unmount();

        assert!(!view.resolve(&ticket, Ok(vec![post(1)])));
    }
}
