//! # Quill Client
//!
//! The frontend-side half of the CRUD contract: typed fetch wrappers over
//! the post API, the session lifecycle, and the view-layer state machines
//! that keep local drafts consistent with server truth.

pub mod api;
pub mod session;
pub mod views;

pub use api::{ApiClient, ClientError};
pub use session::SessionManager;
