//! Exam Seating Admin Client
//!
//! Typed client for the university exam-seating administration backend:
//! wire models, an authenticated REST client, hierarchy caching with
//! cascading selection controllers, display formatters, form validation,
//! and client-side search.

pub mod cache;
pub mod cascade;
pub mod client;
pub mod config;
pub mod editor;
pub mod errors;
pub mod format;
pub mod models;
pub mod search;
pub mod session;
pub mod validate;

pub use cache::HierarchyCache;
pub use cascade::{CascadeController, ChildOption, ChildSource, ExamCascade, Level};
pub use client::ApiClient;
pub use config::Config;
pub use editor::{EditorState, EntityKind};
pub use errors::{ClientError, Notification, Severity};
pub use session::{Session, UserData};
