//! Interactive incremental-search launcher.

mod app;
mod features;
mod state;
mod ui;

pub(crate) use state::{AppState, CommandPromptState, EditorField, EditorMode, EditorState, PendingAction, SessionManager};

pub use app::run_launcher;
