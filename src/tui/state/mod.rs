//! TUI state model split by feature domain.

mod app_state;
mod command_prompt_state;
mod editor_state;

pub(crate) use app_state::{AppState, PendingAction, SessionManager};
pub(crate) use command_prompt_state::CommandPromptState;
pub(crate) use editor_state::{EditorField, EditorMode, EditorState};
