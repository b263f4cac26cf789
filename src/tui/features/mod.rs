//! Feature-sliced TUI behavior.

pub(crate) mod command_prompt;
pub(crate) mod editor;
pub(crate) mod server_list;
