//! Filtered server list: keyword editing, navigation and check marks.

mod input;
mod render;
