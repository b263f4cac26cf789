//! Shared UI helpers and the frame layout.

mod frame;
mod status_bar;
pub(crate) mod theme;
