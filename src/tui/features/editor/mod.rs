//! Create/edit server form.

mod input;
mod render;
