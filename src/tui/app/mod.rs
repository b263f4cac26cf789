//! Terminal lifecycle and event loop.

mod events;
mod run;

pub use run::run_launcher;
