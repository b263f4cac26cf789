//! Remote command prompt for checked servers.

mod input;
mod render;
