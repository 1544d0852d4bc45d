//! Digital rain for the terminal (workspace facade crate).
//!
//! This package keeps the `tui_rain::{core,term,types}` public API in one
//! place while the implementation lives in dedicated crates under `crates/`.

pub use tui_rain_core as core;
pub use tui_rain_term as term;
pub use tui_rain_types as types;
