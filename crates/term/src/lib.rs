//! Terminal layer for the rain animation.
//!
//! Everything that touches a real terminal lives here: frame encoding,
//! session setup/teardown, and input polling. The layer is split so the
//! animation loop itself stays testable:
//!
//! - Frames are encoded into a plain byte buffer, never straight to stdout
//! - Input arrives through the [`InputSource`] seam, so tests can script it
//! - [`run_loop`] is generic over both, and the binary plugs in the real
//!   stdout and event queue

pub mod app;
pub mod input;
pub mod renderer;

pub use tui_rain_core as core;
pub use tui_rain_types as types;

pub use app::run_loop;
pub use input::{InputSource, TerminalInput};
pub use renderer::{encode_frame_into, TerminalSession};
