//! Terminal scorecard rendering.
//!
//! A small rendering layer for terminal play. It renders into a framebuffer
//! of styled cells that is then flushed to a crossterm backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout pure so it can be asserted on cell by cell
//! - Redraw only what changed between rolls

pub mod fb;
pub mod renderer;
pub mod scorecard_view;

pub use tenpin_core as core;
pub use tenpin_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scorecard_view::{AnchorY, ScorecardView, Viewport};
