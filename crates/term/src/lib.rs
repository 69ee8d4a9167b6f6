//! Terminal renderer for the arcade.
//!
//! A small, game-oriented rendering layer: screens paint into a
//! [`FrameBuffer`] and [`TerminalRenderer`] flushes only the cells that
//! changed since the previous frame.
//!
//! - [`view`]: in-game screen (title bar, play box, side panel, overlay)
//! - [`hub`]: the catalog screen
//! - [`arcade`], [`boards`], [`words`]: per-game painters
//! - [`throttle`]: skips redraws of unchanged, non-animating snapshots

pub mod arcade;
pub mod boards;
pub mod fb;
pub mod hub;
pub mod renderer;
pub mod throttle;
pub mod view;
pub mod words;

pub use funzone_core as core;
pub use funzone_types as types;

pub use fb::{palette, FrameBuffer, Glyph, Rgb, Style};
pub use hub::{render_hub_into, HubEntry, HubView};
pub use renderer::{encode_diff_into, encode_full_into, encode_restore_into, restore_terminal, TerminalRenderer};
pub use throttle::{fingerprint, RenderThrottle};
pub use view::{controls, GameScreen, Hud, Rect, Viewport};
pub use words::hangman_figure;
