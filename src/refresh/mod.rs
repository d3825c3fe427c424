//! Refresh control
//!
//! `RefreshController` is driven by the host's scroll callbacks and a per-frame
//! `advance`. The host list view and the refresh action are reached through
//! the `ScrollContainer` and `RefreshDelegate` traits.

pub mod animation;
pub mod container;
pub mod controller;

pub use animation::{InsetAnimation, ease_in_out};
pub use container::{RefreshDelegate, ScrollContainer};
pub use controller::{Overlay, RefreshController, handle_position};
