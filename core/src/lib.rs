//! Core types for tumble.
//!
//! Everything here is independent of any UI toolkit. Host bindings, including the
//! `LoadingIndicator` widget, live in the `tumble` crate, which re-exports the important types.

pub mod config;
pub mod cycle;
pub mod easing;
pub mod interpolation;
pub mod scheduler;
pub mod shape;
pub mod time_scale;
pub mod tween;
