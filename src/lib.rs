//! carousel-rs: headless carousel/slider engine.
//!
//! This crate provides a Rust-idiomatic API and a strict split between
//! carousel logic and host rendering: the engine owns layout, navigation,
//! gestures, autoplay, and resize handling, and hosts implement
//! [`view::CarouselView`] to receive the resulting effects.

pub mod api;
pub mod autoplay;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;
pub mod view;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{CarouselEngine, CarouselOptions, EngineSnapshot};
pub use error::{CarouselError, CarouselResult};
