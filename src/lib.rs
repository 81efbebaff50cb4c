#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
pub mod core;

#[cfg(feature = "app")]
pub mod app;
#[cfg(feature = "app")]
pub use app::builder;
