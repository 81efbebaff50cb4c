pub mod alerts;
pub mod config;
pub mod display;
pub mod error;
pub mod filter;
pub mod map;
pub mod state;
