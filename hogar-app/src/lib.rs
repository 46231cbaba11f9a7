pub mod api;
pub mod config;
pub mod error;
pub mod screens;
pub mod session;
pub mod toggle;
