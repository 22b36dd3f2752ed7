#![deny(clippy::all)]

pub mod app;
pub mod commands;
pub mod common;

pub use app::Application;
