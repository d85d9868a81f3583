pub mod app;
pub mod components;
pub mod input;
pub mod screens;
pub mod tui;
pub mod util;
