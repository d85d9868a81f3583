pub mod audio;
pub mod config;
pub mod content;
pub mod event;
pub mod router;
pub mod ui;
pub mod util;
