pub mod ambient;
pub mod assets;
pub mod config;
pub mod error;
pub mod playback;
