pub mod app;
pub mod boot;
pub mod prompt;
