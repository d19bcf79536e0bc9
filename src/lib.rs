pub mod app;
pub mod config;
pub mod github;
pub mod input;
pub mod languages;
pub mod theme;
pub mod ui;
pub mod utils;
