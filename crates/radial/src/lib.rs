pub mod app;
pub mod catalog;
pub mod config;
pub mod events;
pub mod item;
pub mod render;
pub mod shell;
