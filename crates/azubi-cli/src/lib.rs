pub mod clipboard;
pub mod commands;
pub mod config;
