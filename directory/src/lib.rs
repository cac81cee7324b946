pub mod api;
pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod form;
pub mod format;
pub mod list;
pub mod models;
