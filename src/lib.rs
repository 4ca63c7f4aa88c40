pub mod browser;
pub mod colleges;
pub mod config;
pub mod directory;
pub mod history;
pub mod output;
pub mod scoring;
pub mod stderr_buffer;
pub mod tui;
