pub mod app;
pub mod cli;
pub mod config;
pub mod directory;
pub mod fetcher;
pub mod tui;
pub mod utils;

#[cfg(test)]
mod tests;
