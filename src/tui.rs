//! Terminal front-end built on Ratatui and Crossterm.

pub mod app;
pub mod controller;
mod ui;
