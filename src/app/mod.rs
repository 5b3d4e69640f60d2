pub mod action;
pub mod command;
pub mod config;
pub mod input;
pub mod keymap;
pub mod r#loop;
pub mod persistence;
pub mod reducer;
pub mod state;
pub mod ui;
