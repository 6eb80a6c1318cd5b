pub mod config;
pub mod error;
pub mod keymap;
pub mod layouts;
pub mod runner;
