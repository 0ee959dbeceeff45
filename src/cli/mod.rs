//! Command-line interface module.

mod args;
pub mod check;
mod common;
pub mod pages;
pub mod show;

pub use args::{Cli, Commands, EnvArgs};
