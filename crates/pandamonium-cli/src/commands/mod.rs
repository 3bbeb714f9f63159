//! CLI subcommands.

pub mod common;
pub mod info;
pub mod params;
pub mod presets;
pub mod process;
