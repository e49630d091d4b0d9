//! figspec - completion specs from argument-parser tool info dumps.
//!
//! The library half of the `figspec` binary:
//! - `cli` - command-line surface
//! - `commands` - subcommand implementations
//! - `config` - layered TOML configuration
//! - `dump` - tool info dumps of clap command trees
//! - `logging` - tracing subscriber setup
//! - `merge` - layering of config values
//!
//! The conversion itself lives in `figspec-toolinfo` (dump to spec) and
//! `figspec-schema` (spec to script).

pub mod cli;
pub mod commands;
pub mod config;
pub mod dump;
pub mod logging;
pub mod merge;
