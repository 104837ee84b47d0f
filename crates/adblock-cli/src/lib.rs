//! # adblock-cli
//!
//! Command-line front end for the `adblock` reconciler.
//!
//! ## Features
//!
//! - **One-shot sync**: fetch feeds, replace managed lists, recreate the rule
//! - **Layered configuration**: flags and environment over a TOML file
//! - **Structured logging**: `RUST_LOG` aware, `--verbose` for request detail

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
