//! # CLI Layer
//!
//! An interactive study session over the flipwise API. This is the only place
//! that reads stdin, writes stdout, or sets up logging.
//!
//! ## Structure
//!
//! - `setup`: clap definitions for one session line, plus grouped help
//! - `prompt`: field prompts and confirmations over any reader/writer
//! - `render`: card frame, status line, notices and listings
//! - `commands`: the session loop and per-command handlers

mod commands;
mod prompt;
mod render;
mod setup;

pub use commands::run;
