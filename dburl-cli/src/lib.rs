//! dburl CLI - Command-line interface for dburl.
//!
//! This crate provides the `dburl` tool for inspecting how database URLs,
//! environment variables and settings files resolve into connection records.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
