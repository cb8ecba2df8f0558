//! CLI module - command-line interface
//!
//! Contains the command handlers invoked from the binary entry point.

pub mod commands;
