//! CLI library components for the job postings dashboard.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
