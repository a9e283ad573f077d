//! CLI subcommands.

pub mod build;
pub mod dev;
pub mod export;
pub mod init;
pub mod list;
pub mod serve;
