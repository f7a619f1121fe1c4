//! CLI module for the Campus Teams Gateway
//!
//! Provides subcommands for running and inspecting the gateway:
//! - `serve`: run the HTTP server (default mode)
//! - `routes`: print the effective route guard table

pub mod routes;
pub mod serve;

use clap::{Parser, Subcommand};

/// Campus Teams Gateway - session, route guard and team validation edge service
#[derive(Parser)]
#[command(name = "campus-teams-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Print the effective route guard table and exit
    Routes,
}
