//! CLI command definitions.

use clap::{Parser, Subcommand};

pub mod init;

/// Pastry - a simple template to build libraries with Bun
#[derive(Parser, Debug)]
#[command(name = "pastry")]
#[command(version, about = "🥐 Pastry - initialize a library from the Pastry template")]
#[command(long_about = r#"
Pastry initializes a fresh checkout of the Pastry library template: it asks
for the project name, author, GitHub user and description, rewrites
package.json and README.md with them, and removes the template docs.

Run it from the root of the checkout.

EXIT CODES:
  0 - Success (or cancelled by the user)
  1 - General error
  2 - Invalid arguments
  3 - Manifest error
  4 - Filesystem error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new project
    Init(init::InitArgs),
}
