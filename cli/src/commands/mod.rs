pub mod check;
pub mod completion;
pub mod init;
pub mod show;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "weft",
    author,
    version,
    about = "Weft - build configuration for the utility-class CSS pipeline",
    long_about = "Sensible defaults for everything.\n\nCommands work without configuration - the \
                  embedded declaration applies until a weft.toml, WEFT_* environment variables, \
                  or command-line flags override it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Write a starter weft.toml")]
    Init(init::InitArgs),

    #[command(about = "Validate the build configuration")]
    Check(check::CheckArgs),

    #[command(about = "Print the effective build configuration")]
    Show(show::ShowArgs),

    #[command(about = "Generate shell completions")]
    Completion(completion::CompletionArgs),
}
