use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
pub enum Mode {
    Internal,
    External,
}

#[derive(Debug, Parser, Clone)]
#[command(name = "jotpad", version, about = "Save and load a text note to internal or external storage")]
pub struct Cli {
    /// Storage location the operation targets
    #[arg(long, value_enum, default_value_t = Mode::Internal)]
    pub mode: Mode,

    /// Note file path override (defaults to the mode's resolved location)
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Save text to the selected location
    Save { text: String },
    /// Print the note, one line per saved line
    Load,
    /// Share the note (not implemented)
    Share,
    /// Show where the note lives and whether it exists
    Info {
        #[arg(long)]
        json: bool,
    },
}
