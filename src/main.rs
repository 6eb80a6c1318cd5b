use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile the scancode keymap table consumed by the keyboard driver.
    Keymap(cmd::keymap::KeymapArgs),
    /// Assemble a bootable UEFI ISO around an EFI binary.
    Iso(cmd::iso::IsoArgs),
    /// Stage an ESP directory and boot an EFI binary in QEMU.
    Run(cmd::run::RunArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Keymap(args) => cmd::keymap::run(args),
        Commands::Iso(args) => cmd::iso::run(args),
        Commands::Run(args) => cmd::run::run(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
