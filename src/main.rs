use anyhow::Result;
use clap::Parser;
use leadgen_roi::cli::{Cli, Commands};
use leadgen_roi::commands;
use leadgen_roi::observability::{init_tracing, install_panic_hook};

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_tracing(cli.verbosity);
    let formatting = cli.formatting();

    match cli.command {
        Commands::Compare(args) => commands::handle_compare(&args, formatting),
        Commands::Init { force } => commands::init_config(force),
        Commands::Fields => commands::handle_fields(formatting),
    }
}
