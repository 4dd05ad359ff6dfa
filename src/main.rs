use clap::Parser;
use miette::Result;

use glex::cli::{Cli, Commands};
use glex::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_env(env_logger::Env::default())
        .format_timestamp(None)
        .init();

    let printer = Printer::new();
    match cli.command {
        Commands::Generate(args) => glex::cli::generate::run(args, cli.debug, &printer)?,
        Commands::Init(args) => glex::cli::init::run(args, &printer)?,
        Commands::List(args) => glex::cli::list::run(args, cli.debug, &printer)?,
        Commands::Completions(args) => glex::cli::completions::run(args)?,
    }

    Ok(())
}
