use clap::Parser;
use miette::Result;
use lootgen::cli::Cli;
use lootgen::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    lootgen::cli::build::run(cli.build, &printer)?;

    Ok(())
}
