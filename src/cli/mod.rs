pub mod build;

use clap::Parser;

/// lootgen - Layered game template resolver
#[derive(Parser, Debug)]
#[command(name = "lootgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub build: build::BuildArgs,
}
