// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use skeleton_overlay::cli::args::{Cli, Commands};
use skeleton_overlay::cli::render::{run_dump, run_render};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => run_render(&args),
        Commands::Dump(args) => run_dump(&args),
    }
}
