// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_UNIQUE_COLORS;

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Render Options:
    --bodies, -b <BODIES>    JSON file with tracked 2D bodies
    --image, -i <IMAGE>      Frame to draw on
    --output, -o <OUTPUT>    Output image [default: runs/render/<image name>]
    --only-segments          Draw bones only, no joint markers
    --show-id                Label each body with its track id
    --unique-colors <N>      Number of distinguishable body colors [default: 200]
    --font <FONT>            TTF font for labels [default: downloaded Arial.ttf]
    --verbose <BOOL>         Show verbose output [default: true]

Examples:
    skeleton-overlay render --bodies frame.json --image frame.jpg
    skeleton-overlay render -b frame.json -i frame.jpg --show-id --only-segments
    skeleton-overlay dump --bodies frame.json
    skeleton-overlay dump --bodies frame.json --numeric"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw tracked skeletons onto a frame
    Render(RenderArgs),
    /// Print tracked skeletons as text or coordinate arrays
    Dump(DumpArgs),
}

/// Arguments for the render command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON file with tracked 2D bodies
    #[arg(short, long)]
    pub bodies: PathBuf,

    /// Frame to draw on
    #[arg(short, long)]
    pub image: PathBuf,

    /// Output image path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Draw bones only, no joint markers
    #[arg(long, default_value_t = false)]
    pub only_segments: bool,

    /// Label each body with its track id
    #[arg(long, default_value_t = false)]
    pub show_id: bool,

    /// Number of distinguishable body colors
    #[arg(long, default_value_t = DEFAULT_UNIQUE_COLORS, value_parser = clap::value_parser!(u32).range(1..))]
    pub unique_colors: u32,

    /// TTF font for labels
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

/// Arguments for the dump command.
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// JSON file with tracked 2D bodies
    #[arg(short, long)]
    pub bodies: PathBuf,

    /// Print (joints, 2) coordinate arrays instead of text
    #[arg(long, default_value_t = false)]
    pub numeric: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_args_defaults() {
        let args = Cli::parse_from(["app", "render", "--bodies", "f.json", "--image", "f.jpg"]);
        match args.command {
            Commands::Render(render_args) => {
                assert_eq!(render_args.bodies, PathBuf::from("f.json"));
                assert_eq!(render_args.image, PathBuf::from("f.jpg"));
                assert!(render_args.output.is_none());
                assert!(!render_args.only_segments);
                assert!(!render_args.show_id);
                assert_eq!(render_args.unique_colors, 200);
                assert!(render_args.verbose);
            }
            Commands::Dump(_) => panic!("expected render"),
        }
    }

    #[test]
    fn test_render_args_custom() {
        let args = Cli::parse_from([
            "app",
            "render",
            "-b",
            "f.json",
            "-i",
            "f.jpg",
            "-o",
            "out.png",
            "--only-segments",
            "--show-id",
            "--unique-colors",
            "32",
            "--verbose",
            "false",
        ]);
        match args.command {
            Commands::Render(render_args) => {
                assert_eq!(render_args.output, Some(PathBuf::from("out.png")));
                assert!(render_args.only_segments);
                assert!(render_args.show_id);
                assert_eq!(render_args.unique_colors, 32);
                assert!(!render_args.verbose);
            }
            Commands::Dump(_) => panic!("expected render"),
        }
    }

    #[test]
    fn test_zero_unique_colors_rejected() {
        let result = Cli::try_parse_from([
            "app",
            "render",
            "-b",
            "f.json",
            "-i",
            "f.jpg",
            "--unique-colors",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dump_args() {
        let args = Cli::parse_from(["app", "dump", "--bodies", "f.json", "--numeric"]);
        match args.command {
            Commands::Dump(dump_args) => {
                assert_eq!(dump_args.bodies, PathBuf::from("f.json"));
                assert!(dump_args.numeric);
            }
            Commands::Render(_) => panic!("expected dump"),
        }
    }
}
