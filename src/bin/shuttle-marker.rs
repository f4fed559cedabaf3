//! Marker CLI.
//!
//! Prints a marker data URI (or the raw SVG) for a color and heading.

use clap::Parser;
use shuttle_marker::{MarkerColor, MarkerStyle};

#[derive(Parser, Debug)]
#[command(name = "shuttle-marker")]
#[command(author, version, about = "Render a rotated map marker as a data URI", long_about = None)]
struct Cli {
    /// Marker fill color (any CSS color)
    #[arg(short, long, default_value = "#33A7FF")]
    color: String,

    /// Heading in degrees, clockwise from north
    #[arg(short = 'H', long, default_value = "0", allow_negative_numbers = true)]
    heading: f64,

    /// Rasterize to a PNG data URI of this size instead of SVG
    #[arg(long, conflicts_with_all = ["svg", "style"])]
    png: Option<u32>,

    /// Print the substituted SVG document instead of a data URI
    #[arg(long)]
    svg: bool,

    /// Read color, heading and size from a JSON style instead
    #[arg(long, conflicts_with_all = ["color", "heading"])]
    style: Option<String>,

    /// Reject colors that would break out of the SVG attribute
    #[arg(long)]
    strict: bool,
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Produces the text printed for the parsed arguments.
fn run(cli: Cli) -> shuttle_marker::Result<String> {
    let mut style = match cli.style {
        Some(json) => MarkerStyle::from_json(&json)?,
        None => MarkerStyle::new(cli.color, cli.heading),
    };

    if cli.strict {
        style.color = MarkerColor::checked(style.color.as_str())?;
    }
    if let Some(size) = cli.png {
        style.size = Some(size);
    }

    if cli.svg {
        return Ok(style.icon().svg());
    }
    style.render()
}
