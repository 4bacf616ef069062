//! CLI entry point for inspecting subdivided single-stroke paths

use art_path::io::cli::{ChainProcessor, Cli};
use clap::Parser;

// The report is the program's output
#[allow(clippy::print_stdout)]
fn main() -> art_path::Result<()> {
    let cli = Cli::parse();
    let processor = ChainProcessor::new(cli);
    let report = processor.process()?;
    println!("{report}");
    Ok(())
}
