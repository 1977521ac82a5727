use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use rampcut::cli::Cli;
use rampcut::init_logging;
use rampcut_postproc::PostProcessor;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let settings = cli.settings();
    settings.validate()?;
    let output_path = cli.output_path();
    info!(
        input = %cli.input.display(),
        output = %output_path.display(),
        ?settings,
        "starting post-process"
    );

    let reader = BufReader::new(
        File::open(&cli.input)
            .with_context(|| format!("failed to open {}", cli.input.display()))?,
    );
    let writer = BufWriter::new(
        File::create(&output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?,
    );

    let summary = PostProcessor::new(&settings).process_with_progress(reader, writer, |_| {
        print!(".");
        let _ = io::stdout().flush();
    })?;

    println!("\n==Success: {} shapes processed ==", summary.shapes_processed);
    Ok(())
}
