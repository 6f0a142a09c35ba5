use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "theme-normalize",
    about = "Rescale 0–255 RGBA color fields in a JSON theme to 0.0–1.0"
)]
struct Cli {
    /// Path to the un-normalized input theme (a JSON object).
    input: PathBuf,
    /// Path to write the normalized theme to. Replaced if it exists.
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; the progress notices below own stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!(
        "Normalizing {} to {}",
        cli.input.display(),
        cli.output.display()
    );

    theme_normalize::run(&cli.input, &cli.output)?;

    println!(
        "Successfully normalized {} to {}",
        cli.input.display(),
        cli.output.display()
    );
    Ok(())
}
