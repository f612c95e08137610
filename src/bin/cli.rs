// src/bin/cli.rs
use kbo_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let summary = cli::run().map_err(|e| color_eyre::eyre::eyre!("{e}"))?;
    if !summary.all_ok() {
        std::process::exit(2);
    }
    Ok(())
}
