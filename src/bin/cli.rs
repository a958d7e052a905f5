// src/bin/cli.rs
use camp_watch::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    cli::run()?;
    Ok(())
}
