use anyhow::Result;
use std::env;
use tracing::info;

use csv2tsv::Input;

fn main() -> Result<()> {
    // Only output debug messages if CSV2TSV_DEBUG is set
    if env::var("CSV2TSV_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("csv2tsv=debug")
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .init();
    }

    let input = Input::from_args(env::args().skip(1))?;
    info!("Starting csv2tsv with input: {:?}", input);

    let stats = csv2tsv::run(&input)?;
    info!("Wrote {} rows", stats.rows);

    Ok(())
}
