use std::io;

use sdlc_base64::{logger::setup_logger, write_encoded_stages};

fn main() -> anyhow::Result<()> {
    setup_logger();

    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    log::info!("{name} v{version} encoding stages...");

    let stdout = io::stdout();
    write_encoded_stages(&mut stdout.lock())?;

    Ok(())
}
