use anyhow::{Context, Result};
use std::io::Write;
use swizzle_typegen::{
    cli::{USAGE, parse_cli},
    generate,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the generated text.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_cli(&argv)?;
    if cli.help {
        println!("{USAGE}");
        return Ok(());
    }

    let text = generate(cli.format, &cli.emit_config());
    tracing::debug!(format = ?cli.format, bytes = text.len(), "generated");

    match cli.output.as_deref() {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "saved");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("failed to write to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
