//! `MySpend` mobile shell
//!
//! Terminal stand-in for the phone wrapper: asks for the server address,
//! loads the dashboard and shows an error screen with retry when it can't.

use myspend::shell::ShellView;
use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "myspend=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut view = ShellView::Connect;

    // An address on the command line skips the first prompt
    if let Some(arg) = std::env::args().nth(1) {
        view = view.connect(&arg);
    }

    loop {
        view = match view {
            ShellView::Connect => {
                prompt("Server address (e.g. 192.168.1.20): ")?;
                let Some(line) = lines.next().transpose()? else {
                    return Ok(());
                };
                ShellView::Connect.connect(&line)
            }
            ShellView::Browsing { url } => {
                let browsing = ShellView::Browsing { url: url.clone() };
                match load(&url) {
                    Ok(bytes) => {
                        println!("Loaded {url} ({bytes} bytes)");
                        tracing::info!(%url, bytes, "Page loaded");
                        return Ok(());
                    }
                    Err(description) => {
                        tracing::warn!(%url, error = %description, "Page failed to load");
                        browsing.load_failed(description)
                    }
                }
            }
            ShellView::LoadError { url, description } => {
                println!("Could not load {url}");
                println!("  {description}");
                prompt("[r]etry, [b]ack or [q]uit: ")?;
                let Some(line) = lines.next().transpose()? else {
                    return Ok(());
                };
                let view = ShellView::LoadError { url, description };
                match line.trim().to_lowercase().as_str() {
                    "r" | "retry" => view.retry(),
                    "b" | "back" => view.back(),
                    "q" | "quit" => return Ok(()),
                    _ => view,
                }
            }
        };
    }
}

fn prompt(text: &str) -> io::Result<()> {
    let mut out = io::stdout();
    out.write_all(text.as_bytes())?;
    out.flush()
}

/// Blocking GET; returns the body size or a description of the failure
fn load(url: &str) -> Result<usize, String> {
    let response = ureq::get(url).call().map_err(|e| e.to_string())?;
    let body = response.into_string().map_err(|e| e.to_string())?;
    Ok(body.len())
}
