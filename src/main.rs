//! pixterm CLI entrypoint.

use std::io::{self, ErrorKind};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use pixterm::cli::Cli;
use pixterm::source::{load_image, HttpFetcher};
use pixterm::terminal;
use pixterm::{
    render_image, FileConfig, ImageSource, RenderConfig, RenderOptions, TerminalCapability,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "pixterm", &mut io::stdout());
        return Ok(());
    }

    run(&cli)
}

/// Log to stderr; `-v` flags raise the level and `RUST_LOG` can refine it.
#[cfg(not(tarpaulin_include))]
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    // Validate every setting before touching the image.
    let file = FileConfig::load()?;
    let config = RenderConfig::resolve(cli.overrides(), &file)?;
    let capability = config.color.capability(TerminalCapability::detect);
    let desired_width = config.width.resolve(terminal::columns);
    tracing::debug!(
        width = %config.width,
        desired_width,
        mode = %config.mode,
        true_color = capability.true_color(),
        "Resolved render settings"
    );

    let input = cli
        .image
        .as_deref()
        .context("No image given (see --help)")?;
    let source = ImageSource::parse(input);
    let image = load_image(&source, &HttpFetcher::new())?;

    let options = RenderOptions::new(config.mode, capability);
    let frame = render_image(&image, desired_width, options)
        .with_context(|| format!("Cannot render {} at {} columns", source, desired_width))?;

    match frame.write_to(&mut io::stdout().lock()) {
        // Piped into `head` or similar; nothing left to do.
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other.context("Failed to write to stdout"),
    }
}
