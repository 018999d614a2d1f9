// SPDX-License-Identifier: MPL-2.0
use image_selector::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

const HELP: &str = "\
Multi-select image grid driven by a host over stdin/stdout

USAGE:
  image_selector [OPTIONS] [IMAGES...]

OPTIONS:
  --config-dir <DIR>       Directory holding settings.toml
  --focus-border           Draw the theme-coloured border while focused
  --thumbnail-size <PX>    Longest thumbnail side for local images
  -h, --help               Print this help

With IMAGES, the files are shown directly instead of waiting for a host.
";

fn main() -> iced::Result {
    init_tracer();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::start(flags)
}

/// Parses CLI arguments. `Ok(None)` means help was requested.
fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let config_dir = args.opt_value_from_str("--config-dir")?;
    let focus_border = args.contains("--focus-border");
    let thumbnail_size = args.opt_value_from_str("--thumbnail-size")?;
    let demo_files = args.finish().into_iter().map(PathBuf::from).collect();

    Ok(Some(Flags {
        config_dir,
        focus_border,
        thumbnail_size,
        demo_files,
    }))
}

/// Logs go to stderr: stdout carries the host protocol.
fn init_tracer() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("image_selector=info"));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();
}
