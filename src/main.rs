// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use std::process::ExitCode;

const HELP: &str = "\
Image search gallery

USAGE:
  iced_gallery [OPTIONS] [QUERY]

ARGS:
  <QUERY>               Search submitted when the window opens

OPTIONS:
  --api-key <KEY>       API key (overrides ICED_GALLERY_API_KEY and settings.toml)
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let api_key = args.opt_value_from_str("--api-key")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let query = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(Some(Flags {
        query: (!query.trim().is_empty()).then_some(query),
        api_key,
        config_dir,
    }))
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    init_tracing();

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
