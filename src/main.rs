// SPDX-License-Identifier: MPL-2.0
use dog_grid::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Dog Grid

USAGE:
  dog_grid [OPTIONS]

OPTIONS:
  --lang <LOCALE>         Interface language (e.g. en-US, fr)
  --config-dir <DIR>      Directory holding settings.toml
  --export-dir <DIR>      Directory dog-grid.png is written to
  -v, --verbose           Debug logging (RUST_LOG takes precedence)
  -h, --help              Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_string(&mut args, "--lang"),
        config_dir: opt_string(&mut args, "--config-dir"),
        export_dir: opt_string(&mut args, "--export-dir"),
        verbose: args.contains(["-v", "--verbose"]),
    };

    init_logging(flags.verbose);

    let leftover = args.finish();
    if !leftover.is_empty() {
        tracing::warn!(?leftover, "ignoring unknown arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone(), flags.export_dir.clone());
    app::run(flags)
}

fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("{key}: {err}");
            None
        }
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "dog_grid=debug" } else { "dog_grid=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
