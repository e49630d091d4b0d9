use clap::{CommandFactory, FromArgMatches};
use figspec::cli::{Cli, Commands, HELP_STYLES};
use figspec::commands;
use figspec::config::FigspecConfig;
use figspec::logging;
use std::path::Path;

/// Reset SIGPIPE to default behavior so piping to `head` etc. doesn't panic.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: libc::signal only changes the disposition of SIGPIPE back to the
    // default (terminate on broken pipe). No memory is touched.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

fn main() {
    reset_sigpipe();

    let matches = Cli::command().styles(HELP_STYLES).get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    // Config warnings need somewhere to go before the configured subscriber exists.
    let config = tracing::subscriber::with_default(logging::bootstrap(), || {
        FigspecConfig::load(Path::new("."))
    });
    logging::init(cli.verbose, &config.log);

    let exit_code = match cli.command {
        Commands::Generate(args) => commands::generate::run(args, &config),
        Commands::Completions(args) => commands::completions::run(Cli::command(), args, &config),
    };

    std::process::exit(exit_code);
}
