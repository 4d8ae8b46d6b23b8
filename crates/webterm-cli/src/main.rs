use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use webterm_core::Session;

/// Interactive shell over an in-memory filesystem.
#[derive(Parser, Debug)]
#[command(name = "webterm", version, about)]
struct Args {
    /// TOML file with `user` and `host` keys
    #[arg(long)]
    config: Option<PathBuf>,

    /// User name shown in the prompt
    #[arg(long)]
    user: Option<String>,

    /// Host name shown in the prompt
    #[arg(long)]
    host: Option<String>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = match webterm_cli::load_config(args.config.as_deref(), args.user, args.host) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("webterm: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match webterm_cli::run(&mut session, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("webterm: {e}");
            ExitCode::FAILURE
        }
    }
}
