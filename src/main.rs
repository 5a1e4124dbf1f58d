use clap::Parser;
use ext_lines::args::Args;
use ext_lines::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    let config = Config::from(args);
    match ext_lines::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(args: &Args) {
    let mut builder = match args.log_level() {
        Some(level) => {
            let mut builder = env_logger::Builder::new();
            builder.filter_level(level);
            builder
        }
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")),
    };
    builder.init();
}
