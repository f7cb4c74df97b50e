use std::process::ExitCode;

use clap::Parser;
use mortgage_calculator::{app, config};
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 인자를 해석한 뒤 계산기를 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = config::Config::from(config::Cli::parse());
    match app::run(&cfg) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
