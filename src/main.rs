use clap::Parser;
use devfarm_release::cli::Cli;
use devfarm_release::{logging, output};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.quiet) {
        output::print_warning(&format!("could not initialize logging: {}", e));
    }

    match cli.execute().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e.to_string());
            ExitCode::from(e.exit_code())
        }
    }
}
