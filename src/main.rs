use clap::Parser;
use policy_wizard::cli::{self, Args};
use policy_wizard::core::{AppError, DefaultErrorReporter, ErrorReporter};
use policy_wizard::logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let _guard = match logging::init(&args) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("[WARNING] logging disabled: {:#}", err);
            None
        }
    };

    match cli::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<AppError>() {
                Some(app_error) => DefaultErrorReporter::new().report_error(app_error),
                None => eprintln!("[ERROR] {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}
