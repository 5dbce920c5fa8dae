use crate::core::confirmation::{
    ConfirmRequest, ConfirmationModal, TranslationParams, Translator,
};
use crate::core::error::AppError;
use crate::core::types::{ConfirmationOutcome, ErrorCategory};
use async_trait::async_trait;
use std::io::{self, Write};
use std::sync::Arc;
use tokio::task::spawn_blocking;

/// Terminal rendition of the confirm modal. Prompts go to stderr so stdout
/// stays free for command output.
pub struct ConsoleModal {
    translator: Arc<dyn Translator>,
}

impl ConsoleModal {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }
}

/// `None` at end of input.
async fn read_line_blocking() -> Result<Option<String>, AppError> {
    spawn_blocking(|| {
        let mut buffer = String::new();
        let read = io::stdin().read_line(&mut buffer).map_err(|err| {
            AppError::new(
                ErrorCategory::IoError,
                format!("failed to read stdin: {}", err),
            )
        })?;
        Ok(if read == 0 { None } else { Some(buffer) })
    })
    .await
    .map_err(|err| {
        AppError::new(
            ErrorCategory::InternalError,
            format!("console input task cancelled: {}", err),
        )
    })?
}

pub(crate) fn parse_answer(line: &str) -> Option<ConfirmationOutcome> {
    match line.trim().to_lowercase().as_str() {
        "yes" | "y" | "confirm" => Some(ConfirmationOutcome::Confirmed),
        "no" | "n" | "cancel" => Some(ConfirmationOutcome::Cancelled),
        _ => None,
    }
}

#[async_trait]
impl ConfirmationModal for ConsoleModal {
    async fn open_modal(&self, request: &ConfirmRequest) -> Result<ConfirmationOutcome, AppError> {
        let title = self
            .translator
            .instant(&request.title, &TranslationParams::new());
        eprintln!("{}", title);
        if !request.message.is_empty() {
            eprintln!("{}", request.message);
        }
        loop {
            eprint!("Proceed? (yes/no): ");
            io::stderr().flush().ok();
            let Some(line) = read_line_blocking().await? else {
                return Ok(ConfirmationOutcome::Cancelled);
            };
            match parse_answer(&line) {
                Some(outcome) => return Ok(outcome),
                None => eprintln!("Please respond with 'yes' or 'no'."),
            }
        }
    }
}
