use crate::cli::Command;
use std::env;

/// Execution contexts that influence how logging is routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Commands that prompt the user on the terminal.
    Interactive,
    /// Local commands whose console can carry log lines.
    LocalDev,
    /// Invocations driven by another process that parses our output.
    RemoteAgent,
}

impl ExecutionContext {
    /// Returns `true` when console sinks are off unless explicitly configured.
    pub fn disables_console(self) -> bool {
        matches!(
            self,
            ExecutionContext::Interactive | ExecutionContext::RemoteAgent
        )
    }
}

/// Derive the active execution context from a parsed CLI command plus overrides.
pub fn detect_context(command: &Command) -> ExecutionContext {
    if remote_override_enabled() {
        return ExecutionContext::RemoteAgent;
    }

    match command {
        Command::Remove(args) if !args.yes => ExecutionContext::Interactive,
        Command::Inspect(_) | Command::Add(_) | Command::Remove(_) => ExecutionContext::LocalDev,
    }
}

fn remote_override_enabled() -> bool {
    env::var("POLICY_WIZARD_REMOTE_AGENT")
        .map(|value| value.trim() == "1")
        .unwrap_or(false)
}
