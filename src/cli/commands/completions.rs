//! Shell completions generation.
//!
//! The `lesson-lint completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, "lesson-lint", &mut buf);
        ui.report(&String::from_utf8_lossy(&buf));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap_complete::Shell;

    fn generate(shell: Shell) -> String {
        let mut ui = MockUI::new();
        let result = CompletionsCommand::new(CompletionsArgs { shell })
            .execute(&mut ui)
            .unwrap();
        assert!(result.success);
        ui.report_text()
    }

    #[test]
    fn generates_bash_completions() {
        let output = generate(Shell::Bash);
        assert!(output.contains("lesson-lint"));
        assert!(output.contains("complete"));
    }

    #[test]
    fn generates_zsh_completions() {
        assert!(generate(Shell::Zsh).contains("lesson-lint"));
    }

    #[test]
    fn generates_fish_completions() {
        let output = generate(Shell::Fish);
        assert!(output.contains("lesson-lint"));
        assert!(output.contains("check"));
    }
}
