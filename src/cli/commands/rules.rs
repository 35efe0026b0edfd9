//! Rules command implementation.
//!
//! The `lesson-lint rules` command lists the built-in rules in the order
//! they run.

use crate::error::Result;
use crate::lint::RuleRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
pub struct RulesCommand {
    registry: RuleRegistry,
}

impl RulesCommand {
    /// Create a rules command listing the built-in rules.
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_builtins(),
        }
    }

    fn render(&self) -> String {
        let width = self
            .registry
            .iter()
            .map(|r| r.id().0.len())
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        for rule in self.registry.iter() {
            output.push_str(&format!(
                "{:<width$}  {:<8}  {}\n",
                rule.id().0,
                rule.default_severity().as_str(),
                rule.description(),
                width = width
            ));
        }
        output
    }
}

impl Default for RulesCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for RulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.report(&self.render());
        Ok(CommandResult::success())
    }
}
