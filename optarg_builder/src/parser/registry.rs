use std::rc::Rc;

use crate::api::{Command, OptionDef, OptionSet};
use crate::constant::COMMAND_WORD_SEPARATOR;
use crate::parser::ConfigError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The registered commands, looked up by (possibly multi-word) name.
#[derive(Debug)]
pub(crate) struct CommandRegistry<H> {
    commands: Vec<Rc<Command<H>>>,
    max_words: usize,
}

impl<H> Default for CommandRegistry<H> {
    fn default() -> Self {
        Self {
            commands: Vec::default(),
            max_words: 0,
        }
    }
}

impl<H> CommandRegistry<H> {
    /// Register the command, rejecting it if one of its options conflicts with a differing option
    /// of the same name (either of the globals, or of a previously registered command).
    pub(crate) fn register(
        &mut self,
        mut command: Command<H>,
        globals: &OptionSet,
    ) -> Result<(), ConfigError> {
        command.check()?;

        if self.commands.iter().any(|c| c.name() == command.name()) {
            return Err(ConfigError::DuplicateCommand(command.name().to_string()));
        }

        for option in command.option_definitions() {
            if let Some(name) = globals.conflict(option).or_else(|| self.conflict(option)) {
                return Err(ConfigError::ConflictingOptions(name));
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Registered command '{}' with {} option(s) and {} operand(s).",
                command.name(),
                command.option_definitions().len(),
                command.operand_definitions().len()
            );
        }

        self.max_words = std::cmp::max(self.max_words, command.word_count());
        self.commands.push(Rc::new(command));
        Ok(())
    }

    /// Find a registered option which shares a name with, but differs from, the candidate.
    pub(crate) fn conflict(&self, candidate: &OptionDef) -> Option<String> {
        self.commands
            .iter()
            .find_map(|c| c.options_set().conflict(candidate))
    }

    /// Find the command named by the leading candidate tokens.
    /// Longer (multi-word) names take priority; returns the command and the number of tokens it spans.
    pub(crate) fn lookup(&self, candidates: &[&str]) -> Option<(&Rc<Command<H>>, usize)> {
        let widest = std::cmp::min(self.max_words, candidates.len());

        for width in (1..=widest).rev() {
            let name = candidates[..width].join(COMMAND_WORD_SEPARATOR);

            if let Some(command) = self.commands.iter().find(|c| c.name() == name) {
                return Some((command, width));
            }
        }

        None
    }

    pub(crate) fn max_words(&self) -> usize {
        self.max_words
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Rc<Command<H>>> {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mode;
    use rstest::rstest;

    fn registry() -> CommandRegistry<&'static str> {
        let mut registry = CommandRegistry::default();
        registry
            .register(Command::new("remote", "remote"), &OptionSet::default())
            .unwrap();
        registry
            .register(Command::new("remote add", "remote-add"), &OptionSet::default())
            .unwrap();
        registry
            .register(
                Command::new("remote set url", "remote-set-url"),
                &OptionSet::default(),
            )
            .unwrap();
        registry
    }

    #[rstest]
    #[case(vec!["remote"], Some(("remote", 1)))]
    #[case(vec!["remote", "origin"], Some(("remote", 1)))]
    #[case(vec!["remote", "add"], Some(("remote-add", 2)))]
    #[case(vec!["remote", "add", "origin"], Some(("remote-add", 2)))]
    #[case(vec!["remote", "set", "url"], Some(("remote-set-url", 3)))]
    #[case(vec!["remote", "set", "origin"], Some(("remote", 1)))]
    #[case(vec!["add"], None)]
    #[case(vec![], None)]
    fn lookup(#[case] candidates: Vec<&str>, #[case] expected: Option<(&str, usize)>) {
        let registry = registry();
        let actual = registry
            .lookup(candidates.as_slice())
            .map(|(command, width)| (*command.handler(), width));
        assert_eq!(actual, expected);
        assert_eq!(registry.max_words(), 3);
    }

    #[test]
    fn register_duplicate() {
        let mut registry = registry();
        assert_eq!(
            registry
                .register(Command::new("remote  add", "again"), &OptionSet::default())
                .unwrap_err(),
            ConfigError::DuplicateCommand("remote add".to_string())
        );
    }

    #[test]
    fn register_conflicting_global() {
        let mut globals = OptionSet::default();
        globals
            .push(OptionDef::new('v', "verbose", Mode::NoArgument))
            .unwrap();
        let mut registry = CommandRegistry::default();

        registry
            .register(
                Command::new("same", ()).option(OptionDef::new('v', "verbose", Mode::NoArgument)),
                &globals,
            )
            .unwrap();

        assert_eq!(
            registry
                .register(
                    Command::new("differs", ())
                        .option(OptionDef::new('v', "value", Mode::RequiredArgument)),
                    &globals,
                )
                .unwrap_err(),
            ConfigError::ConflictingOptions("v".to_string())
        );
    }

    #[test]
    fn register_conflicting_command() {
        let mut registry = CommandRegistry::default();
        registry
            .register(
                Command::new("first", ()).option(OptionDef::long_only("force", Mode::NoArgument)),
                &OptionSet::default(),
            )
            .unwrap();

        registry
            .register(
                Command::new("second", ()).option(OptionDef::long_only("force", Mode::NoArgument)),
                &OptionSet::default(),
            )
            .unwrap();

        assert_eq!(
            registry
                .register(
                    Command::new("third", ())
                        .option(OptionDef::long_only("force", Mode::OptionalArgument)),
                    &OptionSet::default(),
                )
                .unwrap_err(),
            ConfigError::ConflictingOptions("force".to_string())
        );
    }

    #[test]
    fn register_invalid_command() {
        let mut registry: CommandRegistry<()> = CommandRegistry::default();
        assert_eq!(
            registry
                .register(Command::new("-x", ()), &OptionSet::default())
                .unwrap_err(),
            ConfigError::InvalidCommandName("-x".to_string())
        );
        assert!(registry.is_empty());
    }
}
