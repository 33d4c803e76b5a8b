use crate::api::{parse_shorthand, Operand, OperandList, OptionDef, OptionSet};
use crate::constant::COMMAND_WORD_SEPARATOR;
use crate::parser::ConfigError;

/// A named sub-command, with its own options and operands.
///
/// The name may consist of multiple words (ex: `"remote add"`).
/// The handler is never invoked by the parser; it is carried through to the [`Matches`](./struct.Matches.html).
///
/// ### Example
/// ```
/// # use optarg_builder as optarg;
/// use optarg::{Command, Mode, Operand, OperandMode, OptionDef};
///
/// let command = Command::new("remote add", "handle-remote-add")
///     .description("Add a remote.")
///     .option(OptionDef::new('f', "fetch", Mode::NoArgument))
///     .operand(Operand::new("name", OperandMode::REQUIRED))
///     .operand(Operand::new("url", OperandMode::REQUIRED));
///
/// assert_eq!(command.name(), "remote add");
/// assert_eq!(command.handler(), &"handle-remote-add");
/// ```
#[derive(Debug)]
pub struct Command<H> {
    name: String,
    words: usize,
    description: Option<String>,
    handler: H,
    options: OptionSet,
    operands: OperandList,
    error: Option<ConfigError>,
}

impl<H> Command<H> {
    /// Create a command.
    /// Consecutive whitespace in the name is normalized to a single space.
    pub fn new(name: impl Into<String>, handler: H) -> Self {
        let raw = name.into();
        let words: Vec<&str> = raw.split_whitespace().collect();
        let error = if words.is_empty() || raw.trim_start().starts_with('-') {
            Some(ConfigError::InvalidCommandName(raw.clone()))
        } else {
            None
        };

        Self {
            name: words.join(COMMAND_WORD_SEPARATOR),
            words: words.len(),
            description: None,
            handler,
            options: OptionSet::default(),
            operands: OperandList::default(),
            error,
        }
    }

    /// Document the command for the help text.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Add an option which only applies once this command is matched.
    pub fn option(mut self, option: OptionDef) -> Self {
        if self.error.is_none() {
            self.error = self.options.push(option).err();
        }

        self
    }

    /// Add options via the shorthand grammar (ex: `"ab:c::"`).
    pub fn options(mut self, specification: &str) -> Self {
        match parse_shorthand(specification) {
            Ok(options) => {
                for option in options {
                    self = self.option(option);
                }
            }
            Err(error) => {
                if self.error.is_none() {
                    self.error.replace(error);
                }
            }
        }

        self
    }

    /// Add an operand, positioned after those already added.
    pub fn operand(mut self, operand: Operand) -> Self {
        if self.error.is_none() {
            self.error = self.operands.push(operand).err();
        }

        self
    }

    /// The normalized command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The help text description.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The handler supplied at construction.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// The command's own options.
    pub fn option_definitions(&self) -> &[OptionDef] {
        self.options.as_slice()
    }

    /// The command's own operands.
    pub fn operand_definitions(&self) -> &[Operand] {
        self.operands.as_slice()
    }

    pub(crate) fn word_count(&self) -> usize {
        self.words
    }

    pub(crate) fn options_set(&self) -> &OptionSet {
        &self.options
    }

    // Surface the first configuration mistake made while setting up the command.
    pub(crate) fn check(&mut self) -> Result<(), ConfigError> {
        match self.error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
