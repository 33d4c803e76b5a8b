use crate::api::Argument;
use crate::model::OperandMode;
use crate::parser::ConfigError;

/// A positional operand definition.
///
/// ### Example
/// ```
/// # use optarg_builder as optarg;
/// use optarg::{Operand, OperandMode};
///
/// let operand = Operand::new("file", OperandMode::REQUIRED | OperandMode::MULTIPLE)
///     .description("The files to process.");
///
/// assert!(operand.is_required());
/// assert!(operand.is_multiple());
/// ```
#[derive(Debug, Clone)]
pub struct Operand {
    name: String,
    mode: OperandMode,
    description: Option<String>,
    argument: Argument,
}

impl Operand {
    /// Create an operand.
    pub fn new(name: impl Into<String>, mode: OperandMode) -> Self {
        let name = name.into();
        let mut argument = Argument::new(name.clone());
        argument.set_multiple(mode.is_multiple());

        Self {
            name,
            mode,
            description: None,
            argument,
        }
    }

    /// Document the operand for the help text.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// The value resolved when the operand is not supplied.
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.argument = self.argument.default_value(default);
        self
    }

    /// Reject supplied values for which the predicate returns `false`.
    pub fn validator(mut self, predicate: impl Fn(&str) -> bool + 'static) -> Self {
        self.argument = self.argument.validator(predicate);
        self
    }

    /// The operand name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The operand mode.
    pub fn mode(&self) -> OperandMode {
        self.mode
    }

    /// Whether the operand must be supplied.
    pub fn is_required(&self) -> bool {
        self.mode.is_required()
    }

    /// Whether the operand absorbs all the remaining operand tokens.
    pub fn is_multiple(&self) -> bool {
        self.mode.is_multiple()
    }

    /// The help text description.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The default value, if any.
    pub fn default_text(&self) -> Option<&str> {
        self.argument.default_text()
    }

    /// Whether the value passes the validator (always `true` without one).
    pub fn validates(&self, value: &str) -> bool {
        self.argument.validates(value)
    }
}

/// The ordered operands of a parser or command.
#[derive(Debug, Clone, Default)]
pub(crate) struct OperandList {
    operands: Vec<Operand>,
}

impl OperandList {
    pub(crate) fn push(&mut self, operand: Operand) -> Result<(), ConfigError> {
        if operand.name.is_empty() || operand.name.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidOperandName(operand.name));
        }

        if self.operands.iter().any(|o| o.name == operand.name) {
            return Err(ConfigError::DuplicateOperand(operand.name));
        }

        // A multiple operand consumes "the rest", so nothing may follow it.
        if let Some(last) = self.operands.last() {
            if last.is_multiple() {
                return Err(ConfigError::OperandAfterMultiple(
                    operand.name,
                    last.name.clone(),
                ));
            }
        }

        self.operands.push(operand);
        Ok(())
    }

    pub(crate) fn as_slice(&self) -> &[Operand] {
        &self.operands
    }
}
