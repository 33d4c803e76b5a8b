use thiserror::Error;

/// A mistake in the parser configuration.
///
/// These indicate a programming error by the integrator, and are raised when building the parser.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The short name is not a letter, digit, or one of `?!§$%#`.
    #[error("Config error: Invalid short option name '{0}'.")]
    InvalidShortName(char),

    /// The long name does not start alphanumeric, or contains characters other than letters, digits, `_` and `-`.
    #[error("Config error: Invalid long option name '{0}'.")]
    InvalidLongName(String),

    /// Neither a short nor a long name was given.
    #[error("Config error: An option requires a short and/or long name.")]
    MissingName,

    /// The short and long names are the same.
    #[error("Config error: The short and long name of option '{0}' must differ.")]
    IdenticalNames(String),

    /// The option name is already used within the same option set.
    #[error("Config error: Cannot duplicate the option '{0}'.")]
    DuplicateOption(String),

    /// A command option shares a name with a different, already registered option.
    #[error("Config error: The option '{0}' conflicts with an already registered option.")]
    ConflictingOptions(String),

    /// The option shorthand string contains a character outside of its grammar.
    #[error("Config error: Invalid character '{character}' in option specification '{specification}'.")]
    InvalidShorthand {
        /// The full shorthand string.
        specification: String,
        /// The offending character.
        character: char,
    },

    /// The option shorthand string is empty.
    #[error("Config error: The option specification must not be empty.")]
    EmptySpecification,

    /// The operand name is empty or contains whitespace.
    #[error("Config error: Invalid operand name '{0}'.")]
    InvalidOperandName(String),

    /// The operand name is already used within the same operand list.
    #[error("Config error: Cannot duplicate the operand '{0}'.")]
    DuplicateOperand(String),

    /// An operand was appended after a multiple operand.
    #[error("Config error: The operand '{0}' cannot follow the multiple operand '{1}'.")]
    OperandAfterMultiple(String, String),

    /// The command name is empty or starts with `-`.
    #[error("Config error: Invalid command name '{0}'.")]
    InvalidCommandName(String),

    /// The command name is already registered.
    #[error("Config error: Cannot duplicate the command '{0}'.")]
    DuplicateCommand(String),
}

/// A bad invocation by the end user.
///
/// Any of these aborts the parse; no partial result is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The token names an option which does not exist (under strict options).
    #[error("Parse error: Option '{0}' is unknown.")]
    UnknownOption(String),

    /// An option requiring a value did not receive one.
    #[error("Parse error: Option '{0}' must have a value.")]
    ArgumentMissing(String),

    /// A value was rejected by its validator.
    #[error("Parse error: '{value}' is not a valid value for '{name}'.")]
    InvalidValue {
        /// The option or operand name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// A required operand was never supplied.
    #[error("Parse error: Operand '{0}' is required.")]
    OperandMissing(String),

    /// There are more operands than declared (under strict operands).
    #[error("Parse error: No more operands expected, but received '{0}'.")]
    UnexpectedOperand(String),
}

/// A lookup against the [`Matches`](./struct.Matches.html) by a name that was never declared.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The operand name is not declared.
    #[error("Operand '{0}' is not declared.")]
    UnknownOperand(String),
}
