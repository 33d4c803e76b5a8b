use crate::api::{Argument, Validator};
use crate::constant::SHORT_SYMBOLS;
use crate::model::Mode;
use crate::parser::ConfigError;

/// An option definition: a flag named by a short (`-v`) and/or long (`--verbose`) name.
///
/// Names are validated when the parser is built.
///
/// ### Example
/// ```
/// # use optarg_builder as optarg;
/// use optarg::{Mode, OptionDef};
///
/// let option = OptionDef::new('o', "output", Mode::RequiredArgument)
///     .description("Where to write the result.")
///     .argument_name("file")
///     .default_value("out.txt");
///
/// assert_eq!(option.short(), Some('o'));
/// assert_eq!(option.long(), Some("output"));
/// assert_eq!(option.argument_descriptor().default_text(), Some("out.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct OptionDef {
    short: Option<char>,
    long: Option<String>,
    mode: Mode,
    description: Option<String>,
    argument: Argument,
}

impl OptionDef {
    /// Create an option with both a short and long name.
    pub fn new(short: char, long: impl Into<String>, mode: Mode) -> Self {
        Self::with_names(Some(short), Some(long.into()), mode)
    }

    /// Create an option with only a short name.
    pub fn short_only(short: char, mode: Mode) -> Self {
        Self::with_names(Some(short), None, mode)
    }

    /// Create an option with only a long name.
    pub fn long_only(long: impl Into<String>, mode: Mode) -> Self {
        Self::with_names(None, Some(long.into()), mode)
    }

    /// Create an option from optional names; at least one must be present by the time the parser is built.
    pub fn with_names(short: Option<char>, long: Option<String>, mode: Mode) -> Self {
        let mut argument = Argument::default();
        argument.set_multiple(mode == Mode::MultipleArgument);

        Self {
            short,
            long,
            mode,
            description: None,
            argument,
        }
    }

    /// Document the option for the help text.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// The value resolved when the option is never specified.
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.argument = self.argument.default_value(default);
        self
    }

    /// Reject supplied values for which the predicate returns `false`.
    pub fn validator(mut self, predicate: impl Fn(&str) -> bool + 'static) -> Self {
        self.argument = self.argument.validator(predicate);
        self
    }

    /// The name of the value in the help text (ex: `--output <file>`).
    pub fn argument_name(mut self, name: impl Into<String>) -> Self {
        self.argument.set_name(name);
        self
    }

    /// Replace the value descriptor entirely.
    /// Its multiplicity always follows the option's mode.
    pub fn argument(mut self, mut argument: Argument) -> Self {
        argument.set_multiple(self.mode == Mode::MultipleArgument);
        self.argument = argument;
        self
    }

    pub(crate) fn with_validator(mut self, validator: Validator) -> Self {
        self.argument.set_validator(validator);
        self
    }

    /// The short name.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// The long name.
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The argument arity.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The help text description.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The bound value descriptor.
    pub fn argument_descriptor(&self) -> &Argument {
        &self.argument
    }

    /// The name used in messages: the long name if present, otherwise the short name.
    pub fn name(&self) -> String {
        match (&self.long, &self.short) {
            (Some(long), _) => long.clone(),
            (None, Some(short)) => short.to_string(),
            (None, None) => String::default(),
        }
    }

    /// Whether the option is matched by the given short or long name.
    pub fn matches_name(&self, name: &str) -> bool {
        self.long.as_deref() == Some(name) || self.short.map_or(false, |s| is_char(name, s))
    }

    // The identity of an option: both names, the mode, and the value descriptor.
    pub(crate) fn same_definition(&self, other: &OptionDef) -> bool {
        self.short == other.short
            && self.long == other.long
            && self.mode == other.mode
            && self.argument.same_descriptor(&other.argument)
    }

    pub(crate) fn shares_name(&self, other: &OptionDef) -> Option<String> {
        if let (Some(a), Some(b)) = (self.short, other.short) {
            if a == b {
                return Some(a.to_string());
            }
        }

        if let (Some(a), Some(b)) = (&self.long, &other.long) {
            if a == b {
                return Some(a.clone());
            }
        }

        None
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if let Some(short) = self.short {
            if !is_valid_short(short) {
                return Err(ConfigError::InvalidShortName(short));
            }
        }

        match (&self.short, &self.long) {
            (None, None) => Err(ConfigError::MissingName),
            (_, Some(long)) if !is_valid_long(long) => {
                Err(ConfigError::InvalidLongName(long.clone()))
            }
            (Some(short), Some(long)) if is_char(long, *short) => {
                Err(ConfigError::IdenticalNames(long.clone()))
            }
            _ => Ok(()),
        }
    }
}

fn is_char(name: &str, character: char) -> bool {
    let mut chars = name.chars();
    chars.next() == Some(character) && chars.next().is_none()
}

pub(crate) fn is_valid_short(short: char) -> bool {
    short.is_ascii_alphanumeric() || SHORT_SYMBOLS.contains(short)
}

pub(crate) fn is_valid_long(long: &str) -> bool {
    let mut chars = long.chars();

    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        _ => false,
    }
}

/// An ordered set of options with unique names.
#[derive(Debug, Clone, Default)]
pub(crate) struct OptionSet {
    options: Vec<OptionDef>,
}

impl OptionSet {
    pub(crate) fn push(&mut self, option: OptionDef) -> Result<(), ConfigError> {
        option.validate()?;

        if let Some(name) = self.options.iter().find_map(|o| o.shares_name(&option)) {
            return Err(ConfigError::DuplicateOption(name));
        }

        self.options.push(option);
        Ok(())
    }

    pub(crate) fn as_slice(&self) -> &[OptionDef] {
        &self.options
    }

    // Find an option that shares a name with, but differs from, the candidate.
    pub(crate) fn conflict(&self, candidate: &OptionDef) -> Option<String> {
        self.options
            .iter()
            .filter(|o| !o.same_definition(candidate))
            .find_map(|o| o.shares_name(candidate))
    }
}
