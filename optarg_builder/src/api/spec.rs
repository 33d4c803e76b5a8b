use crate::api::{OptionDef, Validator};
use crate::model::Mode;
use crate::parser::ConfigError;

/// An option specification: either a fully formed [`OptionDef`], or a [`Shorthand`] tuple.
///
/// Shorthand tuples are normalized into an `OptionDef` when the parser is built.
#[derive(Debug, Clone)]
pub enum OptionSpec {
    /// A fully formed option.
    Defined(OptionDef),
    /// A shorthand tuple, completed with the parser's default mode.
    Shorthand(Shorthand),
}

impl From<OptionDef> for OptionSpec {
    fn from(value: OptionDef) -> Self {
        OptionSpec::Defined(value)
    }
}

impl From<Shorthand> for OptionSpec {
    fn from(value: Shorthand) -> Self {
        OptionSpec::Shorthand(value)
    }
}

impl OptionSpec {
    pub(crate) fn normalize(self, default_mode: Mode) -> Result<OptionDef, ConfigError> {
        match self {
            OptionSpec::Defined(option) => Ok(option),
            OptionSpec::Shorthand(shorthand) => shorthand.normalize(default_mode),
        }
    }
}

#[derive(Debug, Clone)]
enum ShorthandNames {
    // Classified by length: a single character is the short name, otherwise the long name.
    Single(String),
    Pair(Option<char>, Option<String>),
}

/// The tuple form of an option: `(short, long, mode, description, default, validator)`.
///
/// ### Example
/// ```
/// # use optarg_builder as optarg;
/// use optarg::{Mode, Shorthand};
///
/// // Single identifiers are classified by length.
/// let verbose = Shorthand::name("v");
/// let output = Shorthand::name("output").mode(Mode::RequiredArgument);
/// let level = Shorthand::names(Some('l'), Some("level"))
///     .mode(Mode::OptionalArgument)
///     .description("The level.")
///     .default_value("1");
/// ```
#[derive(Debug, Clone)]
pub struct Shorthand {
    names: ShorthandNames,
    mode: Option<Mode>,
    description: Option<String>,
    default: Option<String>,
    validator: Option<Validator>,
}

impl Shorthand {
    /// A single identifier; short when it is one character long, otherwise long.
    pub fn name(name: impl Into<String>) -> Self {
        Self::from_names(ShorthandNames::Single(name.into()))
    }

    /// Explicit short and long names.
    pub fn names(short: Option<char>, long: Option<&str>) -> Self {
        Self::from_names(ShorthandNames::Pair(short, long.map(str::to_string)))
    }

    fn from_names(names: ShorthandNames) -> Self {
        Self {
            names,
            mode: None,
            description: None,
            default: None,
            validator: None,
        }
    }

    /// The argument arity; when omitted, the parser's default mode applies.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode.replace(mode);
        self
    }

    /// Document the option for the help text.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// The value resolved when the option is never specified.
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default.replace(default.into());
        self
    }

    /// Reject supplied values for which the predicate returns `false`.
    pub fn validator(mut self, predicate: impl Fn(&str) -> bool + 'static) -> Self {
        self.validator.replace(Validator::new(predicate));
        self
    }

    fn normalize(self, default_mode: Mode) -> Result<OptionDef, ConfigError> {
        let Shorthand {
            names,
            mode,
            description,
            default,
            validator,
        } = self;
        let (short, long) = match names {
            ShorthandNames::Single(name) => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(short), None) => (Some(short), None),
                    (None, _) => return Err(ConfigError::MissingName),
                    _ => (None, Some(name)),
                }
            }
            ShorthandNames::Pair(short, long) => (short, long),
        };
        let mut option = OptionDef::with_names(short, long, mode.unwrap_or(default_mode));

        if let Some(description) = description {
            option = option.description(description);
        }

        if let Some(default) = default {
            option = option.default_value(default);
        }

        if let Some(validator) = validator {
            option = option.with_validator(validator);
        }

        Ok(option)
    }
}

/// Parse the getopt shorthand grammar into options.
///
/// Each letter or digit is a short option.
/// It may be followed by `:` (required argument) or `::` (optional argument).
///
/// ### Example
/// ```
/// # use optarg_builder as optarg;
/// use optarg::{parse_shorthand, Mode};
///
/// let options = parse_shorthand("ab:c::").unwrap();
/// let modes: Vec<Mode> = options.iter().map(|o| o.mode()).collect();
/// assert_eq!(
///     modes,
///     vec![Mode::NoArgument, Mode::RequiredArgument, Mode::OptionalArgument]
/// );
/// ```
pub fn parse_shorthand(specification: &str) -> Result<Vec<OptionDef>, ConfigError> {
    if specification.is_empty() {
        return Err(ConfigError::EmptySpecification);
    }

    let mut options = Vec::default();
    let mut chars = specification.chars().peekable();

    while let Some(short) = chars.next() {
        if !short.is_ascii_alphanumeric() {
            return Err(ConfigError::InvalidShorthand {
                specification: specification.to_string(),
                character: short,
            });
        }

        let mut mode = Mode::NoArgument;

        if chars.next_if_eq(&':').is_some() {
            mode = Mode::RequiredArgument;

            if chars.next_if_eq(&':').is_some() {
                mode = Mode::OptionalArgument;
            }
        }

        options.push(OptionDef::short_only(short, mode));
    }

    Ok(options)
}
