/// The argument arity of an option.
///
/// Inspired by getopt: <https://man7.org/linux/man-pages/man3/getopt.3.html>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The option never takes a value; repeated occurrences are counted.
    NoArgument,
    /// The option may take a value, when one is available.
    OptionalArgument,
    /// The option must take a value.
    RequiredArgument,
    /// The option takes a value on each occurrence, collecting them in order.
    MultipleArgument,
}

impl Mode {
    /// Whether an occurrence of the option may bind a value.
    pub fn accepts_argument(&self) -> bool {
        !matches!(self, Mode::NoArgument)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// How an operand is matched.
///
/// A bitwise combination of [`OperandMode::REQUIRED`] and [`OperandMode::MULTIPLE`].
///
/// ### Example
/// ```
/// # use optarg_builder as optarg;
/// use optarg::OperandMode;
///
/// let mode = OperandMode::REQUIRED | OperandMode::MULTIPLE;
/// assert!(mode.is_required());
/// assert!(mode.is_multiple());
/// assert!(!OperandMode::OPTIONAL.is_required());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OperandMode(u8);

impl OperandMode {
    /// A single operand which may be omitted.
    pub const OPTIONAL: OperandMode = OperandMode(0);
    /// The operand must be supplied.
    pub const REQUIRED: OperandMode = OperandMode(1);
    /// The operand absorbs all of the remaining operand tokens.
    pub const MULTIPLE: OperandMode = OperandMode(2);

    /// Whether the operand must be supplied.
    pub fn is_required(&self) -> bool {
        self.0 & Self::REQUIRED.0 != 0
    }

    /// Whether the operand collects many values.
    pub fn is_multiple(&self) -> bool {
        self.0 & Self::MULTIPLE.0 != 0
    }
}

impl std::ops::BitOr for OperandMode {
    type Output = OperandMode;

    fn bitor(self, rhs: Self) -> Self::Output {
        OperandMode(self.0 | rhs.0)
    }
}

/// A resolved option or operand value.
///
/// Note that `Text("")` and `Text("0")` are real values, distinct from the value being absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The number of value-less occurrences.
    Count(usize),
    /// A single value.
    Text(String),
    /// All the values of a repeatable option or multiple operand, in order of appearance.
    List(Vec<String>),
}

impl Value {
    /// Get the single value, if this is a `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Get the occurrence count, if this is a `Count`.
    pub fn count(&self) -> Option<usize> {
        match self {
            Value::Count(count) => Some(*count),
            _ => None,
        }
    }

    /// Get the values, if this is a `List`.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(values) => Some(values.as_slice()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Count(count) => write!(f, "{count}"),
            Value::Text(text) => write!(f, "{text}"),
            Value::List(values) => write!(f, "{}", values.join(", ")),
        }
    }
}
