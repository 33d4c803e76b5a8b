use std::rc::Rc;

use crate::constant::DEFAULT_ARGUMENT_NAME;

/// A predicate deciding whether a supplied value is acceptable.
///
/// ### Example
/// ```
/// # use optarg_builder as optarg;
/// use optarg::Validator;
///
/// let numeric = Validator::new(|value| value.parse::<u32>().is_ok());
/// assert!(numeric.validates("42"));
/// assert!(!numeric.validates("forty-two"));
/// ```
#[derive(Clone)]
pub struct Validator(Rc<dyn Fn(&str) -> bool>);

impl Validator {
    /// Create a validator from a predicate.
    pub fn new(predicate: impl Fn(&str) -> bool + 'static) -> Self {
        Self(Rc::new(predicate))
    }

    /// Run the predicate against the value.
    pub fn validates(&self, value: &str) -> bool {
        (self.0)(value)
    }

    // Clones of a validator are the same validator; distinct predicates never are.
    pub(crate) fn same_predicate(&self, other: &Validator) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator{..}").finish()
    }
}

/// The value descriptor bound to an option or operand: display name, default, and validator.
#[derive(Debug, Clone)]
pub struct Argument {
    name: String,
    default: Option<String>,
    validator: Option<Validator>,
    multiple: bool,
}

impl Default for Argument {
    fn default() -> Self {
        Self::new(DEFAULT_ARGUMENT_NAME)
    }
}

impl Argument {
    /// Create an argument descriptor with the display name used in help text (ex: `<file>`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            validator: None,
            multiple: false,
        }
    }

    /// The value used when none is supplied.
    /// Only substituted when the value is absent; an empty string or `0` is never replaced.
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default.replace(default.into());
        self
    }

    /// Reject supplied values for which the predicate returns `false`.
    pub fn validator(mut self, predicate: impl Fn(&str) -> bool + 'static) -> Self {
        self.validator.replace(Validator::new(predicate));
        self
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default value, if any.
    pub fn default_text(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Whether the bound option/operand collects many values.
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Whether the value passes the validator (always `true` without one).
    pub fn validates(&self, value: &str) -> bool {
        self.validator
            .as_ref()
            .map_or(true, |validator| validator.validates(value))
    }

    pub(crate) fn same_descriptor(&self, other: &Argument) -> bool {
        let same_validator = match (&self.validator, &other.validator) {
            (Some(a), Some(b)) => a.same_predicate(b),
            (None, None) => true,
            _ => false,
        };

        self.name == other.name && self.default == other.default && same_validator
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn set_multiple(&mut self, multiple: bool) {
        self.multiple = multiple;
    }

    pub(crate) fn set_validator(&mut self, validator: Validator) {
        self.validator.replace(validator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn argument_default() {
        let argument = Argument::default();
        assert_eq!(argument.name(), "arg");
        assert_eq!(argument.default_text(), None);
        assert!(!argument.is_multiple());
        assert!(argument.validates("anything"));
    }

    #[rstest]
    #[case("1", true)]
    #[case("0", true)]
    #[case("", false)]
    #[case("x", false)]
    fn argument_validator(#[case] value: &str, #[case] expected: bool) {
        let argument = Argument::new("number")
            .default_value("7")
            .validator(|v| v.parse::<u8>().is_ok());
        assert_eq!(argument.name(), "number");
        assert_eq!(argument.default_text(), Some("7"));
        assert_eq!(argument.validates(value), expected);
    }

    #[test]
    fn argument_same_descriptor() {
        let argument = Argument::new("number").validator(|v| !v.is_empty());

        assert!(argument.same_descriptor(&argument.clone()));
        assert!(Argument::default().same_descriptor(&Argument::default()));
        assert!(!argument.same_descriptor(&Argument::new("number")));
        assert!(!argument.same_descriptor(&Argument::new("number").validator(|v| !v.is_empty())));
        assert!(!Argument::default().same_descriptor(&Argument::default().default_value("1")));
        assert!(!Argument::default().same_descriptor(&Argument::new("file")));
    }

    #[test]
    fn validator_debug() {
        assert_eq!(format!("{:?}", Validator::new(|_| true)), "Validator{..}");
    }
}
