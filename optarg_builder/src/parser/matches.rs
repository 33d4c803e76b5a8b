use std::collections::BTreeMap;
use std::rc::Rc;

use crate::api::Command;
use crate::model::Value;
use crate::parser::LookupError;

/// The resolved value of a declared operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandMatch {
    name: String,
    value: Option<Value>,
}

impl OperandMatch {
    pub(crate) fn new(name: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The declared operand name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The supplied value(s), or the default when nothing was supplied.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

/// The result of one parse: resolved options, operands, and the matched command.
///
/// This is a read-only view; each parse produces a fresh `Matches`.
///
/// ### Example
/// ```
/// # use optarg_builder as optarg;
/// use optarg::{CommandLine, Mode, OptionDef, Value};
///
/// let getopt = CommandLine::new()
///     .option(OptionDef::new('o', "output", Mode::RequiredArgument))
///     .build()
///     .unwrap();
/// let matches = getopt.parse("-o out.txt input.txt").unwrap();
///
/// assert_eq!(matches.option("o"), Some(&Value::Text("out.txt".to_string())));
/// assert_eq!(matches["output"], Value::Text("out.txt".to_string()));
/// assert_eq!(matches.operands(), &["input.txt".to_string()]);
/// ```
#[derive(Debug)]
pub struct Matches<H> {
    options: BTreeMap<String, Value>,
    operands: Vec<OperandMatch>,
    flat_operands: Vec<String>,
    additional_options: BTreeMap<String, Value>,
    additional_operands: Vec<String>,
    command: Option<Rc<Command<H>>>,
}

impl<H> Matches<H> {
    pub(crate) fn new(
        options: BTreeMap<String, Value>,
        operands: Vec<OperandMatch>,
        additional_options: BTreeMap<String, Value>,
        additional_operands: Vec<String>,
        command: Option<Rc<Command<H>>>,
    ) -> Self {
        let mut flat_operands = Vec::default();

        for operand in &operands {
            match &operand.value {
                Some(Value::Text(value)) => flat_operands.push(value.clone()),
                Some(Value::List(values)) => flat_operands.extend(values.iter().cloned()),
                Some(Value::Count(_)) | None => {}
            }
        }

        flat_operands.extend(additional_operands.iter().cloned());

        Self {
            options,
            operands,
            flat_operands,
            additional_options,
            additional_operands,
            command,
        }
    }

    /// Get the value of a declared option, by either its short or long name.
    /// Falls back to the option's default; `None` when the option was neither specified nor defaulted.
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    /// Whether the declared option resolved to any value.
    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// All declared option values, keyed under every alias.
    pub fn options(&self) -> &BTreeMap<String, Value> {
        &self.options
    }

    /// Undeclared options encountered under the non-strict options policy.
    pub fn additional_options(&self) -> &BTreeMap<String, Value> {
        &self.additional_options
    }

    /// Declared and undeclared option values together, for display purposes.
    /// Declared values win when names collide.
    pub fn all_options(&self) -> BTreeMap<&str, &Value> {
        self.additional_options
            .iter()
            .chain(self.options.iter())
            .map(|(name, value)| (name.as_str(), value))
            .collect()
    }

    /// Get an operand value by position in [`Matches::operands`].
    pub fn operand(&self, index: usize) -> Option<&str> {
        self.flat_operands.get(index).map(String::as_str)
    }

    /// Get the value of a declared operand by name.
    ///
    /// Returns `Ok(None)` when the operand was neither supplied nor defaulted,
    /// and an error when no such operand is declared.
    pub fn operand_named(&self, name: &str) -> Result<Option<&Value>, LookupError> {
        self.operands
            .iter()
            .find(|operand| operand.name == name)
            .map(OperandMatch::value)
            .ok_or_else(|| LookupError::UnknownOperand(name.to_string()))
    }

    /// The declared operands, in declaration order.
    pub fn declared_operands(&self) -> &[OperandMatch] {
        &self.operands
    }

    /// All operand values: declared operands first, then any additional operands.
    pub fn operands(&self) -> &[String] {
        &self.flat_operands
    }

    /// Operands beyond the declared ones, under the non-strict operands policy.
    pub fn additional_operands(&self) -> &[String] {
        &self.additional_operands
    }

    /// The matched command, if any.
    pub fn command(&self) -> Option<&Command<H>> {
        self.command.as_deref()
    }
}

impl<H> std::ops::Index<&str> for Matches<H> {
    type Output = Value;

    /// Panics when the option has no value; see [`Matches::option`] for a non-panicking lookup.
    fn index(&self, name: &str) -> &Self::Output {
        match self.options.get(name) {
            Some(value) => value,
            None => panic!("option '{name}' has no value"),
        }
    }
}
