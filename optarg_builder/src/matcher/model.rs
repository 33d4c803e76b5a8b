use std::collections::BTreeMap;

use crate::api::{Operand, OptionDef};
use crate::model::{Mode, Value};

/// The resolution state of one option during a walk.
#[derive(Debug)]
pub(super) struct OptionSlot<'d> {
    option: &'d OptionDef,
    value: Option<Value>,
}

impl<'d> OptionSlot<'d> {
    pub(super) fn new(option: &'d OptionDef) -> Self {
        Self {
            option,
            value: None,
        }
    }

    pub(super) fn option(&self) -> &'d OptionDef {
        self.option
    }

    /// Record a value-less occurrence, counting like a flag.
    pub(super) fn bind_absent(&mut self) {
        match &mut self.value {
            Some(Value::Count(count)) => {
                *count += 1;
            }
            slot => {
                slot.replace(Value::Count(1));
            }
        }
    }

    /// Record an occurrence with a value.
    pub(super) fn bind(&mut self, value: String) {
        let multiple = self.option.mode() == Mode::MultipleArgument;

        match &mut self.value {
            Some(Value::List(values)) if multiple => {
                values.push(value);
            }
            slot => {
                slot.replace(if multiple {
                    Value::List(vec![value])
                } else {
                    Value::Text(value)
                });
            }
        }
    }

    /// The value, falling back to the default only when absent.
    pub(super) fn resolve(self) -> Option<Value> {
        let mode = self.option.mode();
        self.value.or_else(|| {
            self.option
                .argument_descriptor()
                .default_text()
                .map(|default| match mode {
                    Mode::MultipleArgument => Value::List(vec![default.to_string()]),
                    _ => Value::Text(default.to_string()),
                })
        })
    }
}

/// The resolution state of one operand during a walk.
#[derive(Debug)]
pub(super) struct OperandSlot<'d> {
    operand: &'d Operand,
    values: Vec<String>,
}

impl<'d> OperandSlot<'d> {
    pub(super) fn new(operand: &'d Operand) -> Self {
        Self {
            operand,
            values: Vec::default(),
        }
    }

    pub(super) fn operand(&self) -> &'d Operand {
        self.operand
    }

    pub(super) fn push(&mut self, value: String) {
        self.values.push(value);
    }

    pub(super) fn is_filled(&self) -> bool {
        !self.values.is_empty()
    }

    /// The supplied value(s), falling back to the default only when nothing was supplied.
    pub(super) fn resolve(self) -> Option<Value> {
        let OperandSlot { operand, mut values } = self;

        if values.is_empty() {
            values.extend(operand.default_text().map(str::to_string));
        }

        if operand.is_multiple() {
            if values.is_empty() {
                None
            } else {
                Some(Value::List(values))
            }
        } else {
            values.pop().map(Value::Text)
        }
    }
}

/// Undeclared options and operands, collected under the non-strict policies.
#[derive(Debug, Default)]
pub(super) struct Additional {
    pub(super) options: BTreeMap<String, Value>,
    pub(super) operands: Vec<String>,
}

impl Additional {
    pub(super) fn record_option(&mut self, name: String, value: Option<String>) {
        match value {
            Some(value) => {
                self.options.insert(name, Value::Text(value));
            }
            None => match self.options.get_mut(&name) {
                Some(Value::Count(count)) => {
                    *count += 1;
                }
                _ => {
                    self.options.insert(name, Value::Count(1));
                }
            },
        }
    }
}
