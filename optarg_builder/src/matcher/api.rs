use std::collections::BTreeMap;

use crate::api::OptionDef;
use crate::matcher::model::OptionSlot;
use crate::model::Value;

/// How undeclared options and surplus operands are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Policy {
    pub strict_options: bool,
    pub strict_operands: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            strict_options: true,
            strict_operands: false,
        }
    }
}

/// The options in effect during a walk: the globals, plus those of the matched command.
#[derive(Debug, Default)]
pub(super) struct ActiveOptions<'d> {
    slots: Vec<OptionSlot<'d>>,
}

impl<'d> ActiveOptions<'d> {
    pub(super) fn new(options: &'d [OptionDef]) -> Self {
        let mut active = Self::default();
        active.merge(options);
        active
    }

    /// Add options to the active set.
    /// An option already active under an identical definition keeps its single slot.
    pub(super) fn merge(&mut self, options: &'d [OptionDef]) {
        for option in options {
            if !self
                .slots
                .iter()
                .any(|slot| slot.option().same_definition(option))
            {
                self.slots.push(OptionSlot::new(option));
            }
        }
    }

    pub(super) fn find_short(&mut self, short: char) -> Option<&mut OptionSlot<'d>> {
        self.slots
            .iter_mut()
            .find(|slot| slot.option().short() == Some(short))
    }

    pub(super) fn find_long(&mut self, long: &str) -> Option<&mut OptionSlot<'d>> {
        self.slots
            .iter_mut()
            .find(|slot| slot.option().long() == Some(long))
    }

    /// The resolved values keyed under every alias of each option.
    pub(super) fn resolve(self) -> BTreeMap<String, Value> {
        let mut values = BTreeMap::default();

        for slot in self.slots {
            let option = slot.option();

            if let Some(value) = slot.resolve() {
                if let Some(short) = option.short() {
                    values.insert(short.to_string(), value.clone());
                }

                if let Some(long) = option.long() {
                    values.insert(long.to_string(), value);
                }
            }
        }

        values
    }
}
