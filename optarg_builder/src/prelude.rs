//! Traits which, typically, may be imported without concern: `use optarg::prelude::*`.

use crate::parser::HelpContext;

/// Behaviour to render the help text of a [`Getopt`](../struct.Getopt.html).
// Needs to be imported in order to implement a custom renderer.
pub trait HelpRenderer {
    /// Render the help text for the given context.
    fn render(&self, context: &HelpContext<'_>) -> String;
}

/// Behaviour to supply the default input tokens when none are given explicitly.
// Needs to be imported in order to implement a custom provider.
pub trait InputProvider {
    /// The tokens to parse, excluding the program name.
    fn tokens(&self) -> Vec<String>;
}

impl<F> InputProvider for F
where
    F: Fn() -> Vec<String>,
{
    fn tokens(&self) -> Vec<String> {
        self()
    }
}
