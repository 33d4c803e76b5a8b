//! Builder module for `optarg`.
//! See [documentation root](https://docs.rs/optarg/latest/optarg/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::{
    tokenize, ConfigError, EnvArgs, HelpContext, Labels, LookupError, Matches, OperandMatch,
    ParseError, Printer,
};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
