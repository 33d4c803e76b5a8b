mod base;
mod interface;
mod matches;
mod printer;
mod registry;
mod tokenizer;

pub use self::base::*;
pub(crate) use self::interface::*;
pub use self::matches::*;
pub use self::printer::*;
pub(crate) use self::registry::*;
pub use self::tokenizer::*;
