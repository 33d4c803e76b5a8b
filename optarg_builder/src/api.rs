mod argument;
mod command;
mod core;
mod operand;
mod option;
mod spec;

pub use self::core::*;
pub use argument::*;
pub use command::*;
pub use operand::*;
pub use option::*;
pub use spec::*;
