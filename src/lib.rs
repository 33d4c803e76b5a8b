//! `optarg` is a getopt style command line parser for Rust.
//!
//! It follows the POSIX/GNU conventions for short and long options, and adds an object oriented Api on top:
//! options and operands are declared up front, the parser resolves a command line against them, and the result is read back by name.
//! Sub-commands (including multi-word commands such as `remote add`) swap in their own options and operands mid-parse.
//!
//! `optarg` attempts to prioritize the following design concerns:
//! * *Familiar syntax*:
//! The Cli syntax is fixed to what getopt users expect (`-abc`, `-ovalue`, `--long=value`, `--`).
//! It is not extensible at the grammar level.
//! * *Configuration errors vs. parse errors*:
//! A mistake in declaring the Cli is a [`ConfigError`], reported when building the parser.
//! A mistake by the end user is a [`ParseError`], reported when parsing.
//! * *Values as text*:
//! Option and operand values are kept as strings (or counts, for flags).
//! Conversion and validation are left to the caller, optionally via a validator predicate.
//!
//! # Usage
//! This page includes a demo on using `optarg`.
//! ```no_run
#![doc = include_str!("../demos/demo_remote.rs")]
//! ```
//!
//! ```console
//! $ remote -h
//! Manage a set of tracked repositories.
//!
//! Usage: remote <command> [options]
//!
//! Options:
//!   -h, --help      Show this help message and exit.
//!   -v, --verbose   Print more detail (repeatable).
//!
//! Commands:
//!   list            List the remotes.
//!   add             Add a remote.
//!   remove          Remove remotes.
//!
//! $ remote -vv add -f origin https://example.com/repo.git
//! Adding 'origin' at 'https://example.com/repo.git' (fetch: true).
//!
//! $ remote add origin
//! Parse error: Operand 'url' is required.
//!
//! Manage a set of tracked repositories.
//!
//! Usage: remote <command> [options]
//! <truncated>
//! ```
//!
//! # Options
//! An [`OptionDef`] has a short name, a long name, or both, and a [`Mode`]:
//! * [`Mode::NoArgument`]: a flag; each occurrence increments a count (`-vvv` is `Value::Count(3)`).
//! * [`Mode::OptionalArgument`]: takes a value when one is available, otherwise counts like a flag.
//! * [`Mode::RequiredArgument`]: must take a value.
//! * [`Mode::MultipleArgument`]: takes a value on each occurrence, accumulating a list.
//!
//! Options may also be declared via the getopt shorthand grammar: `"ab:c::"` declares `-a` (no argument), `-b` (required argument), and `-c` (optional argument).
//! Alternatively, a [`Shorthand`] tuple leaves the mode to the parser's [`CommandLine::default_mode`].
//!
//! A value is taken from (in order):
//! 1. The token itself: `--output=file`, `-ofile`, or `-o=file`.
//! 2. The next token, when it is a value rather than an option.
//! The empty string and a lone `-` are values; any other token starting with `-` is not.
//!
//! In a cluster of short options (`-vvo file`), every option is matched in turn.
//! The first option which takes an argument ends the cluster, taking the remaining characters as its value.
//!
//! ```
//! use optarg::{CommandLine, Value};
//!
//! let getopt = CommandLine::new().options("vo:").build().unwrap();
//! let matches = getopt.parse("-vvofile").unwrap();
//!
//! assert_eq!(matches["v"], Value::Count(2));
//! assert_eq!(matches["o"], Value::Text("file".to_string()));
//! ```
//!
//! ### Defaults
//! A default applies only when an option (or operand) is absent from the command line.
//! Supplying the empty string, or `0`, is not absent.
//!
//! # Operands
//! An [`Operand`] is positional, and either optional or required ([`OperandMode`]).
//! A multiple operand absorbs all remaining operands, so nothing may be declared after it.
//! Every token after the meta separator `--` is an operand, even when it looks like an option.
//!
//! ```
//! use optarg::{CommandLine, Operand, OperandMode, Value};
//!
//! let getopt = CommandLine::new()
//!     .options("a:")
//!     .operand(Operand::new("first", OperandMode::REQUIRED))
//!     .operand(Operand::new("rest", OperandMode::MULTIPLE))
//!     .build()
//!     .unwrap();
//! let matches = getopt.parse("-a 0 foo -- bar -b").unwrap();
//!
//! assert_eq!(matches["a"], Value::Text("0".to_string()));
//! assert_eq!(matches.operands(), &["foo", "bar", "-b"]);
//! assert_eq!(
//!     matches.operand_named("rest").unwrap(),
//!     Some(&Value::List(vec!["bar".to_string(), "-b".to_string()]))
//! );
//! ```
//!
//! # Commands
//! A [`Command`] is matched by the first operand(s) of the command line, as long as no operand came before it.
//! Once matched, the command's options join the active options, and its operands replace the global operands.
//! The command carries a handler of any type `H`, which `optarg` never invokes; read it back via [`Matches::command`].
//!
//! # Policies
//! By default, an undeclared option is an error and surplus operands are collected.
//! Both are configurable via [`CommandLine::strict_options`] and [`CommandLine::strict_operands`];
//! collected values are available via [`Matches::additional_options`] and [`Matches::additional_operands`].
//!
//! # Help
//! [`Getopt::help_text`] renders the declared Cli with a [`Printer`] (or any other [`HelpRenderer`](prelude::HelpRenderer)).
//! The display strings come from [`Labels`], which fall back to English.
pub use optarg_builder::*;
