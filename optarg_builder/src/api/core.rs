use std::path::Path;

use crate::api::{parse_shorthand, Command, Operand, OperandList, OptionDef, OptionSet, OptionSpec};
use crate::matcher::{Policy, Resolver};
use crate::model::{Mode, Value};
use crate::parser::{
    tokenize, CommandRegistry, ConfigError, EnvArgs, HelpContext, Labels, Matches, ParseError,
    Printer,
};
use crate::prelude::{HelpRenderer, InputProvider};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The input to a parse: either a single command line, or pre-split tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A shell-like command line, split by [`tokenize`](crate::tokenize).
    Line(String),
    /// Tokens used verbatim (ex: the process arguments without the program name).
    Tokens(Vec<String>),
}

impl Input {
    fn into_tokens(self) -> Vec<String> {
        match self {
            Input::Line(line) => tokenize(&line),
            Input::Tokens(tokens) => tokens,
        }
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Line(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Line(value)
    }
}

impl From<Vec<String>> for Input {
    fn from(value: Vec<String>) -> Self {
        Input::Tokens(value)
    }
}

impl From<Vec<&str>> for Input {
    fn from(value: Vec<&str>) -> Self {
        Input::Tokens(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Input {
    fn from(value: &[&str]) -> Self {
        Input::Tokens(value.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Input {
    fn from(value: [&str; N]) -> Self {
        Input::Tokens(value.iter().map(|t| t.to_string()).collect())
    }
}

/// The command line builder.
///
/// Collects options, operands, and commands, then validates them all at once in [`CommandLine::build`].
/// `H` is the type of the command handlers; use [`CommandLine::new`] when there are no (or unit) handlers.
///
/// ### Example
/// ```
/// # use optarg_builder as optarg;
/// use optarg::{CommandLine, Mode, Operand, OperandMode, OptionDef};
///
/// let getopt = CommandLine::new()
///     .options("vq")
///     .option(OptionDef::new('o', "output", Mode::RequiredArgument))
///     .operand(Operand::new("file", OperandMode::REQUIRED))
///     .build()
///     .unwrap();
///
/// let matches = getopt.parse("-vv --output=out.txt in.txt").unwrap();
/// assert_eq!(matches.option("v").and_then(|v| v.count()), Some(2));
/// assert_eq!(matches.operand(0), Some("in.txt"));
/// ```
pub struct CommandLine<H = ()> {
    script_name: Option<String>,
    banner: Option<String>,
    options: Vec<OptionSpec>,
    operands: Vec<Operand>,
    commands: Vec<Command<H>>,
    policy: Policy,
    default_mode: Mode,
    labels: Labels,
    renderer: Box<dyn HelpRenderer>,
    input: Box<dyn InputProvider>,
    error: Option<ConfigError>,
}

impl<H> Default for CommandLine<H> {
    fn default() -> Self {
        Self {
            script_name: None,
            banner: None,
            options: Vec::default(),
            operands: Vec::default(),
            commands: Vec::default(),
            policy: Policy::default(),
            default_mode: Mode::NoArgument,
            labels: Labels::default(),
            renderer: Box::new(Printer::default()),
            input: Box::new(EnvArgs),
            error: None,
        }
    }
}

impl CommandLine {
    /// Create a command line builder whose commands carry unit handlers.
    /// For other handler types, use `CommandLine::default()`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H> CommandLine<H> {
    /// The program name shown in the help text.
    /// Defaults to the file name of the running executable.
    pub fn script_name(mut self, script_name: impl Into<String>) -> Self {
        self.script_name.replace(script_name.into());
        self
    }

    /// Free text shown above the usage line of the help text.
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner.replace(banner.into());
        self
    }

    /// Add an option, as either an [`OptionDef`] or a [`Shorthand`](crate::Shorthand).
    pub fn option(mut self, option: impl Into<OptionSpec>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Add short options via the shorthand grammar (ex: `"ab:c::"`).
    pub fn options(mut self, specification: &str) -> Self {
        match parse_shorthand(specification) {
            Ok(options) => {
                self.options
                    .extend(options.into_iter().map(OptionSpec::Defined));
            }
            Err(error) => {
                if self.error.is_none() {
                    self.error.replace(error);
                }
            }
        }

        self
    }

    /// Add an operand, positioned after those already added.
    pub fn operand(mut self, operand: Operand) -> Self {
        self.operands.push(operand);
        self
    }

    /// Add a command.
    pub fn command(mut self, command: Command<H>) -> Self {
        self.commands.push(command);
        self
    }

    /// Whether an undeclared option is an error (default), or collected as an additional option.
    pub fn strict_options(mut self, strict: bool) -> Self {
        self.policy.strict_options = strict;
        self
    }

    /// Whether surplus operands are an error, or collected as additional operands (default).
    pub fn strict_operands(mut self, strict: bool) -> Self {
        self.policy.strict_operands = strict;
        self
    }

    /// The mode for [`Shorthand`](crate::Shorthand) options which don't specify one.
    /// Defaults to [`Mode::NoArgument`].
    pub fn default_mode(mut self, mode: Mode) -> Self {
        self.default_mode = mode;
        self
    }

    /// The display strings of the help text.
    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Replace the help text renderer (the default is a [`Printer`]).
    pub fn renderer(mut self, renderer: impl HelpRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Replace the source of [`Getopt::process_default`] input (the default is [`EnvArgs`]).
    pub fn input_provider(mut self, input: impl InputProvider + 'static) -> Self {
        self.input = Box::new(input);
        self
    }

    /// Build the parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    pub fn build(self) -> Result<Getopt<H>, ConfigError> {
        let CommandLine {
            script_name,
            banner,
            options: specifications,
            operands: operand_definitions,
            commands: command_definitions,
            policy,
            default_mode,
            labels,
            renderer,
            input,
            error,
        } = self;

        if let Some(error) = error {
            return Err(error);
        }

        let mut options = OptionSet::default();

        for specification in specifications {
            options.push(specification.normalize(default_mode)?)?;
        }

        let mut operands = OperandList::default();

        for operand in operand_definitions {
            operands.push(operand)?;
        }

        let mut commands = CommandRegistry::default();

        for command in command_definitions {
            commands.register(command, &options)?;
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Built parser with {} option(s), {} operand(s), and {} command(s).",
                options.as_slice().len(),
                operands.as_slice().len(),
                commands.iter().count()
            );
        }

        Ok(Getopt {
            script_name,
            banner,
            options,
            operands,
            commands,
            policy,
            labels,
            renderer,
            input,
            matches: None,
        })
    }
}

/// The command line parser.
///
/// The definitions are fixed once built; each parse resolves from scratch.
/// Use [`Getopt::parse`] for a standalone result, or [`Getopt::process`] to keep the latest result on the parser.
pub struct Getopt<H = ()> {
    script_name: Option<String>,
    banner: Option<String>,
    options: OptionSet,
    operands: OperandList,
    commands: CommandRegistry<H>,
    policy: Policy,
    labels: Labels,
    renderer: Box<dyn HelpRenderer>,
    input: Box<dyn InputProvider>,
    matches: Option<Matches<H>>,
}

impl<H: std::fmt::Debug> std::fmt::Debug for Getopt<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Getopt")
            .field("script_name", &self.script_name)
            .field("options", &self.options)
            .field("operands", &self.operands)
            .field("commands", &self.commands)
            .field("policy", &self.policy)
            .field("matches", &self.matches)
            .finish_non_exhaustive()
    }
}

impl<H> Getopt<H> {
    /// Parse the input, returning the result.
    ///
    /// ### Example
    /// ```
    /// # use optarg_builder as optarg;
    /// use optarg::{CommandLine, Value};
    ///
    /// let getopt = CommandLine::new().options("ab:").build().unwrap();
    ///
    /// // A single line is tokenized, while tokens are used verbatim.
    /// let matches = getopt.parse("-ab 'the value'").unwrap();
    /// assert_eq!(matches["b"], Value::Text("the value".to_string()));
    ///
    /// let matches = getopt.parse(["-b", "-"]).unwrap();
    /// assert_eq!(matches["b"], Value::Text("-".to_string()));
    /// ```
    pub fn parse(&self, input: impl Into<Input>) -> Result<Matches<H>, ParseError> {
        let tokens = input.into().into_tokens();

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parsing tokens: {tokens:?}.");
        }

        Resolver::new(
            self.policy,
            self.options.as_slice(),
            self.operands.as_slice(),
            &self.commands,
        )
        .resolve(tokens)
    }

    /// Parse the input, keeping the result on the parser.
    /// Any previous result is discarded first, even when this parse fails.
    pub fn process(&mut self, input: impl Into<Input>) -> Result<&Matches<H>, ParseError> {
        self.matches.take();
        let matches = self.parse(input)?;
        Ok(self.matches.insert(matches))
    }

    /// Process the tokens of the input provider (by default, the process arguments).
    pub fn process_default(&mut self) -> Result<&Matches<H>, ParseError> {
        let tokens = self.input.tokens();
        self.process(tokens)
    }

    /// The result of the latest successful [`Getopt::process`].
    pub fn matches(&self) -> Option<&Matches<H>> {
        self.matches.as_ref()
    }

    /// Get an option value from the latest result.
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.matches.as_ref().and_then(|m| m.option(name))
    }

    /// Get an operand by position from the latest result.
    pub fn operand(&self, index: usize) -> Option<&str> {
        self.matches.as_ref().and_then(|m| m.operand(index))
    }

    /// All operands of the latest result.
    pub fn operands(&self) -> &[String] {
        match &self.matches {
            Some(matches) => matches.operands(),
            None => &[],
        }
    }

    /// The matched command of the latest result.
    pub fn command(&self) -> Option<&Command<H>> {
        self.matches.as_ref().and_then(|m| m.command())
    }

    /// The global options.
    pub fn option_definitions(&self) -> &[OptionDef] {
        self.options.as_slice()
    }

    /// The global operands.
    pub fn operand_definitions(&self) -> &[Operand] {
        self.operands.as_slice()
    }

    /// The registered commands.
    pub fn commands(&self) -> impl Iterator<Item = &Command<H>> {
        self.commands.iter().map(|c| c.as_ref())
    }

    /// Render the help text.
    /// Once a command is matched (via [`Getopt::process`]), the help text describes that command.
    pub fn help_text(&self) -> String {
        let script_name = self
            .script_name
            .clone()
            .unwrap_or_else(executable_name);
        let context = match self.command() {
            Some(command) => {
                let mut options: Vec<&OptionDef> = self.options.as_slice().iter().collect();
                options.extend(
                    command
                        .option_definitions()
                        .iter()
                        .filter(|o| !options_contain(self.options.as_slice(), o)),
                );

                HelpContext::new(
                    &script_name,
                    self.banner.as_deref(),
                    Some(command.name()),
                    options,
                    command.operand_definitions(),
                    Vec::default(),
                    &self.labels,
                )
            }
            None => HelpContext::new(
                &script_name,
                self.banner.as_deref(),
                None,
                self.options.as_slice().iter().collect(),
                self.operands.as_slice(),
                self.commands
                    .iter()
                    .map(|c| (c.name(), c.description_text()))
                    .collect(),
                &self.labels,
            ),
        };

        self.renderer.render(&context)
    }
}

fn options_contain(options: &[OptionDef], option: &OptionDef) -> bool {
    options.iter().any(|o| o.same_definition(option))
}

fn executable_name() -> String {
    std::env::args()
        .next()
        .and_then(|program| {
            Path::new(&program)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "program".to_string())
}
