use std::collections::BTreeMap;
use terminal_size::{terminal_size, Width};

use crate::api::{Operand, OptionDef};
use crate::constant::*;
use crate::model::Mode;
use crate::parser::{
    ColumnRenderer, LeftWidth, PaddingWidth, RightWidth, TotalWidth, MINIMUM_RIGHT_WIDTH,
};
use crate::prelude::HelpRenderer;

/// The display strings used in help text.
///
/// Any key without an explicit value falls back to English.
/// The keys are: `usage`, `options`, `operands`, `commands`, `usage-command`, `usage-options`, `usage-operands`, and `default`.
///
/// ### Example
/// ```
/// # use optarg_builder as optarg;
/// use optarg::Labels;
///
/// let labels = Labels::default().set("usage", "Verwendung:");
/// assert_eq!(labels.get("usage"), "Verwendung:");
/// assert_eq!(labels.get("options"), "Options:");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Labels {
    table: BTreeMap<String, String>,
}

impl Labels {
    /// Override the display string for `key`.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.table.insert(key.into(), value.into());
        self
    }

    /// The display string for `key`.
    /// Unknown keys render as themselves.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        match self.table.get(key) {
            Some(value) => value.as_str(),
            None => ENGLISH_LABELS
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| *v)
                .unwrap_or(key),
        }
    }
}

/// Everything a [`HelpRenderer`] needs to describe a command line.
#[derive(Debug)]
pub struct HelpContext<'a> {
    script_name: &'a str,
    banner: Option<&'a str>,
    command: Option<&'a str>,
    options: Vec<&'a OptionDef>,
    operands: &'a [Operand],
    commands: Vec<(&'a str, Option<&'a str>)>,
    labels: &'a Labels,
}

impl<'a> HelpContext<'a> {
    pub(crate) fn new(
        script_name: &'a str,
        banner: Option<&'a str>,
        command: Option<&'a str>,
        options: Vec<&'a OptionDef>,
        operands: &'a [Operand],
        commands: Vec<(&'a str, Option<&'a str>)>,
        labels: &'a Labels,
    ) -> Self {
        Self {
            script_name,
            banner,
            command,
            options,
            operands,
            commands,
            labels,
        }
    }

    /// The name of the program.
    pub fn script_name(&self) -> &str {
        self.script_name
    }

    /// Free text shown above the usage line.
    pub fn banner(&self) -> Option<&str> {
        self.banner
    }

    /// The name of the matched command, if any.
    pub fn command(&self) -> Option<&str> {
        self.command
    }

    /// The active options, in declaration order.
    pub fn options(&self) -> &[&'a OptionDef] {
        &self.options
    }

    /// The active operands, in declaration order.
    pub fn operands(&self) -> &[Operand] {
        self.operands
    }

    /// The available commands as (name, description) pairs.
    /// Empty once a command is matched.
    pub fn commands(&self) -> &[(&'a str, Option<&'a str>)] {
        &self.commands
    }

    /// The display strings.
    pub fn labels(&self) -> &Labels {
        self.labels
    }
}

/// The default [`HelpRenderer`]: a usage line followed by aligned option, operand, and command sections.
#[derive(Debug, Clone, Default)]
pub struct Printer {
    width: Option<usize>,
}

const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 2;

impl Printer {
    /// Render for a fixed total width, rather than the terminal's.
    pub fn with_width(width: usize) -> Self {
        Self { width: Some(width) }
    }

    fn total_width(&self) -> Option<TotalWidth> {
        match self.width {
            Some(width) => Some(TotalWidth(width)),
            None => terminal_size().map(|(Width(width), _)| TotalWidth(width as usize)),
        }
    }
}

impl HelpRenderer for Printer {
    fn render(&self, context: &HelpContext<'_>) -> String {
        let labels = context.labels();
        let mut summary = vec![labels.get(LABEL_USAGE).to_string(), context.script_name().to_string()];

        match context.command() {
            Some(command) => summary.push(command.to_string()),
            None if !context.commands().is_empty() => {
                summary.push(labels.get(LABEL_USAGE_COMMAND).to_string())
            }
            None => {}
        }

        if !context.options().is_empty() {
            summary.push(labels.get(LABEL_USAGE_OPTIONS).to_string());
        }

        summary.extend(context.operands().iter().map(operand_placeholder));

        let default_label = labels.get(LABEL_DEFAULT);
        let option_rows: Vec<(String, String)> = context
            .options()
            .iter()
            .map(|option| {
                (
                    option_label(option),
                    describe(
                        option.description_text(),
                        option.argument_descriptor().default_text(),
                        default_label,
                    ),
                )
            })
            .collect();
        let operand_rows: Vec<(String, String)> = context
            .operands()
            .iter()
            .map(|operand| {
                (
                    operand_placeholder(operand),
                    describe(operand.description_text(), operand.default_text(), default_label),
                )
            })
            .collect();
        let command_rows: Vec<(String, String)> = context
            .commands()
            .iter()
            .map(|(name, description)| (name.to_string(), description.unwrap_or("").to_string()))
            .collect();

        let all_rows = || option_rows.iter().chain(&operand_rows).chain(&command_rows);
        let left_column_width = all_rows().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
        let right_column_width = all_rows().map(|(_, r)| r.chars().count()).max().unwrap_or(0);
        let column_renderer = ColumnRenderer::guided(
            PaddingWidth::new(PADDING_WIDTH),
            LeftWidth::new(left_column_width),
            RightWidth::new(std::cmp::max(right_column_width, MINIMUM_RIGHT_WIDTH)),
            self.total_width(),
        );

        let mut lines = Vec::default();

        if let Some(banner) = context.banner() {
            lines.push(banner.to_string());
            lines.push(String::default());
        }

        lines.push(summary.join(" "));

        for (label, rows) in [
            (LABEL_OPTIONS, &option_rows),
            (LABEL_OPERANDS, &operand_rows),
            (LABEL_COMMANDS, &command_rows),
        ] {
            if !rows.is_empty() {
                lines.push(String::default());
                lines.push(labels.get(label).to_string());

                for (left, right) in rows {
                    lines.extend(column_renderer.render(MAIN_INDENT, left, right));
                }
            }
        }

        lines.join("\n")
    }
}

fn describe(description: Option<&str>, default: Option<&str>, default_label: &str) -> String {
    match (description, default) {
        (Some(description), Some(default)) => format!("{description} ({default_label}: {default})"),
        (None, Some(default)) => format!("({default_label}: {default})"),
        (Some(description), None) => description.to_string(),
        (None, None) => String::default(),
    }
}

/// The option's names, followed by its argument placeholder.
/// Ex: `-o, --output <file>`
pub(crate) fn option_label(option: &OptionDef) -> String {
    let names = match (option.short(), option.long()) {
        (Some(short), Some(long)) => format!("-{short}, --{long}"),
        (Some(short), None) => format!("-{short}"),
        (None, Some(long)) => format!("--{long}"),
        (None, None) => String::default(),
    };
    let name = option.argument_descriptor().name();

    match option.mode() {
        Mode::NoArgument => names,
        Mode::OptionalArgument => format!("{names} [<{name}>]"),
        Mode::RequiredArgument | Mode::MultipleArgument => format!("{names} <{name}>"),
    }
}

/// Ex: `<file>`, `[<file>]`, `<file>...`, `[<file>...]`
pub(crate) fn operand_placeholder(operand: &Operand) -> String {
    let suffix = if operand.is_multiple() { "..." } else { "" };

    if operand.is_required() {
        format!("<{}>{suffix}", operand.name())
    } else {
        format!("[<{}>{suffix}]", operand.name())
    }
}
