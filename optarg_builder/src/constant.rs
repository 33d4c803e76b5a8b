// Besides letters and digits, a short option may use one of these symbols.
pub(crate) const SHORT_SYMBOLS: &str = "?!§$%#";
pub(crate) const META_SEPARATOR: &str = "--";
pub(crate) const DEFAULT_ARGUMENT_NAME: &str = "arg";
pub(crate) const COMMAND_WORD_SEPARATOR: &str = " ";

pub(crate) const LABEL_USAGE: &str = "usage";
pub(crate) const LABEL_OPTIONS: &str = "options";
pub(crate) const LABEL_OPERANDS: &str = "operands";
pub(crate) const LABEL_COMMANDS: &str = "commands";
pub(crate) const LABEL_USAGE_COMMAND: &str = "usage-command";
pub(crate) const LABEL_USAGE_OPTIONS: &str = "usage-options";
pub(crate) const LABEL_USAGE_OPERANDS: &str = "usage-operands";
pub(crate) const LABEL_DEFAULT: &str = "default";

// The fallback table for `Labels`.
pub(crate) const ENGLISH_LABELS: [(&str, &str); 8] = [
    (LABEL_USAGE, "Usage:"),
    (LABEL_OPTIONS, "Options:"),
    (LABEL_OPERANDS, "Operands:"),
    (LABEL_COMMANDS, "Commands:"),
    (LABEL_USAGE_COMMAND, "<command>"),
    (LABEL_USAGE_OPTIONS, "[options]"),
    (LABEL_USAGE_OPERANDS, "[operands]"),
    (LABEL_DEFAULT, "default"),
];
