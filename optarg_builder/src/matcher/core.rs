use std::collections::VecDeque;
use std::rc::Rc;

use crate::api::{Command, Operand, OptionDef};
use crate::constant::META_SEPARATOR;
use crate::matcher::api::{ActiveOptions, Policy};
use crate::matcher::model::{Additional, OperandSlot, OptionSlot};
use crate::model::Mode;
use crate::parser::{CommandRegistry, Matches, OperandMatch, ParseError};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The token walk: classifies each token, binds values to options and operands, and matches commands.
///
/// A `Resolver` is single use; every parse starts from a fresh one, so no state leaks between parses.
#[derive(Debug)]
pub(crate) struct Resolver<'d, H> {
    policy: Policy,
    commands: &'d CommandRegistry<H>,
    options: ActiveOptions<'d>,
    operands: Vec<OperandSlot<'d>>,
    cursor: usize,
    consumed: usize,
    command: Option<&'d Rc<Command<H>>>,
    additional: Additional,
}

impl<'d, H> Resolver<'d, H> {
    pub(crate) fn new(
        policy: Policy,
        options: &'d [OptionDef],
        operands: &'d [Operand],
        commands: &'d CommandRegistry<H>,
    ) -> Self {
        Self {
            policy,
            commands,
            options: ActiveOptions::new(options),
            operands: operands.iter().map(OperandSlot::new).collect(),
            cursor: 0,
            consumed: 0,
            command: None,
            additional: Additional::default(),
        }
    }

    pub(crate) fn resolve(mut self, tokens: Vec<String>) -> Result<Matches<H>, ParseError> {
        let mut queue: VecDeque<String> = tokens.into();

        while let Some(token) = queue.pop_front() {
            // 1. The meta separator: everything after it is an operand.
            // 2. A value token: an operand (or a command name).
            // 3. A long option, such as:
            //  --initial
            //  --initial ..
            //  --initial=..
            // 4. A short option cluster, such as (both -i and -v are example short options):
            //  -i
            //  -i ..
            //  -i..
            //  -i=..
            //  -vi ..
            //  -vi..
            if token == META_SEPARATOR {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Meta separator, {} remaining token(s) are operands.", queue.len());
                }

                while let Some(operand) = queue.pop_front() {
                    self.bind_operand(operand)?;
                }
            } else if is_value(&token) {
                self.match_value(token, &mut queue)?;
            } else if let Some(long) = token.strip_prefix("--") {
                self.match_long(long, &mut queue)?;
            } else {
                // Not a value, so the token starts with '-' and has more characters.
                self.match_short(&token[1..], &mut queue)?;
            }
        }

        self.close()
    }

    fn match_value(
        &mut self,
        token: String,
        queue: &mut VecDeque<String>,
    ) -> Result<(), ParseError> {
        let commands = self.commands;

        if self.command.is_none() && self.consumed == 0 && !commands.is_empty() {
            let candidates: Vec<&str> = std::iter::once(token.as_str())
                .chain(
                    queue
                        .iter()
                        .take(commands.max_words().saturating_sub(1))
                        .take_while(|t| is_value(t))
                        .map(String::as_str),
                )
                .collect();

            if let Some((command, width)) = commands.lookup(candidates.as_slice()) {
                queue.drain(..width - 1);
                self.bind_command(command);
                return Ok(());
            }
        }

        self.bind_operand(token)
    }

    fn bind_command(&mut self, command: &'d Rc<Command<H>>) {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Matched command '{}'.", command.name());
        }

        // The command's operands replace the (still untouched) declared operands.
        self.options.merge(command.option_definitions());
        self.operands = command
            .operand_definitions()
            .iter()
            .map(OperandSlot::new)
            .collect();
        self.cursor = 0;
        self.command.replace(command);
    }

    fn bind_operand(&mut self, value: String) -> Result<(), ParseError> {
        match self.operands.get_mut(self.cursor) {
            Some(slot) => {
                let operand = slot.operand();

                if !operand.validates(&value) {
                    return Err(ParseError::InvalidValue {
                        name: operand.name().to_string(),
                        value,
                    });
                }

                slot.push(value);

                // A multiple operand keeps absorbing the remaining operands.
                if !operand.is_multiple() {
                    self.cursor += 1;
                }
            }
            None => {
                if self.policy.strict_operands {
                    return Err(ParseError::UnexpectedOperand(value));
                }

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Operand '{value}' overflows the declared operands.");
                }

                self.additional.operands.push(value);
            }
        }

        self.consumed += 1;
        Ok(())
    }

    fn match_long(&mut self, long: &str, queue: &mut VecDeque<String>) -> Result<(), ParseError> {
        let (name, inline) = split_equals_delimiter(long);

        match self.options.find_long(name) {
            Some(slot) => bind_option(slot, inline.map(str::to_string), queue),
            None => self.unknown_option(name.to_string(), inline.map(str::to_string)),
        }
    }

    fn match_short(
        &mut self,
        cluster: &str,
        queue: &mut VecDeque<String>,
    ) -> Result<(), ParseError> {
        for (index, short) in cluster.char_indices() {
            let remaining = &cluster[index + short.len_utf8()..];

            match self.options.find_short(short) {
                Some(slot) if slot.option().mode().accepts_argument() => {
                    // The rest of the cluster is this option's value (ex: `-ppassword`, `-p=password`).
                    // Only when nothing remains may the value come from the next token.
                    let inline = if remaining.is_empty() {
                        None
                    } else {
                        Some(remaining.strip_prefix('=').unwrap_or(remaining).to_string())
                    };

                    return bind_option(slot, inline, queue);
                }
                Some(slot) => {
                    slot.bind_absent();
                }
                None => {
                    self.unknown_option(short.to_string(), None)?;
                }
            }
        }

        Ok(())
    }

    fn unknown_option(&mut self, name: String, value: Option<String>) -> Result<(), ParseError> {
        if self.policy.strict_options {
            return Err(ParseError::UnknownOption(name));
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Collecting the undeclared option '{name}'.");
        }

        self.additional.record_option(name, value);
        Ok(())
    }

    fn close(self) -> Result<Matches<H>, ParseError> {
        let Resolver {
            options,
            operands,
            cursor,
            command,
            additional,
            ..
        } = self;

        // Operands are filled in order, so any required operand from the cursor onwards is missing.
        if let Some(slot) = operands
            .iter()
            .skip(cursor)
            .find(|slot| slot.operand().is_required() && !slot.is_filled())
        {
            return Err(ParseError::OperandMissing(slot.operand().name().to_string()));
        }

        let operands = operands
            .into_iter()
            .map(|slot| {
                let name = slot.operand().name();
                OperandMatch::new(name, slot.resolve())
            })
            .collect();

        Ok(Matches::new(
            options.resolve(),
            operands,
            additional.options,
            additional.operands,
            command.cloned(),
        ))
    }
}

fn bind_option(
    slot: &mut OptionSlot<'_>,
    inline: Option<String>,
    queue: &mut VecDeque<String>,
) -> Result<(), ParseError> {
    let option = slot.option();
    let mode = option.mode();

    // A value-less option hands its inline value back as the next token (ex: `--verbose=yes`).
    if mode == Mode::NoArgument {
        if let Some(value) = inline {
            queue.push_front(value);
        }

        slot.bind_absent();
        return Ok(());
    }

    let value = match inline {
        Some(value) => Some(value),
        None => {
            if queue.front().map_or(false, |next| is_value(next)) {
                queue.pop_front()
            } else {
                None
            }
        }
    };

    match value {
        Some(value) => {
            if !option.argument_descriptor().validates(&value) {
                return Err(ParseError::InvalidValue {
                    name: option.name(),
                    value,
                });
            }

            slot.bind(value);
            Ok(())
        }
        None if mode == Mode::OptionalArgument => {
            slot.bind_absent();
            Ok(())
        }
        None => Err(ParseError::ArgumentMissing(option.name())),
    }
}

/// Whether the token is a value rather than an option: empty, a lone `-`, or not `-` prefixed.
pub(crate) fn is_value(token: &str) -> bool {
    token.is_empty() || token == "-" || !token.starts_with('-')
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{OperandList, OptionSet};
    use crate::model::{OperandMode, Value};
    use rstest::rstest;

    fn text(value: &str) -> Value {
        Value::Text(value.to_string())
    }

    fn list(values: &[&str]) -> Value {
        Value::List(values.iter().map(|v| v.to_string()).collect())
    }

    fn tokens(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    struct Setup {
        options: OptionSet,
        operands: OperandList,
        commands: CommandRegistry<&'static str>,
        policy: Policy,
    }

    impl Setup {
        fn new(options: Vec<OptionDef>) -> Self {
            let mut set = OptionSet::default();

            for option in options {
                set.push(option).unwrap();
            }

            Self {
                options: set,
                operands: OperandList::default(),
                commands: CommandRegistry::default(),
                policy: Policy::default(),
            }
        }

        fn operand(mut self, operand: Operand) -> Self {
            self.operands.push(operand).unwrap();
            self
        }

        fn command(mut self, command: Command<&'static str>) -> Self {
            self.commands.register(command, &self.options).unwrap();
            self
        }

        fn policy(mut self, strict_options: bool, strict_operands: bool) -> Self {
            self.policy = Policy {
                strict_options,
                strict_operands,
            };
            self
        }

        fn resolve(&self, input: &[&str]) -> Result<Matches<&'static str>, ParseError> {
            Resolver::new(
                self.policy,
                self.options.as_slice(),
                self.operands.as_slice(),
                &self.commands,
            )
            .resolve(tokens(input))
        }
    }

    fn flags() -> Setup {
        Setup::new(vec![
            OptionDef::new('a', "all", Mode::NoArgument),
            OptionDef::new('b', "bee", Mode::NoArgument),
        ])
    }

    #[test]
    fn resolve_empty() {
        let matches = flags().resolve(&[]).unwrap();
        assert!(matches.options().is_empty());
        assert!(matches.operands().is_empty());
        assert!(matches.command().is_none());
    }

    #[rstest]
    #[case(vec!["-a", "-b", "-a", "-a"], 3, Some(1))]
    #[case(vec!["-abaa"], 3, Some(1))]
    #[case(vec!["--all", "-a", "--bee"], 2, Some(1))]
    #[case(vec!["-aaa"], 3, None)]
    fn resolve_counts(
        #[case] input: Vec<&str>,
        #[case] a: usize,
        #[case] b: Option<usize>,
    ) {
        let matches = flags().resolve(input.as_slice()).unwrap();
        assert_eq!(matches.option("a"), Some(&Value::Count(a)));
        assert_eq!(matches.option("all"), Some(&Value::Count(a)));
        assert_eq!(matches.option("b").and_then(Value::count), b);
        assert_eq!(matches.option("bee").and_then(Value::count), b);
    }

    fn cluster() -> Setup {
        Setup::new(vec![
            OptionDef::short_only('a', Mode::NoArgument),
            OptionDef::short_only('b', Mode::RequiredArgument),
            OptionDef::short_only('v', Mode::NoArgument),
            OptionDef::short_only('p', Mode::RequiredArgument),
            OptionDef::short_only('o', Mode::OptionalArgument),
        ])
        .operand(Operand::new("rest", OperandMode::MULTIPLE))
    }

    #[rstest]
    #[case(vec!["-ab", "value"], vec![("a", Value::Count(1)), ("b", text("value"))], vec![])]
    #[case(vec!["-ab=value"], vec![("a", Value::Count(1)), ("b", text("value"))], vec![])]
    #[case(vec!["-abvalue"], vec![("a", Value::Count(1)), ("b", text("value"))], vec![])]
    #[case(vec!["-ppassword"], vec![("p", text("password"))], vec![])]
    #[case(vec!["-vvppassword"], vec![("v", Value::Count(2)), ("p", text("password"))], vec![])]
    #[case(vec!["-vvp", "password"], vec![("v", Value::Count(2)), ("p", text("password"))], vec![])]
    #[case(vec!["-vpv", "x"], vec![("v", Value::Count(1)), ("p", text("v"))], vec!["x"])]
    #[case(vec!["-pa", "x"], vec![("p", text("a"))], vec!["x"])]
    #[case(vec!["-p=", "x"], vec![("p", text(""))], vec!["x"])]
    #[case(vec!["-p==x"], vec![("p", text("=x"))], vec![])]
    #[case(vec!["-p", "-"], vec![("p", text("-"))], vec![])]
    #[case(vec!["-p", ""], vec![("p", text(""))], vec![])]
    #[case(vec!["-p", "0"], vec![("p", text("0"))], vec![])]
    #[case(vec!["-o", "x"], vec![("o", text("x"))], vec![])]
    #[case(vec!["-o", "-a"], vec![("o", Value::Count(1)), ("a", Value::Count(1))], vec![])]
    #[case(vec!["-vo"], vec![("v", Value::Count(1)), ("o", Value::Count(1))], vec![])]
    #[case(vec!["-ov"], vec![("o", text("v"))], vec![])]
    #[case(vec!["-a", "-", "x"], vec![("a", Value::Count(1))], vec!["-", "x"])]
    fn resolve_cluster(
        #[case] input: Vec<&str>,
        #[case] expected: Vec<(&str, Value)>,
        #[case] operands: Vec<&str>,
    ) {
        let matches = cluster().resolve(input.as_slice()).unwrap();

        for (name, value) in &expected {
            assert_eq!(matches.option(name), Some(value), "option '{name}'");
        }

        assert_eq!(matches.options().len(), expected.len());
        assert_eq!(matches.operands(), operands.as_slice());
    }

    #[rstest]
    #[case(vec!["-b"])]
    #[case(vec!["-ab"])]
    #[case(vec!["-b", "-a"])]
    #[case(vec!["-b", "--"])]
    #[case(vec!["-vvp"])]
    fn resolve_cluster_argument_missing(#[case] input: Vec<&str>) {
        assert_matches!(
            cluster().resolve(input.as_slice()),
            Err(ParseError::ArgumentMissing(name)) if name == "b" || name == "p"
        );
    }

    fn long() -> Setup {
        Setup::new(vec![
            OptionDef::long_only("option", Mode::RequiredArgument),
            OptionDef::long_only("maybe", Mode::OptionalArgument),
            OptionDef::long_only("many", Mode::MultipleArgument),
            OptionDef::long_only("flag", Mode::NoArgument),
        ])
        .operand(Operand::new("rest", OperandMode::MULTIPLE))
    }

    #[rstest]
    #[case(vec!["--option=-value"], vec![("option", text("-value"))], vec![])]
    #[case(vec!["--option=a=b"], vec![("option", text("a=b"))], vec![])]
    #[case(vec!["--option="], vec![("option", text(""))], vec![])]
    #[case(vec!["--option", "x", "y"], vec![("option", text("x"))], vec!["y"])]
    #[case(vec!["--option", "x", "--option", "y"], vec![("option", text("y"))], vec![])]
    #[case(vec!["--maybe"], vec![("maybe", Value::Count(1))], vec![])]
    #[case(vec!["--maybe", "x"], vec![("maybe", text("x"))], vec![])]
    #[case(vec!["--maybe", "--flag"], vec![("maybe", Value::Count(1)), ("flag", Value::Count(1))], vec![])]
    #[case(vec!["--many", "v1", "--many", "v2"], vec![("many", list(&["v1", "v2"]))], vec![])]
    #[case(vec!["--many=v1", "--many", "v2", "v3"], vec![("many", list(&["v1", "v2"]))], vec!["v3"])]
    #[case(vec!["--flag=no"], vec![("flag", Value::Count(1))], vec!["no"])]
    #[case(vec!["--flag=", "x"], vec![("flag", Value::Count(1))], vec!["", "x"])]
    #[case(vec!["--flag=--flag"], vec![("flag", Value::Count(2))], vec![])]
    #[case(vec!["--flag", "x"], vec![("flag", Value::Count(1))], vec!["x"])]
    fn resolve_long(
        #[case] input: Vec<&str>,
        #[case] expected: Vec<(&str, Value)>,
        #[case] operands: Vec<&str>,
    ) {
        let matches = long().resolve(input.as_slice()).unwrap();

        for (name, value) in &expected {
            assert_eq!(matches.option(name), Some(value), "option '{name}'");
        }

        assert_eq!(matches.options().len(), expected.len());
        assert_eq!(matches.operands(), operands.as_slice());
    }

    #[rstest]
    #[case(vec!["--option"], "option")]
    #[case(vec!["--option", "--flag"], "option")]
    #[case(vec!["--option", "-x"], "option")]
    #[case(vec!["--many"], "many")]
    #[case(vec!["--many", "v1", "--many"], "many")]
    #[case(vec!["--many", "--flag"], "many")]
    fn resolve_long_argument_missing(#[case] input: Vec<&str>, #[case] name: &str) {
        assert_eq!(
            long().resolve(input.as_slice()).unwrap_err(),
            ParseError::ArgumentMissing(name.to_string())
        );
    }

    #[rstest]
    #[case(false, Ok(vec!["no"]))]
    #[case(true, Err(ParseError::UnexpectedOperand("no".to_string())))]
    fn resolve_flag_inline_value(
        #[case] strict_operands: bool,
        #[case] expected: Result<Vec<&str>, ParseError>,
    ) {
        let setup = Setup::new(vec![OptionDef::long_only("flag", Mode::NoArgument)])
            .policy(true, strict_operands);

        match (setup.resolve(&["--flag=no"]), expected) {
            (Ok(matches), Ok(additional)) => {
                assert_eq!(matches.option("flag"), Some(&Value::Count(1)));
                assert_eq!(matches.additional_operands(), additional.as_slice());
            }
            (actual, expected) => assert_eq!(actual.map(|_| ()), expected.map(|_| ())),
        }
    }

    #[test]
    fn resolve_meta_separator() {
        let matches = flags()
            .operand(Operand::new("rest", OperandMode::MULTIPLE))
            .resolve(&["--", "-a", "-b"])
            .unwrap();
        assert!(matches.options().is_empty());
        assert_eq!(matches.operands(), &["-a", "-b"]);

        let matches = flags().resolve(&["--", "--", ""]).unwrap();
        assert_eq!(matches.operands(), &["--", ""]);
    }

    #[test]
    fn resolve_value_then_separator() {
        let matches = Setup::new(vec![OptionDef::short_only('a', Mode::RequiredArgument)])
            .resolve(&["-a", "0", "foo", "--", "bar", "baz"])
            .unwrap();
        assert_eq!(matches.option("a"), Some(&text("0")));
        assert_eq!(matches.operands(), &["foo", "bar", "baz"]);
    }

    #[test]
    fn resolve_unknown_option_strict() {
        assert_eq!(
            flags().resolve(&["--nope"]).unwrap_err(),
            ParseError::UnknownOption("nope".to_string())
        );
        assert_eq!(
            flags().resolve(&["-abc"]).unwrap_err(),
            ParseError::UnknownOption("c".to_string())
        );
    }

    #[test]
    fn resolve_unknown_option_lenient() {
        let matches = flags()
            .policy(false, false)
            .resolve(&["-axx", "--nope", "--nope", "--key=value", "x"])
            .unwrap();
        assert_eq!(matches.option("a"), Some(&Value::Count(1)));
        assert_eq!(
            matches.additional_options().get("x"),
            Some(&Value::Count(2))
        );
        assert_eq!(
            matches.additional_options().get("nope"),
            Some(&Value::Count(2))
        );
        assert_eq!(
            matches.additional_options().get("key"),
            Some(&text("value"))
        );
        assert_eq!(matches.operands(), &["x"]);
    }

    #[test]
    fn resolve_operands() {
        let setup = Setup::new(vec![])
            .operand(Operand::new("first", OperandMode::REQUIRED))
            .operand(Operand::new("second", OperandMode::OPTIONAL).default_value("two"))
            .operand(Operand::new("rest", OperandMode::MULTIPLE));

        let matches = setup.resolve(&["1"]).unwrap();
        assert_eq!(matches.operand_named("first"), Ok(Some(&text("1"))));
        assert_eq!(matches.operand_named("second"), Ok(Some(&text("two"))));
        assert_eq!(matches.operand_named("rest"), Ok(None));
        assert_eq!(matches.operands(), &["1", "two"]);

        let matches = setup.resolve(&["1", "2", "3", "4"]).unwrap();
        assert_eq!(matches.operand_named("second"), Ok(Some(&text("2"))));
        assert_eq!(matches.operand_named("rest"), Ok(Some(&list(&["3", "4"]))));
        assert_eq!(matches.operands(), &["1", "2", "3", "4"]);
        assert!(matches.additional_operands().is_empty());
    }

    #[rstest]
    #[case(OperandMode::REQUIRED)]
    #[case(OperandMode::REQUIRED | OperandMode::MULTIPLE)]
    fn resolve_operand_missing(#[case] mode: OperandMode) {
        let setup = Setup::new(vec![OptionDef::short_only('a', Mode::NoArgument)])
            .operand(Operand::new("file", mode));
        assert_eq!(
            setup.resolve(&["-a"]).unwrap_err(),
            ParseError::OperandMissing("file".to_string())
        );
    }

    #[test]
    fn resolve_operand_missing_cascade() {
        let setup = Setup::new(vec![])
            .operand(Operand::new("first", OperandMode::OPTIONAL))
            .operand(Operand::new("second", OperandMode::REQUIRED));
        assert_eq!(
            setup.resolve(&[]).unwrap_err(),
            ParseError::OperandMissing("second".to_string())
        );
        assert_eq!(
            setup.resolve(&["1"]).unwrap_err(),
            ParseError::OperandMissing("second".to_string())
        );
        setup.resolve(&["1", "2"]).unwrap();
    }

    #[test]
    fn resolve_unexpected_operand() {
        let setup = Setup::new(vec![]).operand(Operand::new("only", OperandMode::OPTIONAL));

        let matches = setup.resolve(&["1", "2", "3"]).unwrap();
        assert_eq!(matches.additional_operands(), &["2", "3"]);
        assert_eq!(matches.operands(), &["1", "2", "3"]);

        assert_eq!(
            setup.policy(true, true).resolve(&["1", "2"]).unwrap_err(),
            ParseError::UnexpectedOperand("2".to_string())
        );
    }

    #[test]
    fn resolve_invalid_value() {
        let setup = Setup::new(vec![
            OptionDef::short_only('n', Mode::RequiredArgument).validator(|v| v.parse::<u8>().is_ok()),
        ])
        .operand(Operand::new("word", OperandMode::OPTIONAL).validator(|v| !v.is_empty()));

        assert_eq!(
            setup.resolve(&["-n", "x"]).unwrap_err(),
            ParseError::InvalidValue {
                name: "n".to_string(),
                value: "x".to_string(),
            }
        );
        assert_eq!(
            setup.resolve(&["-n1", ""]).unwrap_err(),
            ParseError::InvalidValue {
                name: "word".to_string(),
                value: "".to_string(),
            }
        );
        setup.resolve(&["-n", "1", "w"]).unwrap();
    }

    #[test]
    fn resolve_defaults() {
        let setup = Setup::new(vec![
            OptionDef::new('l', "level", Mode::RequiredArgument).default_value("3"),
            OptionDef::new('f', "flag", Mode::NoArgument),
        ]);

        let matches = setup.resolve(&[]).unwrap();
        assert_eq!(matches.option("level"), Some(&text("3")));
        assert_eq!(matches.option("l"), Some(&text("3")));
        assert_eq!(matches.option("flag"), None);

        let matches = setup.resolve(&["--level="]).unwrap();
        assert_eq!(matches.option("level"), Some(&text("")));

        let matches = setup.resolve(&["-l", "0"]).unwrap();
        assert_eq!(matches.option("level"), Some(&text("0")));
    }

    fn commands() -> Setup {
        Setup::new(vec![OptionDef::new('v', "verbose", Mode::NoArgument)])
            .operand(Operand::new("global", OperandMode::OPTIONAL))
            .command(
                Command::new("remote", "remote")
                    .option(OptionDef::new('v', "verbose", Mode::NoArgument))
                    .operand(Operand::new("name", OperandMode::OPTIONAL)),
            )
            .command(
                Command::new("remote add", "remote-add")
                    .option(OptionDef::new('f', "fetch", Mode::NoArgument))
                    .operand(Operand::new("name", OperandMode::REQUIRED))
                    .operand(Operand::new("url", OperandMode::REQUIRED)),
            )
    }

    #[rstest]
    #[case(vec!["remote"], Some("remote"), vec![])]
    #[case(vec!["-v", "remote", "origin"], Some("remote"), vec!["origin"])]
    #[case(vec!["remote", "add", "origin", "url"], Some("remote-add"), vec!["origin", "url"])]
    #[case(vec!["remote", "-v", "add"], Some("remote"), vec!["add"])]
    #[case(vec!["remote", "--", "add"], Some("remote"), vec!["add"])]
    #[case(vec!["other", "remote"], None, vec!["other", "remote"])]
    #[case(vec!["--", "remote"], None, vec!["remote"])]
    fn resolve_command(
        #[case] input: Vec<&str>,
        #[case] handler: Option<&str>,
        #[case] operands: Vec<&str>,
    ) {
        let matches = commands()
            .policy(true, false)
            .resolve(input.as_slice())
            .unwrap();
        assert_eq!(matches.command().map(|c| *c.handler()), handler);
        assert_eq!(matches.operands(), operands.as_slice());
    }

    #[test]
    fn resolve_command_options() {
        let setup = commands();

        let matches = setup
            .resolve(&["-v", "remote", "add", "-fv", "origin", "url"])
            .unwrap();
        assert_eq!(matches.option("verbose"), Some(&Value::Count(2)));
        assert_eq!(matches.option("fetch"), Some(&Value::Count(1)));
        assert_eq!(matches.operand_named("url"), Ok(Some(&text("url"))));
        assert_matches!(matches.operand_named("global"), Err(_));

        // Command options are only active once the command is matched.
        assert_eq!(
            setup.resolve(&["-f", "remote", "add", "a", "b"]).unwrap_err(),
            ParseError::UnknownOption("f".to_string())
        );
        assert_eq!(
            setup.resolve(&["remote", "add", "origin"]).unwrap_err(),
            ParseError::OperandMissing("url".to_string())
        );
    }

    #[test]
    fn resolve_idempotent() {
        let setup = long();
        let input = ["--many", "a", "--many", "b", "--maybe", "x"];
        let first = setup.resolve(&input).unwrap();
        let second = setup.resolve(&input).unwrap();
        assert_eq!(first.options(), second.options());
        assert_eq!(first.option("many"), Some(&list(&["a", "b"])));
    }

    #[rstest]
    #[case("", true)]
    #[case("-", true)]
    #[case("value", true)]
    #[case("a-b", true)]
    #[case("-a", false)]
    #[case("--", false)]
    #[case("--all", false)]
    fn value_classification(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(is_value(token), expected);
    }
}
