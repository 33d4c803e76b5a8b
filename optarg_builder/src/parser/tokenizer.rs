use crate::prelude::InputProvider;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Normal,
    InSingleQuote,
    InDoubleQuote,
}

/// Split a shell-like command line into tokens.
///
/// Tokens are separated by whitespace (space, tab, newline).
/// Single and double quotes group characters into a token without being part of it.
/// Quotes do not nest, nor is there any escaping; adjacent quoted segments concatenate into a single token.
/// An unterminated quote is tolerated, keeping the partial token.
///
/// ### Example
/// ```
/// # use optarg_builder as optarg;
/// use optarg::tokenize;
///
/// assert_eq!(tokenize("-a 'the value'"), vec!["-a", "the value"]);
/// assert_eq!(tokenize(r#"''"'"' inside'"#), vec!["' inside"]);
/// assert_eq!(tokenize("-a ''"), vec!["-a", ""]);
/// ```
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::default();
    let mut current = String::default();
    // Quotes open a token, even when nothing ends up inside them.
    let mut open = false;
    let mut state = QuoteState::Normal;

    for character in raw.trim().chars() {
        match state {
            QuoteState::Normal => match character {
                '\'' => {
                    state = QuoteState::InSingleQuote;
                    open = true;
                }
                '"' => {
                    state = QuoteState::InDoubleQuote;
                    open = true;
                }
                ' ' | '\t' | '\n' => {
                    if open {
                        tokens.push(std::mem::take(&mut current));
                        open = false;
                    }
                }
                _ => {
                    current.push(character);
                    open = true;
                }
            },
            QuoteState::InSingleQuote => {
                if character == '\'' {
                    state = QuoteState::Normal;
                } else {
                    current.push(character);
                }
            }
            QuoteState::InDoubleQuote => {
                if character == '"' {
                    state = QuoteState::Normal;
                } else {
                    current.push(character);
                }
            }
        }
    }

    if open {
        #[cfg(feature = "tracing_debug")]
        {
            if state != QuoteState::Normal {
                debug!("Unterminated quote ({state:?}), keeping the partial token '{current}'.");
            }
        }

        tokens.push(current);
    }

    tokens
}

/// The process arguments, excluding the program name.
///
/// This is the default [`InputProvider`](crate::prelude::InputProvider) of a [`Getopt`](crate::Getopt).
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvArgs;

impl InputProvider for EnvArgs {
    fn tokens(&self) -> Vec<String> {
        std::env::args().skip(1).collect()
    }
}
