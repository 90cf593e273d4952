//! Tokenizing shell input into a command word and numeric arguments.

use lazy_static::lazy_static;
use regex::Regex;

use super::error::CommandError;

lazy_static! {
    /// Plain decimal literal: optional sign, digits with optional fraction,
    /// optional exponent. Rejects words like `inf` and `nan` that `f64`
    /// parsing would otherwise accept.
    static ref NUMBER: Regex = Regex::new(
        r"^[+-]?(\d+\.?\d*|\.\d+)(e[+-]?\d+)?$"
    ).unwrap();
}

/// A tokenized input line.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// Lower-cased command word.
    pub word: String,
    /// Raw argument tokens following the word.
    pub args: Vec<String>,
}

/// Split a line into a command word and its argument tokens.
///
/// Returns `None` for blank lines. Arguments are parsed separately, once
/// the command word has been resolved.
pub fn parse_line(input: &str) -> Option<Line> {
    let lowered = input.trim().to_lowercase();
    let mut parts = lowered.split_whitespace();

    let word = parts.next()?.to_string();
    let args = parts.map(str::to_string).collect();

    Some(Line { word, args })
}

/// Parse argument tokens as finite numbers.
pub fn parse_numbers(tokens: &[String]) -> Result<Vec<f64>, CommandError> {
    tokens.iter().map(|token| parse_number(token)).collect()
}

fn parse_number(token: &str) -> Result<f64, CommandError> {
    if !NUMBER.is_match(token) {
        return Err(CommandError::InvalidNumber(token.to_string()));
    }

    // Literals like 1e999 pass the pattern but overflow.
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CommandError::InvalidNumber(token.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(input: &str) -> Result<Vec<f64>, CommandError> {
        let line = parse_line(input).unwrap();
        parse_numbers(&line.args)
    }

    #[test]
    fn test_blank_lines_ignored() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t "), None);
    }

    #[test]
    fn test_word_and_arguments() {
        let line = parse_line("  ADD 5   -3.5 ").unwrap();
        assert_eq!(line.word, "add");
        assert_eq!(line.args, vec!["5", "-3.5"]);
        assert_eq!(parse_numbers(&line.args), Ok(vec![5.0, -3.5]));

        let line = parse_line("sqrt").unwrap();
        assert_eq!(line.word, "sqrt");
        assert!(line.args.is_empty());
    }

    #[test]
    fn test_arguments_kept_raw_until_parsed() {
        let line = parse_line("frob abc").unwrap();
        assert_eq!(line.word, "frob");
        assert_eq!(line.args, vec!["abc"]);
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(numbers("mul .5 1E3"), Ok(vec![0.5, 1000.0]));
        assert_eq!(numbers("add +2. 3"), Ok(vec![2.0, 3.0]));
        assert_eq!(numbers("add 1e308"), Ok(vec![1e308]));
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        for input in [
            "add five three",
            "add inf",
            "div 1 nan",
            "add 1..2",
            "add 0x10",
            "add 1e999",
            "mul -1e400",
        ] {
            assert!(
                matches!(numbers(input), Err(CommandError::InvalidNumber(_))),
                "'{}' should be rejected",
                input
            );
        }
    }
}
