//! The read-eval-print loop driving a `Calculator`.

use std::io::{self, BufRead, Write};

use crate::calculator::{Calculator, UnaryOp, copy_last_result, format_number};
use crate::config::Config;

use super::command::Command;
use super::error::CommandError;
use super::parse::{Line, parse_line, parse_numbers};
use super::suggest::suggest;

const BANNER: &str = "\
Interactive Calculator
======================
Type 'help' for commands, 'exit' to quit";

const HELP: &str = "\
Available commands:
  add X [Y]   - Add Y to X, or X to the result (Example: add 5 3)
  sub X [Y]   - Subtract Y from X, or X from the result (Example: sub 10 4)
  mul X [Y]   - Multiply X by Y, or the result by X (Example: mul 3 4)
  div X [Y]   - Divide X by Y, or the result by X (Example: div 10 2)
  pow X [Y]   - Raise X to the power Y, or the result to X (Example: pow 2 8)
  mod X [Y]   - Remainder of X divided by Y, or of the result by X (Example: mod 10 3)
  sqrt [X]    - Square root of X or the result (Example: sqrt 9)
  sin [X]     - Sine of X or the result, in radians (Example: sin 1.57)
  cos [X]     - Cosine of X or the result, in radians (Example: cos 0)
  tan [X]     - Tangent of X or the result, in radians (Example: tan 0.78)
  log [X]     - Log base 10 of X or the result (Example: log 100)
  ln [X]      - Natural log of X or the result (Example: ln 2.71)
  fact [X]    - Factorial of X or the result (Example: fact 5)
  result      - Show current result
  clear       - Clear current result
  ms          - Store result in memory
  m+          - Add result to memory
  m-          - Subtract result from memory
  mr          - Recall memory into the result
  mc          - Clear memory
  mem         - Show memory
  copy        - Copy result to the clipboard
  exit        - Exit the calculator

Commands also accept variations like 'subtract', 'plus' or 'times'.";

/// What the shell should do after a command.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    /// Nothing to print (blank line).
    Silent,
    /// Print this text.
    Text(String),
    /// Leave the loop.
    Exit,
}

/// Counts collected over one run of the loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub executed: usize,
    pub failed: usize,
}

/// An interactive calculator session.
pub struct Shell {
    calc: Calculator,
    config: Config,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        Self {
            calc: Calculator::new(),
            config,
        }
    }

    /// The engine driven by this shell.
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Run the loop until `exit` or end of input.
    ///
    /// In interactive mode the banner and prompt are printed.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        interactive: bool,
    ) -> io::Result<Summary> {
        let mut summary = Summary::default();

        if interactive && self.config.banner {
            writeln!(output, "{}", BANNER)?;
        }

        let mut lines = input.lines();
        loop {
            if interactive {
                write!(output, "{}", self.config.prompt)?;
                output.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            match self.execute(&line) {
                Ok(Reply::Silent) => {}
                Ok(Reply::Text(text)) => {
                    summary.executed += 1;
                    writeln!(output, "{}", text)?;
                }
                Ok(Reply::Exit) => break,
                Err(e) => {
                    summary.executed += 1;
                    summary.failed += 1;
                    tracing::debug!("Command '{}' failed: {}", line.trim(), e);
                    self.report(&mut output, &e)?;
                }
            }
        }

        Ok(summary)
    }

    /// Execute a single line against the calculator.
    ///
    /// The command word is resolved before its arguments are parsed, so an
    /// unknown word is always reported as such.
    pub fn execute(&mut self, input: &str) -> Result<Reply, CommandError> {
        let Some(Line { word, args }) = parse_line(input) else {
            return Ok(Reply::Silent);
        };

        let command = Command::resolve(&word).ok_or_else(|| CommandError::UnknownCommand {
            suggestions: if self.config.suggestions {
                suggest(&word)
            } else {
                Vec::new()
            },
            word,
        })?;

        let (min, max) = command.arity();
        if args.len() < min || args.len() > max {
            return Err(operand_count_error(command));
        }
        let args = parse_numbers(&args)?;

        tracing::debug!("Executing {:?} with {:?}", command, args);
        self.dispatch(command, &args)
    }

    fn dispatch(&mut self, command: Command, args: &[f64]) -> Result<Reply, CommandError> {
        let text = match (command, args) {
            (Command::Binary(op), &[lhs, rhs]) => {
                let result = self.calc.apply(op, lhs, rhs)?;
                format!(
                    "{} {} {} = {}",
                    self.fmt(lhs),
                    op.symbol(),
                    self.fmt(rhs),
                    self.fmt(result)
                )
            }
            (Command::Binary(op), &[rhs]) => {
                let lhs = self.calc.last_result();
                let result = self.calc.apply_to_last(op, rhs)?;
                format!(
                    "{} {} {} = {}",
                    self.fmt(lhs),
                    op.symbol(),
                    self.fmt(rhs),
                    self.fmt(result)
                )
            }
            (Command::Unary(op), args) => {
                let (x, result) = match *args {
                    [x] => (x, self.calc.evaluate(op, x)?),
                    _ => (self.calc.last_result(), self.calc.evaluate_last(op)?),
                };
                match op {
                    UnaryOp::Factorial => format!("{}! = {}", self.fmt(x), self.fmt(result)),
                    _ => format!("{}({}) = {}", op.name(), self.fmt(x), self.fmt(result)),
                }
            }
            (Command::Result, _) => {
                format!("Current result: {}", self.fmt(self.calc.last_result()))
            }
            (Command::Clear, _) => {
                let cleared = self.calc.clear();
                format!("Result cleared: {}", self.fmt(cleared))
            }
            (Command::MemoryStore, _) => {
                let memory = self.calc.memory_store();
                format!("Stored in memory: Memory = {}", self.fmt(memory))
            }
            (Command::MemoryAdd, _) => {
                let memory = self.calc.memory_add();
                format!("Added to memory: Memory = {}", self.fmt(memory))
            }
            (Command::MemorySubtract, _) => {
                let memory = self.calc.memory_subtract();
                format!("Subtracted from memory: Memory = {}", self.fmt(memory))
            }
            (Command::MemoryRecall, _) => {
                let memory = self.calc.memory_recall();
                format!("Memory recall: {}", self.fmt(memory))
            }
            (Command::MemoryClear, _) => {
                self.calc.memory_clear();
                "Memory cleared".to_string()
            }
            (Command::Memory, _) => format!("Memory: {}", self.fmt(self.calc.memory())),
            (Command::Copy, _) => {
                let text = copy_last_result(&self.calc).map_err(CommandError::Clipboard)?;
                format!("Copied {} to clipboard", text)
            }
            (Command::Help, _) => HELP.to_string(),
            (Command::Exit, _) => return Ok(Reply::Exit),
            (Command::Binary(_), _) => return Err(operand_count_error(command)),
        };

        Ok(Reply::Text(text))
    }

    fn report<W: Write>(&self, output: &mut W, error: &CommandError) -> io::Result<()> {
        writeln!(output, "Error: {}", error)?;

        match error {
            CommandError::UnknownCommand { suggestions, .. } => {
                if !suggestions.is_empty() {
                    writeln!(output, "Did you mean: {}?", suggestions.join(", "))?;
                }
                writeln!(output, "Type 'help' to see all available commands")?;
            }
            CommandError::InvalidNumber(_) => {
                writeln!(output, "Make sure you're using numbers for calculations.")?;
            }
            _ => {}
        }

        Ok(())
    }

    fn fmt(&self, value: f64) -> String {
        format_number(value, self.config.thousands_separators)
    }
}

fn operand_count_error(command: Command) -> CommandError {
    CommandError::WrongOperandCount {
        command: command.name(),
        expected: match command.arity() {
            (1, 2) => "one or two numbers",
            (0, 1) => "at most one number",
            _ => "no arguments",
        },
    }
}
