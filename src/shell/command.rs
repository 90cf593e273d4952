//! Shell commands and their aliases.

use crate::calculator::{BinaryOp, UnaryOp};

/// A command understood by the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Arithmetic with one (accumulator) or two explicit operands.
    Binary(BinaryOp),
    /// Scientific function of an explicit operand or the accumulator.
    Unary(UnaryOp),
    /// Show the accumulator.
    Result,
    /// Reset the accumulator.
    Clear,
    MemoryStore,
    MemoryAdd,
    MemorySubtract,
    MemoryRecall,
    MemoryClear,
    /// Show the memory register without touching the accumulator.
    Memory,
    /// Copy the accumulator to the clipboard.
    Copy,
    Help,
    Exit,
}

/// Every command with the words that resolve to it. The first word is the
/// canonical name.
const ALIASES: &[(Command, &[&str])] = &[
    (
        Command::Binary(BinaryOp::Add),
        &["add", "addition", "plus", "sum", "+"],
    ),
    (
        Command::Binary(BinaryOp::Subtract),
        &[
            "sub",
            "subtract",
            "subtraction",
            "substract",
            "minus",
            "difference",
            "-",
        ],
    ),
    (
        Command::Binary(BinaryOp::Multiply),
        &["mul", "multiply", "multiplication", "product", "*", "times"],
    ),
    (
        Command::Binary(BinaryOp::Divide),
        &["div", "divide", "division", "quotient", "/"],
    ),
    (
        Command::Binary(BinaryOp::Power),
        &["pow", "power", "exponent", "^", "**"],
    ),
    (
        Command::Binary(BinaryOp::Modulo),
        &["mod", "modulo", "remainder", "%"],
    ),
    (
        Command::Unary(UnaryOp::SquareRoot),
        &["sqrt", "squareroot", "square_root", "root"],
    ),
    (Command::Unary(UnaryOp::Sin), &["sin", "sine"]),
    (Command::Unary(UnaryOp::Cos), &["cos", "cosine"]),
    (Command::Unary(UnaryOp::Tan), &["tan", "tangent"]),
    (
        Command::Unary(UnaryOp::Log10),
        &["log", "log10", "logarithm"],
    ),
    (Command::Unary(UnaryOp::Ln), &["ln", "natural_log", "loge"]),
    (
        Command::Unary(UnaryOp::Factorial),
        &["fact", "factorial", "!"],
    ),
    (Command::Result, &["result", "ans", "answer"]),
    (Command::Clear, &["clear", "clr", "reset"]),
    (Command::MemoryStore, &["ms", "memory_store", "store"]),
    (Command::MemoryAdd, &["m+", "memory_add", "memory+"]),
    (Command::MemorySubtract, &["m-", "memory_subtract", "memory-"]),
    (Command::MemoryRecall, &["mr", "memory_recall", "recall"]),
    (Command::MemoryClear, &["mc", "memory_clear", "clearmem"]),
    (Command::Memory, &["mem", "memory"]),
    (Command::Copy, &["copy", "yank", "clipboard"]),
    (Command::Help, &["help", "h", "?", "commands"]),
    (Command::Exit, &["exit", "quit", "bye", "q"]),
];

impl Command {
    /// Resolve a lower-case word through the alias table.
    pub fn resolve(word: &str) -> Option<Self> {
        ALIASES
            .iter()
            .find(|(_, aliases)| aliases.contains(&word))
            .map(|&(command, _)| command)
    }

    /// The canonical name of this command.
    pub fn name(self) -> &'static str {
        ALIASES
            .iter()
            .find(|(command, _)| *command == self)
            .map(|(_, aliases)| aliases[0])
            .unwrap_or("?")
    }

    /// How many numeric arguments this command accepts, inclusive.
    pub fn arity(self) -> (usize, usize) {
        match self {
            Self::Binary(_) => (1, 2),
            Self::Unary(_) => (0, 1),
            _ => (0, 0),
        }
    }
}

/// Every alias in the table, for suggestions.
pub fn all_aliases() -> impl Iterator<Item = &'static str> {
    ALIASES.iter().flat_map(|(_, aliases)| aliases.iter().copied())
}
