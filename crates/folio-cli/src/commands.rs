//! Command parsing and dispatch.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use folio_core::error::CoreError;
use folio_core::types::{AssetClass, Month};
use folio_ledger::{LedgerEngine, LedgerResult};

/// Errors raised while parsing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The line contained no tokens.
    #[error("Empty command line")]
    Empty,

    /// The verb did not match any known command.
    #[error("Unknown command: {verb}")]
    UnknownCommand {
        /// The verb that failed to match.
        verb: String,
    },

    /// The argument count did not match the command's arity.
    #[error("Wrong number of arguments for {command} (expected {expected}, got {got})")]
    WrongArgumentCount {
        /// The command verb.
        command: &'static str,
        /// Expected argument count.
        expected: usize,
        /// Supplied argument count.
        got: usize,
    },

    /// An amount or rate token was not a valid decimal.
    #[error("Invalid amount: {token}")]
    InvalidAmount {
        /// The token that failed to parse.
        token: String,
    },

    /// An asset class or month token failed to parse.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// One parsed command, ready to run against the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// One-time initial allocation, amounts in registry order.
    Allocate(BTreeMap<AssetClass, Decimal>),
    /// One-time monthly contribution schedule, amounts in registry order.
    Sip(BTreeMap<AssetClass, Decimal>),
    /// Market rate registration for one month.
    Change(BTreeMap<AssetClass, Decimal>, Month),
    /// End-of-month balance query.
    Balance(Month),
    /// Calendar-anchored rebalance.
    Rebalance,
}

impl Command {
    /// Runs the command, returning the output line for commands that
    /// produce one.
    pub fn run(self, engine: &mut LedgerEngine) -> LedgerResult<Option<String>> {
        match self {
            Command::Allocate(amounts) => engine.allocate(amounts).map(|()| None),
            Command::Sip(amounts) => engine.init_sip(amounts).map(|()| None),
            Command::Change(rates, month) => engine.change(rates, month).map(|()| None),
            Command::Balance(month) => engine.balance(month).map(|s| Some(s.to_string())),
            Command::Rebalance => engine.rebalance().map(|o| Some(o.to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = tokens.collect();

        match verb {
            "ALLOCATE" => Ok(Command::Allocate(parse_amounts("ALLOCATE", &args)?)),
            "SIP" => Ok(Command::Sip(parse_amounts("SIP", &args)?)),
            "CHANGE" => {
                expect_args("CHANGE", &args, AssetClass::count() + 1)?;
                let rates = zip_to_registry(&args[..AssetClass::count()], strip_percent)?;
                let month = args[AssetClass::count()].parse::<Month>()?;
                Ok(Command::Change(rates, month))
            }
            "BALANCE" => {
                expect_args("BALANCE", &args, 1)?;
                Ok(Command::Balance(args[0].parse::<Month>()?))
            }
            "REBALANCE" => {
                expect_args("REBALANCE", &args, 0)?;
                Ok(Command::Rebalance)
            }
            _ => Err(CommandError::UnknownCommand {
                verb: verb.to_string(),
            }),
        }
    }
}

fn expect_args(command: &'static str, args: &[&str], expected: usize) -> Result<(), CommandError> {
    if args.len() != expected {
        return Err(CommandError::WrongArgumentCount {
            command,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn parse_amounts(
    command: &'static str,
    args: &[&str],
) -> Result<BTreeMap<AssetClass, Decimal>, CommandError> {
    expect_args(command, args, AssetClass::count())?;
    zip_to_registry(args, |token| token)
}

/// Zips positional tokens to the asset class registry order.
fn zip_to_registry(
    tokens: &[&str],
    normalize: fn(&str) -> &str,
) -> Result<BTreeMap<AssetClass, Decimal>, CommandError> {
    AssetClass::ALL
        .into_iter()
        .zip(tokens.iter().copied())
        .map(|(class, token)| {
            let amount = normalize(token)
                .parse::<Decimal>()
                .map_err(|_| CommandError::InvalidAmount {
                    token: token.to_string(),
                })?;
            Ok((class, amount))
        })
        .collect()
}

/// Rates may carry a trailing `%` on the wire.
fn strip_percent(token: &str) -> &str {
    token.strip_suffix('%').unwrap_or(token)
}

/// Parses and runs one line, returning its output line if it produced one.
///
/// Blank lines are skipped silently; malformed commands and violated engine
/// preconditions are logged and swallowed so the batch continues.
pub fn execute(engine: &mut LedgerEngine, line: &str) -> Option<String> {
    let command = match line.parse::<Command>() {
        Ok(command) => command,
        Err(CommandError::Empty) => return None,
        Err(error) => {
            tracing::error!(command = line, error = %error, "rejected command");
            return None;
        }
    };

    match command.run(engine) {
        Ok(output) => output,
        Err(error) => {
            tracing::error!(command = line, error = %error, "command failed");
            None
        }
    }
}

/// Runs a batch of lines against the engine, collecting the output lines.
pub fn run_lines<'a>(
    engine: &mut LedgerEngine,
    lines: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    lines
        .into_iter()
        .filter_map(|line| execute(engine, line))
        .collect()
}
