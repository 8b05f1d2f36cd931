use colored::Colorize;
use stock::{Rejection, ReportError, Selection, catalog};

use crate::command::{COMMANDS, ParseError};
use crate::session::Outcome;

pub const PROMPT: &str = "> ";
pub const FAREWELL: &str = "Exiting Stock Scraper";

fn list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

fn error(msg: impl AsRef<str>) -> String {
    format!("{} {}", "ERROR:".red().bold(), msg.as_ref())
}

fn warning(msg: impl AsRef<str>) -> String {
    msg.as_ref().yellow().to_string()
}

pub fn help() -> String {
    let width = COMMANDS.iter().map(|c| c.usage.len()).max().unwrap_or(0);

    let mut out = format!("There are {} possible commands:", COMMANDS.len());
    for c in COMMANDS {
        out.push_str(&format!("\n  {:<width$}   {}", c.usage, c.description));
    }
    out
}

pub fn parse_error(e: &ParseError) -> String {
    error(e.to_string())
}

fn report_error(symbol: &str, e: &ReportError) -> String {
    match e {
        ReportError::NoFields => warning("You have not selected any data points. Use @add to add some"),
        ReportError::Fetch(e) => error(format!("could not fetch report for {symbol}: {e}")),
    }
}

pub fn outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::NoActiveStock => {
            warning("You have not yet selected a stock. Use @stock <SYMBOL> to select a stock")
        }
        Outcome::Selected { symbol, selection } => {
            let symbol = symbol.bold();
            match selection {
                Selection::AlreadyActive => {
                    format!("You are already currently investigating {symbol}")
                }
                Selection::Restored => format!(
                    "You already have {symbol} in history. Stock under investigation is now {symbol}"
                ),
                Selection::Created => format!("Changed stock under investigation to {symbol}"),
            }
        }
        Outcome::Added { symbol, added } => {
            let mut lines = Vec::new();
            if !added.accepted.is_empty() {
                lines.push(format!(
                    "{} successfully added to {} stock investigation",
                    list(&added.accepted),
                    symbol.bold()
                ));
            }

            let of = |kind: Rejection| -> Vec<String> {
                added
                    .rejected
                    .iter()
                    .filter(|(_, k)| *k == kind)
                    .map(|(c, _)| c.clone())
                    .collect()
            };
            let unknown = of(Rejection::Unknown);
            let duplicate = of(Rejection::Duplicate);

            if !unknown.is_empty() {
                lines.push(warning(format!(
                    "{} are not data points currently allowed. Use @fields to list them",
                    list(&unknown)
                )));
            }
            if !duplicate.is_empty() {
                lines.push(warning(format!(
                    "{} are already under investigation",
                    list(&duplicate)
                )));
            }
            lines.join("\n")
        }
        Outcome::Removed { symbol, removed } => {
            let mut lines = Vec::new();
            if !removed.removed.is_empty() {
                lines.push(format!(
                    "{} successfully removed from {} stock investigation",
                    list(&removed.removed),
                    symbol.bold()
                ));
            }
            if !removed.missing.is_empty() {
                lines.push(warning(format!("{} were not found", list(&removed.missing))));
            }
            lines.join("\n")
        }
        Outcome::Data { symbol, fields } => {
            let labelled: Vec<String> = fields
                .iter()
                .map(|c| format!("{c} ({})", catalog::label(c)))
                .collect();
            format!(
                "Data points under investigation for {}: {}",
                symbol.bold(),
                list(&labelled)
            )
        }
        Outcome::Status {
            symbol,
            fields,
            report,
        } => {
            let body = match report {
                Ok(report) => report.to_string(),
                Err(e) => report_error(symbol, e),
            };
            format!(
                "Symbol: {}\nData Points: {}\n\n{}",
                symbol.bold(),
                list(fields),
                body
            )
        }
        Outcome::Generated { symbol, result } => match result {
            Ok(()) => "Report successfully generated. Use @status to check values".to_string(),
            Err(e) => report_error(symbol, e),
        },
        Outcome::Fields(fields) => {
            let width = fields.iter().map(|f| f.code.len()).max().unwrap_or(0);
            fields
                .iter()
                .map(|f| format!("  {:<width$}  {}", f.code, f.label))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Outcome::History(symbols) if symbols.is_empty() => {
            "No stocks investigated yet".to_string()
        }
        Outcome::History(symbols) => list(symbols),
        Outcome::Help => help(),
    }
}
