//! Display functions for rounds and submission outcomes

use super::formatters::{letter_badge, used_words_line};
use crate::commands::CheckReport;
use crate::core::RootWord;
use crate::session::SubmissionOutcome;
use colored::Colorize;
use std::io::{self, Write};

/// Write the banner announcing a new round
///
/// # Errors
/// Propagates write failures.
pub fn write_round_header<W: Write>(out: &mut W, root_word: &RootWord) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Root word: {} {}",
        root_word.as_str().to_uppercase().bright_yellow().bold(),
        letter_badge(root_word.as_str()).bright_black()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())
}

/// Write feedback for one submission; blank submissions write nothing
///
/// # Errors
/// Propagates write failures.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &SubmissionOutcome) -> io::Result<()> {
    match outcome {
        SubmissionOutcome::NoOp => Ok(()),
        SubmissionOutcome::Accepted(word) => writeln!(
            out,
            "{} {} {}",
            "✓".green().bold(),
            word.bright_white().bold(),
            letter_badge(word).bright_black()
        ),
        SubmissionOutcome::Rejected(reason) => writeln!(
            out,
            "{} {}: {}",
            "✗".red().bold(),
            reason.title.red().bold(),
            reason.message
        ),
    }
}

/// Write the used-words list, most recent first, one per line
///
/// # Errors
/// Propagates write failures.
pub fn write_used_words<W: Write>(out: &mut W, used_words: &[String]) -> io::Result<()> {
    if used_words.is_empty() {
        return writeln!(out, "  {}", used_words_line(used_words).bright_black());
    }

    for word in used_words {
        writeln!(out, "  {} {word}", letter_badge(word).bright_black())?;
    }
    Ok(())
}

/// Print the result of checking a batch of words
///
/// # Errors
/// Propagates write failures.
pub fn print_check_report(report: &CheckReport) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_check_report(&mut stdout, report)?;
    stdout.flush()
}

/// Write the result of checking a batch of words
///
/// # Errors
/// Propagates write failures.
pub fn write_check_report<W: Write>(out: &mut W, report: &CheckReport) -> io::Result<()> {
    write_round_header(out, &report.root_word)?;

    for result in &report.results {
        if result.outcome == SubmissionOutcome::NoOp {
            writeln!(out, "{} {}", "·".bright_black(), "(blank)".bright_black())?;
        } else {
            write_outcome(out, &result.outcome)?;
        }
    }

    writeln!(out, "\n{}", "Used words:".bright_cyan().bold())?;
    write_used_words(out, &report.used_words)?;

    writeln!(
        out,
        "\n{} accepted, {} rejected",
        report.accepted_count().to_string().green().bold(),
        report.rejected_count().to_string().red().bold()
    )
}
