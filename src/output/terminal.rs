// Colored terminal output for single verdicts and batch results.
//
// The CLI's `score` and `score-file` commands delegate here.

use colored::Colorize;

use crate::pipeline::batch::BatchRow;
use crate::scoring::offensiveness::{Classification, Verdict};

use super::truncate_chars;

/// Display the verdict for one piece of text.
pub fn display_verdict(text: &str, verdict: &Verdict) {
    println!("\n{}", "=== Offensiveness ===".bold());
    println!("  Text:  \"{}\"", truncate_chars(text, 100).dimmed());
    println!("  Score: {:.2}/100", verdict.offensiveness);
    println!("  {}", colorize(verdict));
}

/// Display a batch of scored rows as a table with a summary line.
pub fn display_batch(rows: &[BatchRow]) {
    if rows.is_empty() {
        println!("No rows to score.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Batch Results ({} rows) ===", rows.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:>6}  {:<60}",
        "Row".dimmed(),
        "Score".dimmed(),
        "Text".dimmed(),
    );
    println!("  {}", "-".repeat(74).dimmed());

    for (i, row) in rows.iter().enumerate() {
        let score = format!("{:>6.2}", row.verdict.offensiveness);
        let score = match row.verdict.classification() {
            Classification::LikelyOffensive => score.red().bold().to_string(),
            Classification::Safe => score.green().to_string(),
        };
        println!(
            "  {:>4}  {}  {:<60}",
            i + 1,
            score,
            truncate_chars(&row.text.as_text(), 57),
        );
    }

    let flagged = rows
        .iter()
        .filter(|r| r.verdict.classification() == Classification::LikelyOffensive)
        .count();

    println!();
    if flagged > 0 {
        println!("  {} {} likely offensive rows", "!".red().bold(), flagged);
    } else {
        println!("  {}", "All rows seem safe.".green());
    }
}

fn colorize(verdict: &Verdict) -> String {
    match verdict.classification() {
        Classification::LikelyOffensive => verdict.message.red().bold().to_string(),
        Classification::Safe => verdict.message.green().to_string(),
    }
}
