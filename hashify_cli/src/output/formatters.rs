use super::OutputFormatter;
use crate::history::HistoryEntry;
use crate::record::DigestRecord;
use anyhow::Result;
use colored::*;
use hashify_core::{BatchEntry, Comparison};
use serde::Serialize;

/// Verdict shown when both inputs hash the same
pub const MATCH_MESSAGE: &str = "✅ Hashes Match";

/// Verdict shown when the inputs hash differently
pub const MISMATCH_MESSAGE: &str = "❌ Hashes Do Not Match";

/// Shown instead of a verdict while either side is empty
pub const INCOMPLETE_MESSAGE: &str = "Enter text in both fields to compare";

/// Text formatter for human-readable output
pub struct TextFormatter {
    use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn colorize(&self, text: &str, color: fn(&str) -> ColoredString) -> String {
        if self.use_color {
            color(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_digest(&self, record: &DigestRecord) -> Result<String> {
        let mut output = String::new();

        if let (Some(salt), Some(position)) = (&record.salt, record.salt_position) {
            output.push_str(&format!(
                "{}: {salt} ({position})\n",
                self.colorize("Salt", |s| s.bold())
            ));
        }

        let algo_str = self.colorize(record.algorithm.display_name(), |s| s.yellow());
        let hash_str = self.colorize(&record.hash, |s| s.cyan());
        output.push_str(&format!("{algo_str}: {hash_str}"));

        Ok(output)
    }

    fn format_batch(&self, entries: &[BatchEntry]) -> Result<String> {
        let width = entries
            .last()
            .map(|e| e.line.to_string().len())
            .unwrap_or(1);

        let lines: Vec<String> = entries
            .iter()
            .map(|entry| {
                let line = self.colorize(&format!("{:>width$}", entry.line), |s| s.dimmed());
                let hash = self.colorize(&entry.hash, |s| s.cyan());
                format!("{line}  {hash}  {}", entry.input)
            })
            .collect();

        Ok(lines.join("\n"))
    }

    fn format_comparison(&self, comparison: &Comparison) -> Result<String> {
        let name = comparison.algorithm.display_name();
        let mut output = format!(
            "{} (first):  {}\n{} (second): {}\n",
            self.colorize(name, |s| s.yellow()),
            self.colorize(&comparison.first_hash, |s| s.cyan()),
            self.colorize(name, |s| s.yellow()),
            self.colorize(&comparison.second_hash, |s| s.cyan()),
        );

        let verdict = match comparison.matches {
            Some(true) => self.colorize(MATCH_MESSAGE, |s| s.green().bold()),
            Some(false) => self.colorize(MISMATCH_MESSAGE, |s| s.red().bold()),
            None => self.colorize(INCOMPLETE_MESSAGE, |s| s.dimmed()),
        };
        output.push_str(&verdict);

        Ok(output)
    }

    fn format_history(&self, entries: &[HistoryEntry]) -> Result<String> {
        if entries.is_empty() {
            return Ok("No history yet".to_string());
        }

        let lines: Vec<String> = entries
            .iter()
            .map(|entry| {
                let when = entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
                let algo = format!("{:<7}", entry.record.algorithm.display_name());
                let salted = if entry.record.salt.is_some() { " (salted)" } else { "" };
                format!(
                    "{}  {}  {}  {}{salted}",
                    self.colorize(&when, |s| s.dimmed()),
                    self.colorize(&algo, |s| s.yellow()),
                    self.colorize(&entry.record.hash, |s| s.cyan()),
                    entry.record.text,
                )
            })
            .collect();

        Ok(lines.join("\n"))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_digest(&self, record: &DigestRecord) -> Result<String> {
        self.render(record)
    }

    fn format_batch(&self, entries: &[BatchEntry]) -> Result<String> {
        self.render(entries)
    }

    fn format_comparison(&self, comparison: &Comparison) -> Result<String> {
        self.render(comparison)
    }

    fn format_history(&self, entries: &[HistoryEntry]) -> Result<String> {
        self.render(entries)
    }
}

/// CSV formatter for tabular output
pub struct CsvFormatter;

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write<I, R>(headers: &[&str], records: I) -> Result<String>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator,
        R::Item: AsRef<[u8]>,
    {
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(headers)?;

        for record in records {
            wtr.write_record(record)?;
        }

        let data = wtr.into_inner()?;
        Ok(String::from_utf8(data)?)
    }

    fn salt_fields(record: &DigestRecord) -> [String; 2] {
        [
            record.salt.clone().unwrap_or_default(),
            record
                .salt_position
                .map(|p| p.to_string())
                .unwrap_or_default(),
        ]
    }
}

impl OutputFormatter for CsvFormatter {
    fn format_digest(&self, record: &DigestRecord) -> Result<String> {
        let [salt, position] = Self::salt_fields(record);
        Self::write(
            &["text", "algorithm", "hash", "salt", "salt_position"],
            [[
                record.text.clone(),
                record.algorithm.to_string(),
                record.hash.clone(),
                salt,
                position,
            ]],
        )
    }

    fn format_batch(&self, entries: &[BatchEntry]) -> Result<String> {
        Self::write(
            &["line", "input", "hash"],
            entries
                .iter()
                .map(|e| [e.line.to_string(), e.input.clone(), e.hash.clone()]),
        )
    }

    fn format_comparison(&self, comparison: &Comparison) -> Result<String> {
        let verdict = comparison
            .matches
            .map(|m| m.to_string())
            .unwrap_or_default();
        Self::write(
            &["algorithm", "first_hash", "second_hash", "matches"],
            [[
                comparison.algorithm.to_string(),
                comparison.first_hash.clone(),
                comparison.second_hash.clone(),
                verdict,
            ]],
        )
    }

    fn format_history(&self, entries: &[HistoryEntry]) -> Result<String> {
        Self::write(
            &[
                "id",
                "timestamp",
                "input",
                "algorithm",
                "hash",
                "salt",
                "salt_position",
            ],
            entries.iter().map(|e| {
                let [salt, position] = Self::salt_fields(&e.record);
                [
                    e.id.clone(),
                    e.timestamp.to_rfc3339(),
                    e.record.text.clone(),
                    e.record.algorithm.to_string(),
                    e.record.hash.clone(),
                    salt,
                    position,
                ]
            }),
        )
    }
}
