//! Builder for batch hashing input files

use hashify_core::{BatchEntry, HashAlgorithm, Result, hash_text};

/// Line terminator used when rendering the content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Builder for multi-line batch content
#[derive(Debug, Default)]
pub struct BatchInputBuilder {
    lines: Vec<String>,
    line_ending: LineEnding,
    trailing_newline: bool,
}

/// Rendered batch content with the lines a batch run should keep
#[derive(Debug, Clone)]
pub struct BatchInput {
    pub content: String,
    pub kept_lines: Vec<String>,
}

impl BatchInputBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line that should be hashed
    pub fn line(mut self, text: &str) -> Self {
        self.lines.push(text.to_string());
        self
    }

    /// Add several hashable lines
    pub fn lines<'a>(mut self, texts: impl IntoIterator<Item = &'a str>) -> Self {
        self.lines.extend(texts.into_iter().map(str::to_string));
        self
    }

    /// Add a blank or whitespace-only line that a batch run drops
    pub fn blank(mut self, whitespace: &str) -> Self {
        debug_assert!(whitespace.trim().is_empty());
        self.lines.push(whitespace.to_string());
        self
    }

    /// Use `\r\n` or `\n` between lines
    pub fn with_line_ending(mut self, ending: LineEnding) -> Self {
        self.line_ending = ending;
        self
    }

    /// End the content with a line terminator
    pub fn with_trailing_newline(mut self) -> Self {
        self.trailing_newline = true;
        self
    }

    /// Render the content
    pub fn build(self) -> BatchInput {
        let separator = self.line_ending.as_str();
        let mut content = self.lines.join(separator);
        if self.trailing_newline {
            content.push_str(separator);
        }

        let kept_lines = self
            .lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect();

        BatchInput {
            content,
            kept_lines,
        }
    }
}

impl BatchInput {
    /// Entries a correct batch run over `content` must produce
    pub fn expected_entries(&self, algorithm: HashAlgorithm) -> Result<Vec<BatchEntry>> {
        self.kept_lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                Ok(BatchEntry {
                    line: index + 1,
                    input: line.clone(),
                    hash: hash_text(line, algorithm)?,
                })
            })
            .collect()
    }
}
