//! Terminal-related data types for output rendering.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Represents a single line of output in the terminal with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for efficient keying in For loops
    pub id: usize,
    /// The actual output data
    pub data: OutputLineData,
}

/// The actual content of an output line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLineData {
    /// Command with prompt and user input
    Command { prompt: String, input: String },
    /// Plain text output
    Text(String),
    /// Error message
    Error(String),
    /// Success message
    Success(String),
    /// Info message
    Info(String),
}

// Global counter for generating unique IDs
static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Success(s.into()))
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Info(s.into()))
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    /// Plain text of the line as a terminal would print it.
    pub fn plain(&self) -> String {
        match &self.data {
            OutputLineData::Command { prompt, input } => format!("{prompt}$ {input}"),
            OutputLineData::Text(s)
            | OutputLineData::Error(s)
            | OutputLineData::Success(s)
            | OutputLineData::Info(s) => s.clone(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.data, OutputLineData::Error(_))
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.data == other.data
    }
}
