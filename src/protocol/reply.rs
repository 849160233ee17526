//! Reply definitions
//!
//! Represents the data lines of a successful round-trip.

/// Data lines of a successful reply, in the order the daemon sent them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    lines: Vec<String>,
}

impl Reply {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// An acknowledgement without data
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// How an operation post-processes reply lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePolicy {
    /// Keep lines exactly as received
    #[default]
    Verbatim,

    /// Keep only the text after the last whitespace run.
    ///
    /// Daemons disagree on the `LIST remote` layout: some send bare command
    /// names, lircd prefixes each with its code, others with the remote name.
    LastToken,
}

impl LinePolicy {
    pub fn apply(self, reply: Reply) -> Vec<String> {
        match self {
            LinePolicy::Verbatim => reply.into_lines(),
            LinePolicy::LastToken => reply
                .into_lines()
                .into_iter()
                .map(|line| last_token(&line).to_string())
                .collect(),
        }
    }
}

fn last_token(line: &str) -> &str {
    line.rsplit(char::is_whitespace).next().unwrap_or("")
}
