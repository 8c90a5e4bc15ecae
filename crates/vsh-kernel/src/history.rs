//! Command history state.

/// Append-only record of raw input lines for one shell run.
///
/// Owned by the execution context and injected wherever it is needed,
/// never process-global; two shells in one process keep separate
/// histories. Lines from interactive and scripted execution land here
/// alike, in the order they ran.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one raw line, pre-tokenization.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut history = History::new();
        history.push("pwd");
        history.push("cd a");
        assert_eq!(history.entries(), ["pwd", "cd a"]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn stores_raw_text() {
        let mut history = History::new();
        history.push("echo 'a  b'   ");
        assert_eq!(history.entries(), ["echo 'a  b'   "]);
    }
}
