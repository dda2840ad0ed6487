use serde::{Deserialize, Serialize};

/// One recognized headline row: an ordered sequence of word tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub tokens: Vec<String>,
}

impl Line {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// The pipeline output for one frontpage image: ordered headline lines,
/// top to bottom as they appear in the frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub lines: Vec<Line>,
}

impl Document {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn token_count(&self) -> usize {
        self.lines.iter().map(Line::len).sum()
    }

    /// The document as plain word lists, one list per headline row.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.lines.iter().map(|line| line.tokens.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_tokens_across_lines() {
        let document = Document::new(vec![
            Line::new(vec!["imatra".into(), "palaa".into()]),
            Line::new(vec!["puolue".into(), "vastata".into(), "katainen".into()]),
        ]);
        assert_eq!(document.token_count(), 5);
        assert_eq!(document.rows()[1][2], "katainen");
    }
}
