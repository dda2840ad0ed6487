use regex::Regex;

use crate::core::model::{Document, Line};

/// Strips OCR noise from raw engine output and splits it into token lines.
///
/// Everything outside newlines, `:`, `-`, Finnish letters, ASCII letters and
/// digits is replaced with a space. The colon survives here because the
/// dictionary checks in the later stages need it; the normalizer strips it.
#[derive(Debug)]
pub struct Sanitizer {
    noise: Regex,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer {
    pub fn new() -> Self {
        let noise = Regex::new(r"[^\n:\-äÄöÖåÅA-Za-z0-9]")
            .expect("noise character class compiles");
        Self { noise }
    }

    /// Raw engine text to ordered lines of tokens. Case is preserved; empty
    /// tokens and lines that lose all their tokens are dropped.
    pub fn sanitize(&self, text: &str) -> Document {
        let cleaned = self.noise.replace_all(text, " ");
        let lines = cleaned
            .lines()
            .filter_map(|line| {
                let tokens: Vec<String> =
                    line.split_whitespace().map(str::to_string).collect();
                if tokens.is_empty() {
                    None
                } else {
                    Some(Line::new(tokens))
                }
            })
            .collect();
        Document::new(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(document: &Document, row: usize) -> Vec<&str> {
        document.lines[row].tokens.iter().map(String::as_str).collect()
    }

    #[test]
    fn strips_punctuation_and_keeps_case() {
        let sanitizer = Sanitizer::new();
        let document = sanitizer.sanitize("Imatralla paloi, rengasvarasto!");
        assert_eq!(document.lines.len(), 1);
        assert_eq!(tokens(&document, 0), vec!["Imatralla", "paloi", "rengasvarasto"]);
    }

    #[test]
    fn keeps_colon_hyphen_and_finnish_letters() {
        let sanitizer = Sanitizer::new();
        let document = sanitizer.sanitize("EU:n päätös tv-yhtiöille");
        assert_eq!(tokens(&document, 0), vec!["EU:n", "päätös", "tv-yhtiöille"]);
    }

    #[test]
    fn splits_lines_and_drops_blank_ones() {
        let sanitizer = Sanitizer::new();
        let document = sanitizer.sanitize("Imatralla paloi\n\n  ~|%  \nPuolueiden vastattava\n");
        assert_eq!(document.lines.len(), 2);
        assert_eq!(tokens(&document, 0), vec!["Imatralla", "paloi"]);
        assert_eq!(tokens(&document, 1), vec!["Puolueiden", "vastattava"]);
    }

    #[test]
    fn noise_between_words_becomes_a_token_break() {
        let sanitizer = Sanitizer::new();
        let document = sanitizer.sanitize("sää|tiedote");
        assert_eq!(tokens(&document, 0), vec!["sää", "tiedote"]);
    }
}
