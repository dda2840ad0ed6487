//! Repair of split words in engine output.
//!
//! Tesseract tends to cut a Finnish word at a non-initial `j`, emitting two
//! adjacent tokens instead of one: "Norja" comes out as "Nor" and "ja". The
//! repairer merges such a pair back together whenever the dictionary accepts
//! the concatenation, and leaves genuine j-initial words alone.

use tracing::warn;

use crate::core::model::Line;
use crate::dict::Morphology;

/// The letter tesseract splits words at.
const TRIGGER: char = 'j';

pub struct WordRepairer<'a> {
    lexicon: &'a dyn Morphology,
}

impl<'a> WordRepairer<'a> {
    pub fn new(lexicon: &'a dyn Morphology) -> Self {
        Self { lexicon }
    }

    /// Merge erroneously split token pairs within one line.
    ///
    /// Tokens are scanned right to left so a merged pair consumes its left
    /// half before that half is visited. Each pair is tried at most once; a
    /// token kept after a failed merge can still become the left half of the
    /// next pair. A concatenation of two legitimate words that happens to be
    /// a dictionary word is merged too; the heuristic trades that imprecision
    /// for recovering the common engine failure.
    pub fn repair(&self, line: &Line) -> Line {
        let tokens = &line.tokens;
        if tokens.len() < 2 {
            return line.clone();
        }

        let mut emitted: Vec<String> = Vec::with_capacity(tokens.len());
        let mut first_consumed = false;
        let mut consumed_below = false;

        for i in (1..tokens.len()).rev() {
            if consumed_below {
                consumed_below = false;
                continue;
            }

            let token = &tokens[i];
            if !token.starts_with(TRIGGER) {
                emitted.push(token.clone());
                continue;
            }

            let candidate = format!("{}{}", tokens[i - 1], token);
            if self.recognized(&candidate) {
                emitted.push(candidate);
                consumed_below = true;
                if i == 1 {
                    first_consumed = true;
                }
            } else {
                emitted.push(token.clone());
            }
        }

        if !first_consumed {
            emitted.push(tokens[0].clone());
        }
        emitted.reverse();
        Line::new(emitted)
    }

    fn recognized(&self, candidate: &str) -> bool {
        match self.lexicon.is_word(candidate) {
            Ok(known) => known,
            Err(err) => {
                warn!(%err, candidate, "dictionary lookup failed, keeping tokens split");
                false
            }
        }
    }
}
