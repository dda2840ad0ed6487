use tracing::warn;

use crate::core::model::Line;
use crate::dict::Morphology;

/// Maps repaired tokens to their dictionary base form.
///
/// A recognized token becomes the first base form the dictionary returns;
/// an unrecognized one (foreign names, OCR residue) passes through. Either
/// way the result is lowercased and the colon kept for dictionary checks is
/// stripped.
pub struct Normalizer<'a> {
    lexicon: &'a dyn Morphology,
}

impl<'a> Normalizer<'a> {
    pub fn new(lexicon: &'a dyn Morphology) -> Self {
        Self { lexicon }
    }

    pub fn normalize(&self, line: &Line) -> Line {
        let tokens = line
            .tokens
            .iter()
            .filter(|token| !token.is_empty())
            .map(|token| {
                let base = self.first_base_form(token).unwrap_or_else(|| token.clone());
                base.to_lowercase().replace(':', "")
            })
            .collect();
        Line::new(tokens)
    }

    fn first_base_form(&self, token: &str) -> Option<String> {
        match self.lexicon.base_forms(token) {
            // given several analyses, the first one always wins
            Ok(forms) => forms.into_iter().next(),
            Err(err) => {
                warn!(%err, %token, "dictionary lookup failed, keeping token as-is");
                None
            }
        }
    }
}
