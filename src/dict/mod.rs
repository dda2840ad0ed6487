pub mod voikko;

pub use voikko::VoikkoSpell;

use crate::error::Result;

/// A morphological dictionary for one natural language.
///
/// Both the split-word repair and the base-form normalization stages consult
/// the same service. Lookup failures are surfaced as errors here; the calling
/// stages degrade them to "word not recognized" so the pipeline stays total
/// under a broken dictionary.
pub trait Morphology {
    /// Candidate base forms for `word`, in the order the dictionary returns
    /// them. Empty when the word is not recognized.
    fn base_forms(&self, word: &str) -> Result<Vec<String>>;

    /// Whether `word` is recognized in any inflected form.
    fn is_word(&self, word: &str) -> Result<bool> {
        Ok(!self.base_forms(word)?.is_empty())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;

    use super::Morphology;
    use crate::error::{Result, TelelexError};

    /// In-memory dictionary stand-in for deterministic tests.
    #[derive(Debug, Default)]
    pub(crate) struct FakeLexicon {
        entries: HashMap<String, Vec<String>>,
        unavailable: bool,
    }

    impl FakeLexicon {
        pub(crate) fn with_word(mut self, word: &str, base_forms: &[&str]) -> Self {
            self.entries
                .insert(word.to_string(), base_forms.iter().map(|s| s.to_string()).collect());
            self
        }

        pub(crate) fn unavailable() -> Self {
            Self { entries: HashMap::new(), unavailable: true }
        }
    }

    impl Morphology for FakeLexicon {
        fn base_forms(&self, word: &str) -> Result<Vec<String>> {
            if self.unavailable {
                return Err(TelelexError::Dictionary { reason: "service down".to_string() });
            }
            Ok(self.entries.get(word).cloned().unwrap_or_default())
        }
    }
}
