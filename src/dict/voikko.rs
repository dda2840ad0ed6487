use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::dict::Morphology;
use crate::error::{Result, TelelexError};

/// Adapter around the external `voikkospell` binary.
///
/// One word is fed per invocation on stdin; `-M` prints the morphological
/// analyses, from which the ordered BASEFORM attributes are collected.
#[derive(Debug, Clone)]
pub struct VoikkoSpell {
    binary: PathBuf,
    dictionary: String,
}

impl Default for VoikkoSpell {
    fn default() -> Self {
        Self::new()
    }
}

impl VoikkoSpell {
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("voikkospell"),
            dictionary: "fi-x-morphoid".to_string(),
        }
    }

    pub fn with_binary(mut self, binary: PathBuf) -> Self {
        self.binary = binary;
        self
    }

    pub fn with_dictionary(mut self, dictionary: String) -> Self {
        self.dictionary = dictionary;
        self
    }

    fn analyze(&self, word: &str) -> Result<String> {
        let mut child = Command::new(&self.binary)
            .arg("-M")
            .arg("-d")
            .arg(&self.dictionary)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| TelelexError::Dictionary {
                reason: format!("failed to invoke voikkospell: {e}; is it installed?"),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(word.as_bytes())
                .and_then(|_| stdin.write_all(b"\n"))
                .map_err(|e| TelelexError::Dictionary {
                    reason: format!("failed to feed word to voikkospell: {e}"),
                })?;
        }

        let output = child.wait_with_output().map_err(|e| TelelexError::Dictionary {
            reason: format!("voikkospell did not finish: {e}"),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TelelexError::Dictionary {
                reason: format!("voikkospell exited with {}: {}", output.status, stderr.trim()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Morphology for VoikkoSpell {
    fn base_forms(&self, word: &str) -> Result<Vec<String>> {
        Ok(parse_base_forms(&self.analyze(word)?))
    }
}

/// Collect BASEFORM attribute values from `voikkospell -M` output, in the
/// order the analyses appear.
fn parse_base_forms(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.trim().strip_prefix("BASEFORM="))
        .filter(|form| !form.is_empty())
        .map(str::to_string)
        .collect()
}
