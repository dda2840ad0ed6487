//! Vocabulary extraction from scanned teletext frontpage images.
//!
//! The pipeline takes one 480×360 teletext frame, prepares it for OCR,
//! runs an external OCR engine over the headline band, and post-processes
//! the raw text into ordered lines of normalized Finnish words.

pub mod core;
pub mod dict;
pub mod error;
pub mod ocr;
pub mod pipeline;
pub mod prepare;
pub mod text;

pub use crate::core::model::{Document, Line};
pub use crate::error::{Result, TelelexError};
