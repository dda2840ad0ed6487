pub mod normalize;
pub mod repair;
pub mod sanitize;

pub use normalize::Normalizer;
pub use repair::WordRepairer;
pub use sanitize::Sanitizer;
