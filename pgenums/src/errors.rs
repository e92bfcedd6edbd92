//! Error types for the generation pipeline.

use thiserror::Error;

/// Faults raised while rendering or finalizing generated source.
///
/// These indicate a generator bug (for example an extracted identifier that
/// renders into unparseable code), not bad schema input; callers treat them
/// as fatal.
#[derive(Debug, Error)]
pub enum EmitError {
    /// A single declaration failed to render.
    #[error("can not render {type_name}: {message}")]
    Render { type_name: String, message: String },

    /// The concatenated output failed the target language validity check.
    #[error("generated {language} code does not parse: {message}")]
    InvalidOutput {
        language: &'static str,
        message: String,
    },
}
