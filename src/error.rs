//! Error taxonomy for the survey flow.

use derive_more::{Display, Error};

/// Failures a survey run can hit.
///
/// Everything except `Rendering` is terminal for the run: there are no
/// retries and no partial-failure recovery.
#[derive(Debug, Display, Error)]
pub enum SurveyError {
    /// The interactive session ended before every question was answered.
    /// Nothing is written in this case.
    #[display("survey aborted before all questions were answered")]
    AbortedInput,

    /// Writing the results file failed. The write is a single full-text
    /// write, so no partial file is left behind.
    #[display("failed to save survey results")]
    Persistence(#[error(source)] std::io::Error),

    /// The decorative completion banner has no glyph for a character.
    /// Non-fatal: the caller reports it and carries on.
    #[display("no glyph for character {_0:?}")]
    Rendering(#[error(not(source))] char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aborted_input_message() {
        assert_eq!(
            SurveyError::AbortedInput.to_string(),
            "survey aborted before all questions were answered"
        );
    }

    #[test]
    fn test_persistence_carries_io_source() {
        use std::error::Error as _;

        let inner = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = SurveyError::Persistence(inner);
        assert!(error.source().is_some());
    }

    #[test]
    fn test_rendering_names_the_offending_character() {
        let error = SurveyError::Rendering('?');
        assert!(error.to_string().contains("'?'"));
    }
}
