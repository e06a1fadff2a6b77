//! Output formats the gmd processor can render.
//!
//! The processor receives the format as its third positional argument, so
//! the textual form produced by [`OutputType`]'s `Display` implementation is
//! part of the external contract and must stay lowercase.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Document format produced from the gmd sources.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Deserialize,
    Serialize,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputType {
    /// Plain Markdown with the Groovy sections evaluated.
    #[default]
    Md,
    /// Rendered HTML.
    Html,
    /// PDF rendered through the processor's HTML pipeline.
    Pdf,
}

impl OutputType {
    /// Returns the value passed to the processor on its command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Errors encountered while parsing an [`OutputType`] from text.
pub type OutputTypeParseError = strum::ParseError;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    #[case("md", OutputType::Md)]
    #[case("HTML", OutputType::Html)]
    #[case("Pdf", OutputType::Pdf)]
    fn parses_case_insensitively(#[case] input: &str, #[case] expected: OutputType) {
        assert_eq!(OutputType::from_str(input), Ok(expected));
    }

    #[test]
    fn rejects_unknown_formats() {
        assert!(OutputType::from_str("docx").is_err());
    }

    #[test]
    fn command_line_form_is_lowercase() {
        for output in OutputType::iter() {
            let text = output.as_str();
            assert_eq!(text, text.to_lowercase());
            assert_eq!(text, output.to_string());
        }
    }
}
