//! Editor-facing color provider.
//!
//! Editors that show inline color swatches ask a provider two questions:
//! which ranges of a document are colors, and what text should replace a
//! range once the user picks a new color. [`DocumentColorProvider`] is that
//! seam; [`HslVariableProvider`] answers it with the scanner in this crate.
//!
//! Registration, document lifecycle and applying edits belong to the host.

use std::ops::Range;

use crate::color::Color;
use crate::scanner::{find_tokens, render_token};

/// Filter deciding which documents a provider handles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentSelector {
    pub language: String,
    pub scheme: String,
}

impl Default for DocumentSelector {
    fn default() -> Self {
        Self::new("css", "file")
    }
}

impl DocumentSelector {
    #[must_use]
    pub fn new(language: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            scheme: scheme.into(),
        }
    }

    /// Set the language id.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the URI scheme.
    #[must_use]
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Whether a document with this language id and URI scheme is handled.
    /// Language ids compare case-insensitively.
    #[must_use]
    pub fn matches(&self, language: &str, scheme: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.scheme == scheme
    }
}

/// A color found in a document.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorInformation {
    /// Byte range of the color text.
    pub range: Range<usize>,
    pub color: Color,
}

/// A replacement of a byte range with new text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub new_text: String,
}

impl TextEdit {
    #[must_use]
    pub fn new(range: Range<usize>, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    /// Apply the edit to `text`, returning the new document.
    ///
    /// Returns `None` if the range is out of bounds or splits a character.
    #[must_use]
    pub fn apply(&self, text: &str) -> Option<String> {
        let before = text.get(..self.range.start)?;
        let after = text.get(self.range.end..)?;
        if self.range.start > self.range.end {
            return None;
        }
        Some(format!("{before}{}{after}", self.new_text))
    }
}

/// One way of writing a color back into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPresentation {
    pub label: String,
    pub text_edit: Option<TextEdit>,
}

impl ColorPresentation {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text_edit: None,
        }
    }

    #[must_use]
    pub fn with_text_edit(mut self, edit: TextEdit) -> Self {
        self.text_edit = Some(edit);
        self
    }
}

/// Trait for anything that can locate and re-render colors in a document.
pub trait DocumentColorProvider {
    /// Documents this provider should be consulted for.
    fn selector(&self) -> &DocumentSelector;

    /// Every color in `text`, in document order.
    fn provide_document_colors(&self, text: &str) -> Vec<ColorInformation>;

    /// Candidate replacements for `range` once `color` has been picked.
    fn provide_color_presentations(
        &self,
        color: Color,
        range: Range<usize>,
    ) -> Vec<ColorPresentation>;

    /// Like [`provide_document_colors`](Self::provide_document_colors), but
    /// returns nothing for documents outside the selector.
    fn provide_document_colors_for(
        &self,
        language: &str,
        scheme: &str,
        text: &str,
    ) -> Vec<ColorInformation> {
        if self.selector().matches(language, scheme) {
            self.provide_document_colors(text)
        } else {
            log::trace!("skipping document: language={language} scheme={scheme}");
            Vec::new()
        }
    }
}

/// Provider for `--name: H S% L%` custom properties.
#[derive(Debug, Clone, Default)]
pub struct HslVariableProvider {
    selector: DocumentSelector,
}

impl HslVariableProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom document selector.
    #[must_use]
    pub fn with_selector(selector: DocumentSelector) -> Self {
        Self { selector }
    }
}

impl DocumentColorProvider for HslVariableProvider {
    fn selector(&self) -> &DocumentSelector {
        &self.selector
    }

    fn provide_document_colors(&self, text: &str) -> Vec<ColorInformation> {
        find_tokens(text)
            .into_iter()
            .map(|token| ColorInformation {
                range: token.range(),
                color: token.color(),
            })
            .collect()
    }

    fn provide_color_presentations(
        &self,
        color: Color,
        range: Range<usize>,
    ) -> Vec<ColorPresentation> {
        let label = render_token(color);
        let edit = TextEdit::new(range, label.clone());
        vec![ColorPresentation::new(label).with_text_edit(edit)]
    }
}

#[cfg(feature = "json")]
mod json {
    use serde_json::{Value, json};

    use super::{ColorInformation, ColorPresentation};

    impl ColorInformation {
        /// JSON object with `range` (`start`/`end`) and `color` (`red`,
        /// `green`, `blue`, `alpha`).
        #[must_use]
        pub fn to_json(&self) -> Value {
            json!({
                "range": { "start": self.range.start, "end": self.range.end },
                "color": {
                    "red": self.color.red,
                    "green": self.color.green,
                    "blue": self.color.blue,
                    "alpha": self.color.alpha,
                },
            })
        }
    }

    impl ColorPresentation {
        /// JSON object with `label` and an optional `textEdit`.
        #[must_use]
        pub fn to_json(&self) -> Value {
            let text_edit = self.text_edit.as_ref().map(|edit| {
                json!({
                    "range": { "start": edit.range.start, "end": edit.range.end },
                    "newText": edit.new_text,
                })
            });
            json!({ "label": self.label, "textEdit": text_edit })
        }
    }
}
