// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Accumulated translations of one or more PO texts.

use crate::po::{error::FormatError, parser::Parser, serializer, translation::Translation};

/// Translations accumulated from PO texts, in order of completion.
///
/// A `PoFile` is not meant to be shared: each call takes it by `&mut`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PoFile {
    translations: Vec<Translation>,
}

impl PoFile {
    /// Create an empty `PoFile`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `PoFile` with the given translations.
    #[must_use]
    pub fn with_translations(translations: Vec<Translation>) -> Self {
        Self { translations }
    }

    /// Parse the text and append its translations to the ones already read.
    ///
    /// Return all the translations accumulated so far.
    ///
    /// # Errors
    ///
    /// Return a [`FormatError`] if the text is not valid PO text; in this case
    /// no translation is added.
    pub fn add_translations_from_text(
        &mut self,
        text: &str,
    ) -> Result<&[Translation], FormatError> {
        let parsed = Parser::new(text).collect::<Result<Vec<Translation>, FormatError>>()?;
        tracing::debug!(
            parsed = parsed.len(),
            total = self.translations.len() + parsed.len(),
            "translations added"
        );
        self.translations.extend(parsed);
        Ok(&self.translations)
    }

    /// Return the translations accumulated so far, duplicates included.
    #[must_use]
    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }

    /// Consume the `PoFile` and return its translations.
    #[must_use]
    pub fn into_translations(self) -> Vec<Translation> {
        self.translations
    }

    /// Convert the accumulated translations to PO text (last msgid wins).
    #[must_use]
    pub fn to_text(&self) -> String {
        serializer::to_text(&self.translations)
    }
}
