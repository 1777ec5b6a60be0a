// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Potext reads and writes the PO (gettext Portable Object) format.
//!
//! Parsing turns the text into a list of [`Translation`], in the order they are
//! found: duplicates are kept. Converting back to text keeps only the last
//! translation for each msgid.
//!
//! The supported syntax is a subset of PO: comments (`#...`), `msgid`,
//! `msgid_plural`, `msgstr` and `msgstr[N]`, with strings wrapped in double
//! quotes (`\"` is unescaped) or single quotes (taken verbatim).

pub mod po;

pub use po::{
    error::FormatError,
    file::PoFile,
    parser::Parser,
    translation::{Field, Message, MsgId, MsgStr, Translation},
};

/// Parse PO text into the list of complete translations.
///
/// # Errors
///
/// Return a [`FormatError`] if the text is not valid PO text.
pub fn parse(text: &str) -> Result<Vec<Translation>, FormatError> {
    let mut po_file = PoFile::new();
    po_file.add_translations_from_text(text)?;
    Ok(po_file.into_translations())
}

/// Convert translations to PO text, keeping only the last translation for each msgid.
#[must_use]
pub fn to_text(translations: &[Translation]) -> String {
    po::serializer::to_text(translations)
}
