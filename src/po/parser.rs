// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! PO text parser.

use std::borrow::Cow;

use memchr::memmem;

use crate::po::{
    error::FormatError,
    escape::UnescapeQuotesExt,
    translation::{Field, Translation},
};

/// Line-oriented PO parser yielding the complete translations in order.
///
/// The parser stops after the first error. A trailing translation that is not
/// complete at the end of input is silently dropped.
pub struct Parser<'a> {
    data: &'a str,
    iter_lines: memmem::FindIter<'a, 'static>,
    offset: usize,
    line_number: usize,
    // field targeted by the last keyword, `None` after a comment line
    field: Option<Field>,
    current: Translation,
    finished: bool,
}

impl<'d> Parser<'d> {
    /// Create a new `Parser` for the given text.
    #[must_use]
    pub fn new(data: &'d str) -> Self {
        Self {
            data,
            iter_lines: memmem::find_iter(data.as_bytes(), "\n"),
            offset: 0,
            line_number: 0,
            field: None,
            current: Translation::new(),
            finished: false,
        }
    }

    /// Return the number of the last line read (1-based, 0 before the first line).
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Return the next line (without `\n`) from the input data, updating the line number.
    fn next_line(&mut self) -> Option<&'d str> {
        if self.offset >= self.data.len() {
            return None;
        }
        let start = self.offset;
        let end = self.iter_lines.next().unwrap_or(self.data.len());
        self.offset = end + 1;
        self.line_number += 1;
        // `\n` is ASCII so both ends are on a char boundary
        self.data.get(start..end)
    }

    /// Take the current translation if it is complete, starting a new one.
    fn finish_if_complete(&mut self) -> Option<Translation> {
        if !self.current.is_complete() {
            return None;
        }
        tracing::trace!(line = self.line_number, "translation complete");
        Some(std::mem::take(&mut self.current))
    }

    /// Parse one line, returning the translation completed by this line, if any.
    fn parse_line(&mut self, line: &str) -> Result<Option<Translation>, FormatError> {
        let trimmed = line.trim_start();
        if let Some(comment) = trimmed.strip_prefix('#') {
            let done = self.finish_if_complete();
            self.current.add_comment(comment.trim_end());
            self.current.add_comment("\n");
            self.field = None;
            Ok(done)
        } else if trimmed.starts_with(|c: char| c.is_ascii_lowercase()) {
            let end = trimmed
                .find(|c: char| !is_keyword_char(c))
                .unwrap_or(trimmed.len());
            let (keyword, rest) = trimmed.split_at(end);
            let field = Field::from_keyword(keyword).ok_or_else(|| FormatError::NoMethod {
                token: keyword.to_string(),
                line: self.line_number,
            })?;
            let done = if field == Field::Msgid {
                self.finish_if_complete()
            } else {
                None
            };
            self.field = Some(field);
            self.add_string(rest)?;
            Ok(done)
        } else {
            self.add_string(line)?;
            Ok(None)
        }
    }

    /// Add a quoted string to the active field; blank strings are ignored.
    fn add_string(&mut self, fragment: &str) -> Result<(), FormatError> {
        let stripped = fragment.trim();
        if stripped.is_empty() {
            return Ok(());
        }
        let text = text_from_string(stripped).ok_or_else(|| FormatError::NotString {
            fragment: fragment.to_string(),
            line: self.line_number,
        })?;
        let field = self.field.ok_or_else(|| FormatError::NoMethod {
            token: String::new(),
            line: self.line_number,
        })?;
        self.current.add_text(text, field);
        Ok(())
    }
}

/// Return `true` if the char can be part of a keyword like `msgstr[0]`.
fn is_keyword_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '[' | ']')
}

/// Extract the text of a string wrapped in single or double quotes.
///
/// Double-quoted strings have `\"` unescaped, single-quoted strings are taken verbatim.
/// Return `None` if the string is not wrapped in one matching pair of quotes.
pub(crate) fn text_from_string(string: &str) -> Option<Cow<'_, str>> {
    let quote = string.chars().next()?;
    let inner = string.strip_prefix(quote)?.strip_suffix(quote)?;
    match quote {
        '"' => Some(inner.unescape_quotes()),
        '\'' => Some(Cow::Borrowed(inner)),
        _ => None,
    }
}

/// Implement the `Iterator` trait for `Parser`, yielding `Translation` items.
impl Iterator for Parser<'_> {
    type Item = Result<Translation, FormatError>;

    /// Return the next complete `Translation`, an error, or `None` if finished.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        while let Some(line) = self.next_line() {
            match self.parse_line(line) {
                Ok(Some(translation)) => return Some(Ok(translation)),
                Ok(None) => {}
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            }
        }
        self.finished = true;
        // Send the last translation if complete, drop it otherwise.
        self.finish_if_complete().map(Ok)
    }
}
