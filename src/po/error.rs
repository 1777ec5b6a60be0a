// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Errors raised while parsing PO text.

use thiserror::Error;

/// The input is not valid PO text.
///
/// Parsing stops at the first error: no partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A keyword line (or a string with no keyword before it) did not name a
    /// known field.
    #[error("no method found: {token:?} on line {line}")]
    NoMethod { token: String, line: usize },

    /// A string fragment is not wrapped in one matching pair of quotes.
    #[error("not string format: {fragment:?} on line {line}")]
    NotString { fragment: String, line: usize },
}

impl FormatError {
    /// Return the 1-based line number where the error was found.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            FormatError::NoMethod { line, .. } | FormatError::NotString { line, .. } => *line,
        }
    }
}
