// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Quote unescaping for double-quoted PO strings.

use std::borrow::Cow;

pub trait UnescapeQuotesExt {
    fn unescape_quotes(&self) -> Cow<'_, str>;
}

impl UnescapeQuotesExt for str {
    /// Replace every `\"` sequence with a plain `"`.
    ///
    /// No other escape sequence is decoded: `\n`, `\t` or `\\` are kept as is.
    fn unescape_quotes(&self) -> Cow<'_, str> {
        if !self.contains("\\\"") {
            return Cow::Borrowed(self);
        }
        let mut out = String::with_capacity(self.len());
        let mut it = self.chars().peekable();
        while let Some(ch) = it.next() {
            if ch == '\\' && it.peek() == Some(&'"') {
                out.push('"');
                it.next();
            } else {
                out.push(ch);
            }
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_basic() {
        assert_eq!("".unescape_quotes(), "");
        assert_eq!("abc".unescape_quotes(), "abc");
        assert!(matches!("abc".unescape_quotes(), Cow::Borrowed(_)));
    }

    #[test]
    fn unescape_quotes_only() {
        assert_eq!("\\\"".unescape_quotes(), "\"");
        assert_eq!("foo \\\"bar\\\"".unescape_quotes(), "foo \"bar\"");
        assert_eq!("a\\\"b\\\"c".unescape_quotes(), "a\"b\"c");
    }

    #[test]
    fn other_sequences_are_kept() {
        assert_eq!("\\n".unescape_quotes(), "\\n");
        assert_eq!("\\t\\\\".unescape_quotes(), "\\t\\\\");
        assert_eq!("end\\".unescape_quotes(), "end\\");
        assert_eq!("\\\\\"".unescape_quotes(), "\\\"");
    }
}
