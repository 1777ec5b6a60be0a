// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! A translation record: comment, msgid and msgstr (singular or plural).

use serde::Serialize;

/// Highest index accepted in a `msgstr[N]` keyword.
pub const MAX_PLURAL_INDEX: u32 = 255;

/// Field of a translation targeted by a keyword line and its continuation lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Msgid,
    MsgidPlural,
    Msgstr,
    MsgstrIndex(u32),
}

impl Field {
    /// Return the field named by a keyword (`msgid`, `msgid_plural`, `msgstr`, `msgstr[N]`).
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "msgid" => Some(Field::Msgid),
            "msgid_plural" => Some(Field::MsgidPlural),
            "msgstr" => Some(Field::Msgstr),
            _ => keyword
                .strip_prefix("msgstr[")
                .and_then(|s| s.strip_suffix(']'))
                .filter(|idx| !idx.is_empty() && idx.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|idx| idx.parse::<u32>().ok())
                .filter(|idx| *idx <= MAX_PLURAL_INDEX)
                .map(Field::MsgstrIndex),
        }
    }
}

/// Messages of a translation; `None` means the field was never written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Message {
    Singular {
        msgid: Option<String>,
        msgstr: Option<String>,
    },
    Plural {
        msgid: Option<String>,
        msgid_plural: String,
        msgstr: Vec<String>,
    },
}

impl Default for Message {
    fn default() -> Self {
        Message::Singular {
            msgid: None,
            msgstr: None,
        }
    }
}

/// Borrowed msgid of a translation, used as the deduplication key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MsgId<'a> {
    Singular(&'a str),
    Plural(&'a str, &'a str),
}

/// Borrowed msgstr of a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgStr<'a> {
    Singular(&'a str),
    Plural(&'a [String]),
}

/// A translation read from PO text: its comment and its messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Translation {
    #[serde(flatten)]
    pub message: Message,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Translation {
    /// Create an empty translation (nothing assigned yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a complete singular translation.
    #[must_use]
    pub fn singular<S: Into<String>, T: Into<String>>(msgid: S, msgstr: T) -> Self {
        Self {
            message: Message::Singular {
                msgid: Some(msgid.into()),
                msgstr: Some(msgstr.into()),
            },
            ..Default::default()
        }
    }

    /// Create a plural translation; it is complete if `msgstr` is not empty.
    #[must_use]
    pub fn plural<S, T, I>(msgid: S, msgid_plural: T, msgstr: I) -> Self
    where
        S: Into<String>,
        T: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            message: Message::Plural {
                msgid: Some(msgid.into()),
                msgid_plural: msgid_plural.into(),
                msgstr: msgstr.into_iter().map(Into::into).collect(),
            },
            ..Default::default()
        }
    }

    /// Set the comment (one line per comment line, each ending with `\n`).
    #[must_use]
    pub fn with_comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comment = comment.into();
        self
    }

    /// Append a line of comment.
    pub fn add_comment<S: AsRef<str>>(&mut self, text: S) {
        self.comment.push_str(text.as_ref());
    }

    /// Append text to a field, switching to the plural form on the first
    /// `msgid_plural` or `msgstr[N]` write.
    pub fn add_text<S: AsRef<str>>(&mut self, text: S, field: Field) {
        let text = text.as_ref();
        match field {
            Field::Msgid => match &mut self.message {
                Message::Singular { msgid, .. } | Message::Plural { msgid, .. } => {
                    msgid.get_or_insert_default().push_str(text);
                }
            },
            Field::MsgidPlural => {
                if let Message::Plural { msgid_plural, .. } = self.make_plural() {
                    msgid_plural.push_str(text);
                }
            }
            Field::Msgstr => match &mut self.message {
                Message::Singular { msgstr, .. } => {
                    msgstr.get_or_insert_default().push_str(text);
                }
                Message::Plural { msgstr, .. } => append_at(msgstr, 0, text),
            },
            Field::MsgstrIndex(idx) => {
                if let Message::Plural { msgstr, .. } = self.make_plural() {
                    append_at(msgstr, idx as usize, text);
                }
            }
        }
    }

    /// Convert the message to the plural form (no-op if already plural).
    fn make_plural(&mut self) -> &mut Message {
        if let Message::Singular { msgid, msgstr } = &mut self.message {
            let plural = Message::Plural {
                msgid: msgid.take(),
                msgid_plural: String::new(),
                msgstr: msgstr.take().into_iter().collect(),
            };
            self.message = plural;
        }
        &mut self.message
    }

    /// Return `true` if both msgid and msgstr have been assigned.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match &self.message {
            Message::Singular { msgid, msgstr } => msgid.is_some() && msgstr.is_some(),
            Message::Plural { msgid, msgstr, .. } => msgid.is_some() && !msgstr.is_empty(),
        }
    }

    /// Return `true` if this translation has a plural form.
    #[must_use]
    pub fn is_plural(&self) -> bool {
        matches!(self.message, Message::Plural { .. })
    }

    /// Return `true` if this translation is the header (msgid is an empty string).
    #[must_use]
    pub fn is_header(&self) -> bool {
        matches!(self.msgid(), Some(MsgId::Singular("")))
    }

    /// Return `true` if the comment marks the translation as fuzzy.
    #[must_use]
    pub fn is_fuzzy(&self) -> bool {
        self.comment.contains("fuzzy")
    }

    /// Return the msgid (with the plural form if any), `None` if not assigned.
    #[must_use]
    pub fn msgid(&self) -> Option<MsgId<'_>> {
        match &self.message {
            Message::Singular { msgid, .. } => msgid.as_deref().map(MsgId::Singular),
            Message::Plural {
                msgid,
                msgid_plural,
                ..
            } => msgid
                .as_deref()
                .map(|id| MsgId::Plural(id, msgid_plural.as_str())),
        }
    }

    /// Return the msgstr (list of forms if plural), `None` if not assigned.
    #[must_use]
    pub fn msgstr(&self) -> Option<MsgStr<'_>> {
        match &self.message {
            Message::Singular { msgstr, .. } => msgstr.as_deref().map(MsgStr::Singular),
            Message::Plural { msgstr, .. } => Some(MsgStr::Plural(msgstr.as_slice())),
        }
    }
}

/// Append text to the string at `idx`, growing the list with empty strings.
fn append_at(list: &mut Vec<String>, idx: usize, text: &str) {
    if list.len() <= idx {
        list.resize_with(idx + 1, String::new);
    }
    if let Some(s) = list.get_mut(idx) {
        s.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("msgid", Some(Field::Msgid))]
    #[case("msgid_plural", Some(Field::MsgidPlural))]
    #[case("msgstr", Some(Field::Msgstr))]
    #[case("msgstr[0]", Some(Field::MsgstrIndex(0)))]
    #[case("msgstr[12]", Some(Field::MsgstrIndex(12)))]
    #[case("msgstr[]", None)]
    #[case("msgstr[x]", None)]
    #[case("msgstr[1", None)]
    #[case("msgctxt", None)]
    #[case("msgstr[255]", Some(Field::MsgstrIndex(MAX_PLURAL_INDEX)))]
    #[case("msgstr[256]", None)]
    #[case("msgstr[4000000000]", None)]
    #[case("msgstr[99999999999]", None)]
    #[case("hello", None)]
    fn test_field_from_keyword(#[case] keyword: &str, #[case] expected: Option<Field>) {
        assert_eq!(Field::from_keyword(keyword), expected);
    }

    #[test]
    fn test_complete() {
        let mut t = Translation::new();
        assert!(!t.is_complete());
        t.add_comment("test\n");
        assert!(!t.is_complete());
        t.add_text("", Field::Msgid);
        assert!(!t.is_complete());
        assert_eq!(t.msgid(), Some(MsgId::Singular("")));
        assert!(t.is_header());
        t.add_text("", Field::Msgstr);
        assert!(t.is_complete());
        assert_eq!(t.msgstr(), Some(MsgStr::Singular("")));
    }

    #[test]
    fn test_append() {
        let mut t = Translation::new();
        t.add_text("xxx", Field::Msgid);
        t.add_text("aaa", Field::Msgid);
        t.add_text("", Field::Msgstr);
        t.add_text("bbb", Field::Msgstr);
        assert_eq!(t, Translation::singular("xxxaaa", "bbb"));
        assert!(!t.is_plural());
        assert!(!t.is_header());
    }

    #[test]
    fn test_plural() {
        let mut t = Translation::new();
        t.add_text("singular", Field::Msgid);
        assert!(!t.is_plural());
        t.add_text("plural", Field::MsgidPlural);
        assert!(t.is_plural());
        assert!(!t.is_complete());
        t.add_text("one", Field::MsgstrIndex(0));
        t.add_text("many", Field::MsgstrIndex(1));
        assert!(t.is_complete());
        assert_eq!(t.msgid(), Some(MsgId::Plural("singular", "plural")));
        assert_eq!(
            t,
            Translation::plural("singular", "plural", ["one", "many"])
        );
    }

    #[test]
    fn test_plural_conversion_keeps_values() {
        let mut t = Translation::singular("file", "fichier");
        t.add_text("s", Field::MsgstrIndex(2));
        assert_eq!(
            t.message,
            Message::Plural {
                msgid: Some("file".to_string()),
                msgid_plural: String::new(),
                msgstr: vec!["fichier".to_string(), String::new(), "s".to_string()],
            }
        );
        t.add_text(" (1)", Field::Msgstr);
        t.add_text("files", Field::MsgidPlural);
        t.add_text("!", Field::Msgid);
        assert_eq!(
            t,
            Translation::plural("file!", "files", ["fichier (1)", "", "s"])
        );
    }

    #[test]
    fn test_fuzzy() {
        let t = Translation::singular("a", "b");
        assert!(!t.is_fuzzy());
        let t = t.with_comment(", fuzzy\n");
        assert!(t.is_fuzzy());
    }

    #[test]
    fn test_serialize() {
        let t = Translation::singular("xxx", "yyy");
        assert_eq!(
            serde_json::to_string(&t).unwrap(),
            r#"{"msgid":"xxx","msgstr":"yyy"}"#
        );
        let t = Translation::plural("one", "many", ["1", "n"]).with_comment("awesome\n");
        assert_eq!(
            serde_json::to_string(&t).unwrap(),
            r#"{"msgid":"one","msgid_plural":"many","msgstr":["1","n"],"comment":"awesome\n"}"#
        );
    }
}
