// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Convert translations back to PO text.

use std::collections::HashMap;

use crate::po::translation::{Message, MsgId, Translation};

/// Keep only the last translation for each msgid.
///
/// The translations kept are ordered by the position of their last occurrence.
#[must_use]
pub fn unique_translations(translations: &[Translation]) -> Vec<&Translation> {
    let mut last_seen: HashMap<Option<MsgId<'_>>, usize> = HashMap::new();
    for (idx, translation) in translations.iter().enumerate() {
        last_seen.insert(translation.msgid(), idx);
    }
    let mut indexes: Vec<usize> = last_seen.into_values().collect();
    indexes.sort_unstable();
    indexes
        .into_iter()
        .filter_map(|idx| translations.get(idx))
        .collect()
}

/// Convert a translation to PO text: comment lines, then msgid and msgstr.
///
/// Values are written as is: quotes are not escaped.
#[must_use]
pub fn translation_to_text(translation: &Translation) -> String {
    let mut out = String::new();
    for line in translation.comment.lines() {
        out.push('#');
        out.push_str(line);
        out.push('\n');
    }
    match &translation.message {
        Message::Singular { msgid, msgstr } => {
            out.push_str(&format!(
                "msgid \"{}\"\nmsgstr \"{}\"",
                msgid.as_deref().unwrap_or_default(),
                msgstr.as_deref().unwrap_or_default(),
            ));
        }
        Message::Plural {
            msgid,
            msgid_plural,
            msgstr,
        } => {
            out.push_str(&format!(
                "msgid \"{}\"\nmsgid_plural \"{msgid_plural}\"\n",
                msgid.as_deref().unwrap_or_default(),
            ));
            out.push_str(
                &msgstr
                    .iter()
                    .enumerate()
                    .map(|(idx, value)| format!("msgstr[{idx}] \"{value}\""))
                    .collect::<Vec<String>>()
                    .join("\n"),
            );
        }
    }
    out
}

/// Convert translations to PO text, keeping only the last translation for each msgid.
///
/// Translations are separated by an empty line.
#[must_use]
pub fn to_text(translations: &[Translation]) -> String {
    unique_translations(translations)
        .into_iter()
        .map(translation_to_text)
        .collect::<Vec<String>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::po::{parser::Parser, translation::Field};

    fn round_trip(text: &str) -> String {
        let translations = Parser::new(text)
            .collect::<Result<Vec<Translation>, _>>()
            .unwrap();
        to_text(&translations)
    }

    #[test]
    fn empty() {
        assert_eq!(to_text(&[]), "");
    }

    #[test]
    fn preserves_simple_syntax() {
        let text = "msgid \"x\"\nmsgstr \"y\"";
        assert_eq!(round_trip(text), text);
    }

    #[test]
    fn adds_comments() {
        let mut t = Translation::new();
        t.add_text("a", Field::Msgid);
        t.add_text("b", Field::Msgstr);
        t.add_comment("c\n");
        t.add_comment("d\n");
        assert_eq!(to_text(&[t]), "#c\n#d\nmsgid \"a\"\nmsgstr \"b\"");
    }

    #[test]
    fn comment_lines() {
        let t = Translation::singular("a", "b").with_comment("c\r\n\nd");
        assert_eq!(translation_to_text(&t), "#c\n#\n#d\nmsgid \"a\"\nmsgstr \"b\"");
    }

    #[test]
    fn uses_plural_notation() {
        let text = "#awesome\nmsgid \"one\"\nmsgid_plural \"many\"\nmsgstr[0] \"1\"\nmsgstr[1] \"n\"";
        assert_eq!(round_trip(text), text);
    }

    #[test]
    fn separates_translations() {
        let text = "msgid \"\"\nmsgstr \"header\"\n\n#: src/main.rs:1\nmsgid \"xxx\"\nmsgstr \"yyy\"\n\nmsgid \"aaa\"\nmsgstr \"\"";
        assert_eq!(round_trip(text), text);
    }

    #[test]
    fn only_uses_the_latest_of_identical_msgids() {
        let text = "msgid \"one\"\nmsgstr \"1\"\nmsgid \"one\"\nmsgstr \"001\"";
        assert_eq!(round_trip(text), "msgid \"one\"\nmsgstr \"001\"");
    }

    #[test]
    fn unique_translations_order() {
        let translations = vec![
            Translation::singular("a", "1"),
            Translation::singular("b", "2"),
            Translation::plural("a", "as", ["3"]),
            Translation::singular("a", "4"),
            Translation::singular("c", "5"),
            Translation::singular("b", "6"),
        ];
        let unique = unique_translations(&translations);
        assert_eq!(
            unique,
            vec![
                &translations[2],
                &translations[3],
                &translations[4],
                &translations[5],
            ]
        );
    }

    #[test]
    fn quotes_are_not_escaped() {
        let t = Translation::singular("xxx \"quoted\"", "yyy");
        assert_eq!(to_text(&[t]), "msgid \"xxx \"quoted\"\"\nmsgstr \"yyy\"");
    }
}
