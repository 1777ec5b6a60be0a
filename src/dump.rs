// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display translations of a PO file.

use colored::Colorize;

use potext::{MsgId, MsgStr, Translation};

use crate::{
    args::{self, OutputFormat},
    config::Config,
    dir::read_po_text,
    error::Error,
};

/// Format a translation on one line for the `human` output.
fn translation_line(translation: &Translation) -> String {
    let kind = if translation.is_header() {
        "header"
    } else if translation.is_plural() {
        "plural"
    } else {
        "singular"
    };
    let msgid = match translation.msgid() {
        Some(MsgId::Singular(id)) => format!("{id:?}"),
        Some(MsgId::Plural(id, id_plural)) => format!("{id:?} / {id_plural:?}"),
        None => String::new(),
    };
    let msgstr = match translation.msgstr() {
        Some(MsgStr::Singular(s)) => format!("{s:?}"),
        Some(MsgStr::Plural(list)) => format!("{list:?}"),
        None => String::new(),
    };
    let fuzzy = if translation.is_fuzzy() {
        format!(" {}", "(fuzzy)".yellow())
    } else {
        String::new()
    };
    format!("{kind:8} {msgid} -> {msgstr}{fuzzy}")
}

/// Return the translations formatted with the given output format.
fn format_translations(translations: &[Translation], output: OutputFormat) -> String {
    match output {
        OutputFormat::Human => translations
            .iter()
            .map(translation_line)
            .collect::<Vec<String>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string(translations).unwrap_or_default(),
    }
}

fn dump(args: &args::DumpArgs, config: &Config) -> Result<(), Error> {
    let encoding = config.encoding(args.encoding.as_deref())?;
    let text = read_po_text(&args.file, encoding)?;
    let translations = potext::parse(&text).map_err(|err| Error::format(&args.file, err))?;
    println!(
        "{}",
        format_translations(&translations, config.output(args.output))
    );
    Ok(())
}

/// Run the `dump` command.
pub fn run_dump(args: &args::DumpArgs, config: &Config) -> i32 {
    match dump(args, config) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}: {err}", "Error".bright_red().bold());
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_human() {
        colored::control::set_override(false);
        let translations = vec![
            Translation::singular("", "Language: fr"),
            Translation::singular("a", "b").with_comment(", fuzzy\n"),
            Translation::plural("file", "files", ["fichier", "fichiers"]),
        ];
        assert_eq!(
            format_translations(&translations, OutputFormat::Human),
            "header   \"\" -> \"Language: fr\"\n\
             singular \"a\" -> \"b\" (fuzzy)\n\
             plural   \"file\" / \"files\" -> [\"fichier\", \"fichiers\"]"
        );
    }

    #[test]
    fn format_json() {
        let translations = potext::parse("#c\nmsgid \"a\"\nmsgstr \"b\"").unwrap();
        assert_eq!(
            format_translations(&translations, OutputFormat::Json),
            r#"[{"msgid":"a","msgstr":"b","comment":"c\n"}]"#
        );
    }
}
