// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check that PO files can be parsed.

use std::path::{Path, PathBuf};

use colored::Colorize;
use encoding_rs::Encoding;
use rayon::prelude::*;
use serde::Serialize;

use potext::PoFile;

use crate::{
    args, config::Config, dir::find_po_files, dir::read_po_text, error::Error,
    result::display_result,
};

/// Result of the check of one file.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub path: PathBuf,
    /// Number of translations read (after deduplication).
    pub translations: usize,
    /// Number of translations overridden by a later one with the same msgid.
    pub duplicates: usize,
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<Error>,
}

#[allow(clippy::ref_option)]
fn serialize_error<S>(error: &Option<Error>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match error {
        Some(err) => serializer.serialize_some(&err.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Parse a single file.
pub fn check_file(path: &Path, encoding: &'static Encoding) -> CheckResult {
    let mut result = CheckResult {
        path: path.to_path_buf(),
        translations: 0,
        duplicates: 0,
        error: None,
    };
    let text = match read_po_text(path, encoding) {
        Ok(text) => text,
        Err(err) => {
            result.error = Some(err);
            return result;
        }
    };
    let mut po_file = PoFile::new();
    match po_file.add_translations_from_text(&text) {
        Ok(translations) => {
            let unique = potext::po::serializer::unique_translations(translations).len();
            result.translations = unique;
            result.duplicates = translations.len() - unique;
        }
        Err(err) => result.error = Some(Error::format(path, err)),
    }
    tracing::debug!(
        path = %path.display(),
        translations = result.translations,
        ok = result.error.is_none(),
        "file checked"
    );
    result
}

/// Check and display result for all PO files.
pub fn run_check(args: &args::CheckArgs, config: &Config) -> i32 {
    let start = std::time::Instant::now();
    let encoding = match config.encoding(args.encoding.as_deref()) {
        Ok(encoding) => encoding,
        Err(err) => {
            eprintln!("{}: {err}", "Error".bright_red().bold());
            return 1;
        }
    };
    let po_files = find_po_files(&args.files);
    let result: Vec<CheckResult> = po_files
        .par_iter()
        .map(|f| check_file(f, encoding))
        .collect();
    let elapsed = start.elapsed();
    display_result(&result, config.output(args.output), args.quiet, &elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_valid_file() {
        let dir = tempfile::Builder::new().prefix("potext").tempdir().unwrap();
        let path = dir.path().join("fr.po");
        std::fs::write(
            &path,
            "msgid \"a\"\nmsgstr \"1\"\n\nmsgid \"b\"\nmsgstr \"2\"\n\nmsgid \"a\"\nmsgstr \"3\"\n",
        )
        .unwrap();
        let result = check_file(&path, encoding_rs::UTF_8);
        assert!(result.error.is_none());
        assert_eq!(result.translations, 2);
        assert_eq!(result.duplicates, 1);
    }

    #[test]
    fn check_invalid_file() {
        let dir = tempfile::Builder::new().prefix("potext").tempdir().unwrap();
        let path = dir.path().join("fr.po");
        std::fs::write(&path, "msgid \"a\"\nmsgstr 'b\n").unwrap();
        let result = check_file(&path, encoding_rs::UTF_8);
        assert_eq!(result.translations, 0);
        let Some(Error::Format { source, .. }) = &result.error else {
            panic!("expected a format error");
        };
        assert_eq!(source.line(), 2);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["error"].as_str().unwrap().contains("on line 2"));
    }
}
