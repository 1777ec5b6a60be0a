// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory and file utilities.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::{collections::BTreeSet, sync::Arc};

use colored::Colorize;
use encoding_rs::Encoding;
use ignore::WalkBuilder;

use crate::error::Error;

/// Recursively find all gettext files (matching the `*.po` pattern) under the given paths.
///
/// The .gitignore rules are respected: ignored files are skipped.
/// Files are returned sorted by path.
pub fn find_po_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let all_paths: Vec<PathBuf> = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.to_vec()
    };

    let mut builder = WalkBuilder::new(&all_paths[0]);
    for root in all_paths.iter().skip(1) {
        builder.add(root);
    }

    builder.follow_links(false);

    let files = Arc::new(Mutex::new(BTreeSet::new()));
    builder.build_parallel().run(|| {
        let files = Arc::clone(&files);
        Box::new(move |entry| {
            match entry {
                Ok(dirent) => {
                    if dirent.file_type().is_some_and(|ft| ft.is_file())
                        && dirent.path().extension().is_some_and(|ext| ext == "po")
                        && let Ok(mut files) = files.lock()
                    {
                        files.insert(
                            dirent
                                .path()
                                .strip_prefix("./")
                                .unwrap_or(dirent.path())
                                .to_path_buf(),
                        );
                    }
                }
                Err(err) => {
                    eprintln!("{}: could not read entry: {err}", "Warning".yellow());
                }
            }
            ignore::WalkState::Continue
        })
    });
    let files = files
        .lock()
        .map(|files| files.iter().cloned().collect::<Vec<PathBuf>>())
        .unwrap_or_default();
    tracing::debug!("{} PO files found", files.len());
    files
}

/// Read a file and decode it with the given encoding (a BOM takes precedence).
///
/// Malformed sequences are replaced and reported as a warning.
pub fn read_po_text(path: &Path, encoding: &'static Encoding) -> Result<String, Error> {
    let data = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    let (text, used, malformed) = encoding.decode(&data);
    if malformed {
        eprintln!(
            "{}: {}: invalid characters for encoding {}",
            "Warning".yellow(),
            path.display(),
            used.name(),
        );
    }
    Ok(text.into_owned())
}
