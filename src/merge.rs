// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Merge PO files.

use std::path::PathBuf;

use colored::Colorize;
use encoding_rs::Encoding;

use potext::PoFile;

use crate::{args, config::Config, dir::read_po_text, error::Error};

/// Read all files in order into a single `PoFile`.
pub fn merge_files(files: &[PathBuf], encoding: &'static Encoding) -> Result<PoFile, Error> {
    let mut po_file = PoFile::new();
    for path in files {
        let text = read_po_text(path, encoding)?;
        po_file
            .add_translations_from_text(&text)
            .map_err(|err| Error::format(path, err))?;
    }
    Ok(po_file)
}

/// Merge files and write the deduplicated PO text.
fn merge(args: &args::MergeArgs, config: &Config) -> Result<(), Error> {
    let encoding = config.encoding(args.encoding.as_deref())?;
    let po_file = merge_files(&args.files, encoding)?;
    let text = po_file.to_text();
    match &args.write {
        Some(path) => {
            let mut content = text;
            if !content.is_empty() {
                content.push('\n');
            }
            std::fs::write(path, content).map_err(|e| Error::io(path, e))?;
            tracing::debug!("merged PO file written to {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

/// Run the `merge` command.
pub fn run_merge(args: &args::MergeArgs, config: &Config) -> i32 {
    match merge(args, config) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}: {err}", "Error".bright_red().bold());
            1
        }
    }
}
