// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display check result.

use std::time::Duration;

use colored::Colorize;

use crate::{args::OutputFormat, checker::CheckResult};

/// Display errors in human format.
fn display_errors_human(result: &[CheckResult]) {
    for err in result.iter().filter_map(|r| r.error.as_ref()) {
        println!("{}: {err}", "error".bright_red().bold());
    }
}

/// Display the result in JSON format.
fn display_result_json(result: &[CheckResult]) {
    println!("{}", serde_json::to_string(result).unwrap_or_default());
}

/// Display the result of the checks and return the appropriate exit code.
pub fn display_result(
    result: &[CheckResult],
    output: OutputFormat,
    quiet: bool,
    elapsed: &Duration,
) -> i32 {
    let files_checked = result.len();
    let files_with_errors = result.iter().filter(|r| r.error.is_some()).count();
    let translations: usize = result.iter().map(|r| r.translations).sum();
    let duplicates: usize = result.iter().map(|r| r.duplicates).sum();
    if !quiet {
        match output {
            OutputFormat::Human => {
                display_errors_human(result);
                if files_checked == 0 {
                    println!("No files checked [{elapsed:?}]");
                } else if files_with_errors == 0 {
                    println!(
                        "{files_checked} files checked: all OK! \
                        ({translations} translations, {duplicates} duplicates) [{elapsed:?}]"
                    );
                } else {
                    println!(
                        "{files_checked} files checked: \
                        {files_with_errors} files with errors [{elapsed:?}]"
                    );
                }
            }
            OutputFormat::Json => display_result_json(result),
        }
    }
    i32::from(files_with_errors > 0)
}
