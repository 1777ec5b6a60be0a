// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration file.

use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use serde::Deserialize;

use crate::{args::OutputFormat, error::Error};

/// Name of the configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "potext.toml";

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Encoding label of PO files (default: UTF-8).
    pub encoding: Option<String>,
    /// Default output format of `check` and `dump` commands.
    pub output: OutputFormat,
}

impl Config {
    /// Load the configuration from the given file, or from `potext.toml` if it exists.
    ///
    /// A missing default file gives the default configuration; a missing file
    /// given explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    tracing::debug!("no configuration file");
                    return Ok(Self::default());
                }
                default
            }
        };
        tracing::debug!("loading configuration from {}", path.display());
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        toml::from_str(&content).map_err(|source| Error::Config { path, source })
    }

    /// Return the encoding to use: the one given on command line, then the
    /// one in configuration, then UTF-8.
    pub fn encoding(&self, arg: Option<&str>) -> Result<&'static Encoding, Error> {
        match arg.or(self.encoding.as_deref()) {
            Some(label) => Encoding::for_label(label.trim().as_bytes())
                .ok_or_else(|| Error::Encoding(label.to_string())),
            None => Ok(encoding_rs::UTF_8),
        }
    }

    /// Return the output format: the one given on command line, or the one in configuration.
    pub fn output(&self, arg: Option<OutputFormat>) -> OutputFormat {
        arg.unwrap_or(self.output)
    }
}
