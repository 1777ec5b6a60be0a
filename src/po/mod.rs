// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! PO text parser and serializer.

pub mod error;
pub mod escape;
pub mod file;
pub mod parser;
pub mod serializer;
pub mod translation;
