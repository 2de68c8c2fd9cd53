// Copyright (C) 2023-2026 The Grug Team.
// This file is part of the grug library.

// The grug library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The grug library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the grug library. If not, see <https://www.gnu.org/licenses/>.

//! Source text → JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use grug_errors::{Error, Result};

/// Parses `source` into an AST, then dumps it to `output_path` as the
/// canonical JSON array of global statements, terminated by a newline.
pub fn dump_file(source_path: &Path, output_path: &Path) -> Result<()> {
    let source = std::fs::read_to_string(source_path).map_err(|e| Error::io("reading", source_path, e))?;
    let file = grug_parser::parse(&source)?;
    write_json(&file, output_path)
}

pub(crate) fn write_json<T: serde::Serialize>(value: &T, output_path: &Path) -> Result<()> {
    let out = File::create(output_path).map_err(|e| Error::io("creating", output_path, e))?;
    let mut writer = BufWriter::new(out);
    serde_json::to_writer(&mut writer, value)?;
    writer.write_all(b"\n").map_err(|e| Error::io("writing", output_path, e))?;
    writer.flush().map_err(|e| Error::io("writing", output_path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_on_fn_dumps_without_statements_key() {
        let dir = tempfile::tempdir().unwrap();
        let source_path = dir.path().join("a.grug");
        let output_path = dir.path().join("a.json");
        std::fs::write(&source_path, "on_init() {\n}\n").unwrap();

        dump_file(&source_path, &output_path).unwrap();

        let dumped = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(dumped, "[{\"type\":\"GLOBAL_ON_FN\",\"name\":\"on_init\"}]\n");
    }
}
