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

//! Directory-tree variants of dump/apply.
//!
//! Tree JSON shape: `{"dirs": {name: tree}, "files": {filename: file-array}}`,
//! both fields omitted when empty (an empty directory dumps as `{}`).

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use grug_errors::{Error, Result};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::apply::render_file;
use crate::dump::write_json;
use crate::schema::{as_object, check_field_order, EXTENSION};

/// Options controlling directory-iteration order. Host order matches the
/// original implementation byte-for-byte; `sorted` trades that fidelity
/// for deterministic, cross-platform snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeOptions {
    pub sorted: bool,
}

pub fn dump_tree(source_dir: &Path, output_path: &Path, options: TreeOptions) -> Result<()> {
    let tree = dump_dir(source_dir, options)?;
    write_json(&tree, output_path)
}

fn dump_dir(dir: &Path, options: TreeOptions) -> Result<Value> {
    let mut entries: Vec<fs::DirEntry> =
        fs::read_dir(dir).map_err(|e| Error::io("reading directory", dir, e))?.collect::<std::io::Result<_>>().map_err(|e| Error::io("reading directory", dir, e))?;

    if options.sorted {
        entries.sort_by_key(|e| e.file_name());
    }

    let mut dirs = Map::new();
    let mut files = Map::new();

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io("reading", &path, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if file_type.is_dir() {
            debug!(dir = %path.display(), "descending into subdirectory");
            dirs.insert(name, dump_dir(&path, options)?);
        } else if file_type.is_file() {
            if path.extension().is_some_and(|ext| ext == EXTENSION) {
                debug!(file = %path.display(), "dumping source file");
                let source = fs::read_to_string(&path).map_err(|e| Error::io("reading", &path, e))?;
                let ast = grug_parser::parse(&source)?;
                files.insert(name, serde_json::to_value(&ast)?);
            } else {
                warn!(file = %path.display(), "skipping non-source file");
            }
        }
    }

    let mut tree = Map::new();
    if !dirs.is_empty() {
        tree.insert("dirs".to_string(), Value::Object(dirs));
    }
    if !files.is_empty() {
        tree.insert("files".to_string(), Value::Object(files));
    }
    Ok(Value::Object(tree))
}

pub fn apply_tree(json_path: &Path, output_dir: &Path) -> Result<()> {
    let text = fs::read_to_string(json_path).map_err(|e| Error::io("reading", json_path, e))?;
    let value: Value = serde_json::from_str(&text)?;
    apply_dir(&value, output_dir, "$")
}

fn apply_dir(value: &Value, dir: &Path, path: &str) -> Result<()> {
    let obj = as_object(value, path)?;
    check_field_order(obj, path, &[("dirs", false), ("files", false)], false)?;

    match fs::create_dir(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
        Err(e) => return Err(Error::io("creating directory", dir, e)),
    }

    if let Some(dirs) = obj.get("dirs") {
        let dirs = as_object(dirs, &format!("{path}.dirs"))?;
        for (name, subtree) in dirs {
            debug!(dir = %name, "recreating subdirectory");
            apply_dir(subtree, &dir.join(name), &format!("{path}.dirs.{name}"))?;
        }
    }

    if let Some(files) = obj.get("files") {
        let files = as_object(files, &format!("{path}.files"))?;
        for (name, file_value) in files {
            if !name.ends_with(&format!(".{EXTENSION}")) {
                warn!(file = %name, "skipping entry whose name lacks the source extension");
                continue;
            }
            debug!(file = %name, "applying source file");
            let rendered = render_file(file_value)?;
            let file_path = dir.join(name);
            fs::write(&file_path, rendered).map_err(|e| Error::io("writing", &file_path, e))?;
        }
    }

    Ok(())
}
