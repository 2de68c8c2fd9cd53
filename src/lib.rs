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

//! Public entry point for the grug AST serializer.
//!
//! Re-exports the four operations `grug-fmt` implements: dumping a
//! single source file or a whole directory tree to JSON, and applying
//! either shape back to source text.

pub use grug_fmt::{apply_file, apply_tree, dump_file, dump_tree, TreeOptions};
