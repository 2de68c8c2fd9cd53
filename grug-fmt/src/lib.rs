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

//! Dumper, applier, and directory walker turning `.grug` source files
//! into their JSON AST representation and back.

mod apply;
mod dump;
mod schema;
mod walker;

pub use apply::apply_file;
pub use dump::dump_file;
pub use schema::EXTENSION;
pub use walker::{apply_tree, dump_tree, TreeOptions};
