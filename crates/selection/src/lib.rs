// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The selection query language: a PEG grammar (`grammar`) compiling expressions like
//! `resid 10:20 and not index 5` into a `Node` tree (`ast`), a stack-machine `evaluator`, and the
//! `Selection` view type that carries an evaluated result around as a typed, sorted-unique index
//! set borrowed from a store.

mod ast;
mod evaluator;
mod grammar;
mod number;
mod selection;

pub use ast::{NumPropKind, NumSpec, Node};
pub use evaluator::evaluate;
pub use grammar::parse;
pub use number::{SelNumber, SelNumberRange};
pub use selection::{AtomSelection, ResidueSelection, Selection};
