// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::number::{SelNumber, SelNumberRange};

/// The numeric atom property a `NumProp` node tests.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NumPropKind {
    ResId,
    Index,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NumSpec {
    Number(SelNumber),
    Range(SelNumberRange),
}

/// A parsed selection predicate tree. Never evaluated recursively -- `crate::evaluator` walks it
/// with an explicit stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    All,
    NumProp(NumPropKind, Vec<NumSpec>),
    Not(Box<Node>),
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
}
