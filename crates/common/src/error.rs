// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Status values a reader collaborator may hand back from `open`/`read_next_timestep`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReaderStatus {
    Success,
    Invalid,
    WrongAtoms,
    End,
    Failed,
}

/// The single error kind exposed across the crate boundary.
///
/// Every fallible operation in the core returns `Result<T, MolError>`. Variants map onto the
/// five classes a caller needs to distinguish: bounds, structure, parse, reader, invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MolError {
    #[error("index {index} out of bounds (valid range is [0, {bound}))")]
    Bounds { index: usize, bound: usize },

    #[error("frame {frame} out of bounds (store has {num_frames} frames)")]
    FrameBounds { frame: usize, num_frames: usize },

    #[error("entity kind {kind} has not been registered")]
    UnregisteredKind { kind: &'static str },

    #[error("property {property} of kind {kind} has not been registered")]
    UnregisteredProperty {
        kind: &'static str,
        property: &'static str,
    },

    #[error("{message}\n{expression}\n{caret:>column$}")]
    Parse {
        message: String,
        expression: String,
        column: usize,
        caret: char,
    },

    #[error("reader reported {0:?}")]
    Reader(ReaderStatus),

    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl MolError {
    pub fn bounds(index: usize, bound: usize) -> Self {
        MolError::Bounds { index, bound }
    }

    pub fn frame_bounds(frame: usize, num_frames: usize) -> Self {
        MolError::FrameBounds { frame, num_frames }
    }

    pub fn unregistered_kind(kind: &'static str) -> Self {
        MolError::UnregisteredKind { kind }
    }

    pub fn unregistered_property(kind: &'static str, property: &'static str) -> Self {
        MolError::UnregisteredProperty { kind, property }
    }

    /// Builds a parse error whose `Display` reproduces the source expression with a `^` caret
    /// under the 1-based `column` where parsing failed.
    pub fn parse(message: impl Into<String>, expression: impl Into<String>, column: usize) -> Self {
        MolError::Parse {
            message: message.into(),
            expression: expression.into(),
            column: column.max(1),
            caret: '^',
        }
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        MolError::Invariant(message.into())
    }
}

pub type Result<T> = std::result::Result<T, MolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_renders_arrow_echo() {
        let err = MolError::parse("unexpected token", "resid 1 bnd 2", 9);
        let rendered = err.to_string();
        assert!(rendered.contains("resid 1 bnd 2"));
        assert!(rendered.lines().last().unwrap().ends_with('^'));
    }

    #[test]
    fn bounds_error_reports_index_and_bound() {
        let err = MolError::bounds(5, 3);
        assert_eq!(err.to_string(), "index 5 out of bounds (valid range is [0, 3))");
    }
}
