// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The molecular data store: a columnar, per-entity-kind, per-frame property container plus an
//! undirected bond graph, and the single-entity cursors ("aggregates") that borrow into it.

mod aggregate;
mod bond_graph;
mod entity;
mod mol_data;
mod property;
mod property_container;

pub use aggregate::{Aggregate, AtomAggregate, ResidueAggregate};
pub use bond_graph::{Bond, BondGraph, BondOrder};
pub use entity::{AtomKind, EntityKind, Frame, Kind, ResidueKind};
pub use mol_data::MolData;
pub use property::{Column, PropertyName, PropertyType};
