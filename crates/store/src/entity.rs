// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::BTreeSet;
use std::fmt;

use crate::mol_data::MolData;

/// The closed set of entity kinds the store knows how to size and query.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Atom,
    Residue,
}

impl EntityKind {
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Atom => "Atom",
            EntityKind::Residue => "Residue",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Index into a trajectory's frame sequence. `None` means "topology only, no coordinates".
pub type Frame = usize;

/// Zero-sized marker distinguishing `Aggregate<AtomKind>`/`Selection<AtomKind>` from their
/// `Residue` counterparts at compile time, so the evaluator and spatial/bond code never need to
/// match on a runtime kind tag (the two never-changes-at-runtime operations that do differ per
/// kind live here instead of in a generic hierarchy).
pub trait Kind: Copy + Eq + std::hash::Hash + 'static {
    const KIND: EntityKind;

    /// The atom indices an entity of this kind "covers" for coordinate access: just itself for
    /// an atom, its residue's member atoms (per `residue_id`) for a residue.
    fn atom_indices(index: usize, store: &MolData) -> Vec<usize>;

    /// Projects a set of atom indices onto this kind -- identity for `Atom`, `residue_id`
    /// lookup (deduplicated, unassigned atoms dropped) for `Residue`. Used both for
    /// `Selection::bonded()`'s closure projection and for atom->this-kind cross-projection.
    fn from_atoms(atoms: BTreeSet<usize>, store: &MolData) -> BTreeSet<usize>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AtomKind;

impl Kind for AtomKind {
    const KIND: EntityKind = EntityKind::Atom;

    fn atom_indices(index: usize, _store: &MolData) -> Vec<usize> {
        vec![index]
    }

    fn from_atoms(atoms: BTreeSet<usize>, _store: &MolData) -> BTreeSet<usize> {
        atoms
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ResidueKind;

impl Kind for ResidueKind {
    const KIND: EntityKind = EntityKind::Residue;

    fn atom_indices(index: usize, store: &MolData) -> Vec<usize> {
        store.residue_atoms(index)
    }

    fn from_atoms(atoms: BTreeSet<usize>, store: &MolData) -> BTreeSet<usize> {
        atoms
            .into_iter()
            .filter_map(|a| store.residue_id_of_atom(a))
            .filter(|&r| r >= 0)
            .map(|r| r as usize)
            .collect()
    }
}
