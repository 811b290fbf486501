// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::BTreeSet;
use std::marker::PhantomData;

use common::{MolError, Result};
use graph::EdgeId;
use store::{Aggregate, AtomKind, EntityKind, Frame, Kind, MolData, PropertyName, ResidueKind};
use ultraviolet::Vec3;

/// An aggregate over a set of indices of one entity kind: a sorted-unique index array, an
/// optional current frame, and a borrow of the store it was built from. The borrow is what
/// makes "must not outlive the store" a compile-time guarantee rather than a documented rule.
pub struct Selection<'a, K: Kind> {
    indices: Vec<usize>,
    frame: Option<Frame>,
    store: &'a MolData,
    _kind: PhantomData<K>,
}

pub type AtomSelection<'a> = Selection<'a, AtomKind>;
pub type ResidueSelection<'a> = Selection<'a, ResidueKind>;

impl<'a, K: Kind> Selection<'a, K> {
    /// All entities of this kind.
    pub fn all(store: &'a MolData, frame: Option<Frame>) -> Result<Self> {
        store.check_frame(frame)?;
        let n = store.size_of_kind(K::KIND)?;
        Ok(Self {
            indices: (0..n).collect(),
            frame,
            store,
            _kind: PhantomData,
        })
    }

    /// Duplicates collapsed, ordering canonicalised.
    pub fn from_indices(store: &'a MolData, indices: impl IntoIterator<Item = usize>, frame: Option<Frame>) -> Result<Self> {
        store.check_frame(frame)?;
        let mut indices: Vec<usize> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        Ok(Self {
            indices,
            frame,
            store,
            _kind: PhantomData,
        })
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn frame(&self) -> Option<Frame> {
        self.frame
    }

    /// O(log n).
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = Aggregate<'a, K>> + '_ {
        self.indices
            .iter()
            .map(move |&i| Aggregate::new(self.store, i, self.frame).expect("frame already validated"))
    }

    /// This selection's atom-index expansion (itself, for an atom selection; the union of
    /// member atoms, for a residue selection), deduplicated and sorted.
    pub fn atom_indices(&self) -> Vec<usize> {
        let set: BTreeSet<usize> = self
            .indices
            .iter()
            .flat_map(|&i| K::atom_indices(i, self.store))
            .collect();
        set.into_iter().collect()
    }

    /// Strided view of the current frame's `Position` column over this selection's atoms.
    pub fn coords(&self) -> Result<Vec<Vec3>> {
        let frame = self
            .frame
            .ok_or_else(|| MolError::invariant("selection has no frame set"))?;
        let column = self
            .store
            .property_at(EntityKind::Atom, &PropertyName::Position, Some(frame))
            .ok_or_else(|| MolError::invariant("Position property not registered"))?;
        Ok(self.atom_indices().into_iter().filter_map(|i| column.get_vec3(i)).collect())
    }

    /// A new selection of the same kind whose atom set is the one-hop bonded closure of this
    /// selection's atoms, projected back through `K::from_atoms`.
    pub fn bonded(&self) -> Result<Self> {
        let atoms = self.atom_indices();
        let closure = self.store.bonds().bonded_closure(&atoms);
        let projected = K::from_atoms(closure, self.store);
        Self::from_indices(self.store, projected, self.frame)
    }

    /// Deduplicated set of bond edges incident to this selection's atoms.
    pub fn bonds(&self) -> BTreeSet<EdgeId> {
        self.store.bonds().collect_edges(&self.atom_indices())
    }

    pub fn as_atoms(&self) -> Result<Selection<'a, AtomKind>> {
        Selection::from_indices(self.store, self.atom_indices(), self.frame)
    }

    pub fn as_residues(&self) -> Result<Selection<'a, ResidueKind>> {
        let atoms: BTreeSet<usize> = self.atom_indices().into_iter().collect();
        let residues = ResidueKind::from_atoms(atoms, self.store);
        Selection::from_indices(self.store, residues, self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::PropertyType;

    fn linear_chain(n: usize) -> MolData {
        let mut m = MolData::new(n);
        for i in 0..n.saturating_sub(1) {
            m.bonds_mut().add_edge(i, i + 1, store::Bond::new());
        }
        m
    }

    #[test]
    fn all_covers_every_atom() {
        let m = linear_chain(3);
        let sel = AtomSelection::all(&m, None).unwrap();
        assert_eq!(sel.indices(), &[0, 1, 2]);
    }

    #[test]
    fn from_indices_dedupes_and_sorts() {
        let m = linear_chain(5);
        let sel = AtomSelection::from_indices(&m, [3, 1, 1, 0], None).unwrap();
        assert_eq!(sel.indices(), &[0, 1, 3]);
    }

    #[test]
    fn bonded_grows_by_one_hop() {
        let m = linear_chain(5);
        let sel = AtomSelection::from_indices(&m, [2], None).unwrap();
        let grown = sel.bonded().unwrap();
        assert_eq!(grown.indices(), &[1, 2, 3]);
    }

    #[test]
    fn residue_cross_projection_uses_residue_id() {
        let mut m = MolData::new(4);
        m.register_kind(EntityKind::Residue, 2);
        m.assign_atom_to_residue(0, 0).unwrap();
        m.assign_atom_to_residue(1, 0).unwrap();
        m.assign_atom_to_residue(2, 1).unwrap();
        let atoms = AtomSelection::from_indices(&m, [0, 1, 2], None).unwrap();
        let residues = atoms.as_residues().unwrap();
        assert_eq!(residues.indices(), &[0, 1]);
    }

    #[test]
    fn coords_fails_without_frame() {
        let m = linear_chain(2);
        let sel = AtomSelection::all(&m, None).unwrap();
        assert!(sel.coords().is_err());
    }

    #[test]
    fn coords_uses_position_at_current_frame() {
        let mut m = MolData::new(2);
        m.add_property(EntityKind::Atom, PropertyName::Position, PropertyType::Vec3, true)
            .unwrap();
        m.add_frame();
        m.property_at_mut(EntityKind::Atom, &PropertyName::Position, Some(0))
            .unwrap()
            .set_vec3(1, Vec3::new(1.0, 1.0, 1.0));
        let sel = AtomSelection::all(&m, Some(0)).unwrap();
        let coords = sel.coords().unwrap();
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[1], Vec3::new(1.0, 1.0, 1.0));
    }
}
