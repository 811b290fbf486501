// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::BTreeSet;
use std::marker::PhantomData;

use common::{MolError, Result};
use graph::EdgeId;
use ultraviolet::Vec3;

use crate::entity::{AtomKind, Frame, Kind, ResidueKind};
use crate::mol_data::MolData;
use crate::property::PropertyName;

/// A typed single-entity cursor: `(index, frame_or_none, store)`. Borrows the store it was built
/// from, so the borrow checker -- not documentation -- rejects any attempt to mutate the store
/// while an aggregate derived from it is still live.
pub struct Aggregate<'a, K: Kind> {
    index: usize,
    frame: Option<Frame>,
    store: &'a MolData,
    _kind: PhantomData<K>,
}

pub type AtomAggregate<'a> = Aggregate<'a, AtomKind>;
pub type ResidueAggregate<'a> = Aggregate<'a, ResidueKind>;

impl<'a, K: Kind> Aggregate<'a, K> {
    pub fn new(store: &'a MolData, index: usize, frame: Option<Frame>) -> Result<Self> {
        store.check_frame(frame)?;
        Ok(Self {
            index,
            frame,
            store,
            _kind: PhantomData,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn frame(&self) -> Option<Frame> {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Option<Frame>) -> Result<()> {
        self.store.check_frame(frame)?;
        self.frame = frame;
        Ok(())
    }

    pub fn store(&self) -> &'a MolData {
        self.store
    }

    pub fn get_int(&self, name: &PropertyName) -> Option<i32> {
        self.store.property_at(K::KIND, name, self.frame)?.get_int(self.index)
    }

    pub fn get_float(&self, name: &PropertyName) -> Option<f32> {
        self.store.property_at(K::KIND, name, self.frame)?.get_float(self.index)
    }

    pub fn get_vec3(&self, name: &PropertyName) -> Option<Vec3> {
        self.store.property_at(K::KIND, name, self.frame)?.get_vec3(self.index)
    }

    pub fn get_str(&self, name: &PropertyName) -> Option<String> {
        self.store
            .property_at(K::KIND, name, self.frame)?
            .get_str(self.index)
            .map(str::to_owned)
    }

    /// This entity's covering atom indices (itself, for an atom; its residue's members, for a
    /// residue), resolved through `K::atom_indices`.
    pub fn atom_indices(&self) -> Vec<usize> {
        K::atom_indices(self.index, self.store)
    }

    /// Current-frame positions of the covering atom set. Fails if the frame is `None`.
    pub fn coords(&self) -> Result<Vec<Vec3>> {
        let frame = self.frame.ok_or_else(|| MolError::invariant("aggregate has no frame set"))?;
        let column = self
            .store
            .property_at(crate::entity::EntityKind::Atom, &PropertyName::Position, Some(frame))
            .ok_or_else(|| MolError::invariant("Position property not registered"))?;
        Ok(self
            .atom_indices()
            .into_iter()
            .filter_map(|i| column.get_vec3(i))
            .collect())
    }

    /// Deduplicated set of bond edges incident to this entity's atom set.
    pub fn bonds(&self) -> BTreeSet<EdgeId> {
        self.store.bonds().collect_edges(&self.atom_indices())
    }
}

impl<'a> Aggregate<'a, AtomKind> {
    /// Convenience single-point accessor; `coords()` on an atom always has at most one element.
    pub fn position(&self) -> Result<Vec3> {
        self.coords()?
            .into_iter()
            .next()
            .ok_or_else(|| MolError::invariant("atom has no position"))
    }

    pub fn bonded_atoms(&self) -> Vec<usize> {
        self.store.bonds().neighbours(self.index)
    }
}

impl<'a, K: Kind> PartialEq for Aggregate<'a, K> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.frame == other.frame && std::ptr::eq(self.store, other.store)
    }
}

impl<'a, K: Kind> Eq for Aggregate<'a, K> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;
    use crate::property::PropertyType;

    fn store_with_positions() -> MolData {
        let mut m = MolData::new(2);
        m.add_property(EntityKind::Atom, PropertyName::Position, PropertyType::Vec3, true)
            .unwrap();
        m.add_frame();
        m.property_at_mut(EntityKind::Atom, &PropertyName::Position, Some(0))
            .unwrap()
            .set_vec3(1, Vec3::new(1.0, 2.0, 3.0));
        m
    }

    #[test]
    fn atom_position_reads_current_frame() {
        let m = store_with_positions();
        let a = AtomAggregate::new(&m, 1, Some(0)).unwrap();
        assert_eq!(a.position().unwrap(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn missing_frame_rejects_coords() {
        let m = store_with_positions();
        let a = AtomAggregate::new(&m, 0, None).unwrap();
        assert!(a.coords().is_err());
    }

    #[test]
    fn out_of_range_frame_rejected() {
        let m = store_with_positions();
        assert!(AtomAggregate::new(&m, 0, Some(7)).is_err());
    }

    #[test]
    fn equality_compares_full_triple() {
        let m = store_with_positions();
        let a = AtomAggregate::new(&m, 0, Some(0)).unwrap();
        let b = AtomAggregate::new(&m, 0, Some(0)).unwrap();
        let c = AtomAggregate::new(&m, 1, Some(0)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn residue_coords_cover_member_atoms() {
        let mut m = store_with_positions();
        m.register_kind(EntityKind::Residue, 1);
        m.assign_atom_to_residue(0, 0).unwrap();
        m.assign_atom_to_residue(1, 0).unwrap();
        let r = ResidueAggregate::new(&m, 0, Some(0)).unwrap();
        assert_eq!(r.coords().unwrap().len(), 2);
    }
}
