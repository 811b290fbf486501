// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use common::{MolError, Result};

use crate::bond_graph::BondGraph;
use crate::entity::{EntityKind, Frame};
use crate::property::{Column, PropertyName, PropertyType};
use crate::property_container::PropertyContainer;

/// The store: a property container plus a bond graph, sharing one atom count. Everything else
/// in this crate (aggregates, selections) borrows from a `MolData` and must not outlive it --
/// expressed here as an ordinary Rust lifetime rather than documentation discipline.
pub struct MolData {
    properties: PropertyContainer,
    bonds: BondGraph,
}

impl MolData {
    pub fn new(num_atoms: usize) -> Self {
        Self {
            properties: PropertyContainer::new(num_atoms),
            bonds: BondGraph::new(num_atoms),
        }
    }

    pub fn properties(&self) -> &PropertyContainer {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertyContainer {
        &mut self.properties
    }

    pub fn bonds(&self) -> &BondGraph {
        &self.bonds
    }

    pub fn bonds_mut(&mut self) -> &mut BondGraph {
        &mut self.bonds
    }

    pub fn register_kind(&mut self, kind: EntityKind, size: usize) {
        self.properties.register_kind(kind, size);
    }

    pub fn size_of_kind(&self, kind: EntityKind) -> Result<usize> {
        self.properties.size_of_kind(kind)
    }

    /// Resizing the `Atom` kind also resizes the bond graph's node set so the two invariants
    /// (`property.size == N_kind`, `bond graph node range == [0, N_Atom)`) never drift apart.
    pub fn resize_kind(&mut self, kind: EntityKind, n: usize) -> Result<()> {
        log::debug!("resizing {kind} to {n}");
        self.properties.resize_kind(kind, n)?;
        if kind == EntityKind::Atom {
            self.bonds.resize(n);
        }
        Ok(())
    }

    pub fn add_property(
        &mut self,
        kind: EntityKind,
        name: PropertyName,
        prop_type: PropertyType,
        time_based: bool,
    ) -> Result<()> {
        self.properties.add_property(kind, name, prop_type, time_based)
    }

    pub fn property_at(&self, kind: EntityKind, name: &PropertyName, frame: Option<Frame>) -> Option<&Column> {
        self.properties.property_at(kind, name, frame)
    }

    pub fn property_at_mut(
        &mut self,
        kind: EntityKind,
        name: &PropertyName,
        frame: Option<Frame>,
    ) -> Option<&mut Column> {
        self.properties.property_at_mut(kind, name, frame)
    }

    pub fn add_frame(&mut self) -> Frame {
        self.properties.add_frame()
    }

    pub fn remove_frame(&mut self, frame: Frame) {
        self.properties.remove_frame(frame);
    }

    pub fn num_frames(&self) -> usize {
        self.properties.num_frames()
    }

    pub fn check_frame(&self, frame: Option<Frame>) -> Result<Option<Frame>> {
        match frame {
            None => Ok(None),
            Some(f) if f < self.num_frames() => Ok(Some(f)),
            Some(f) => Err(MolError::frame_bounds(f, self.num_frames())),
        }
    }

    /// Ensures the `ResId` property exists, initialising every atom to `-1` (unassigned) the
    /// first time it is registered -- `Column::new`'s generic zero-default would otherwise read
    /// as "assigned to residue 0", which breaks the unassigned-is-`-1` invariant.
    fn ensure_resid_property(&mut self) -> Result<()> {
        if self.properties.has_property(EntityKind::Atom, &PropertyName::ResId) {
            return Ok(());
        }
        self.properties
            .add_property(EntityKind::Atom, PropertyName::ResId, PropertyType::Int, false)?;
        let n_atoms = self.size_of_kind(EntityKind::Atom)?;
        let column = self
            .properties
            .property_at_mut(EntityKind::Atom, &PropertyName::ResId, None)
            .expect("just registered");
        for atom in 0..n_atoms {
            column.set_int(atom, -1);
        }
        Ok(())
    }

    /// Assigns `atom` to `residue`, validating that `residue` is a live `Residue` index.
    /// `residue_atoms` is derived on demand from this property rather than maintained as a
    /// parallel index, so the two sides of the invariant can never drift out of sync.
    pub fn assign_atom_to_residue(&mut self, atom: usize, residue: usize) -> Result<()> {
        let n_residues = self.size_of_kind(EntityKind::Residue)?;
        if residue >= n_residues {
            return Err(MolError::bounds(residue, n_residues));
        }
        let n_atoms = self.size_of_kind(EntityKind::Atom)?;
        if atom >= n_atoms {
            return Err(MolError::bounds(atom, n_atoms));
        }
        self.ensure_resid_property()?;
        self.properties
            .property_at_mut(EntityKind::Atom, &PropertyName::ResId, None)
            .expect("just registered")
            .set_int(atom, residue as i32);
        Ok(())
    }

    pub fn unassign_atom_residue(&mut self, atom: usize) -> Result<()> {
        let n_atoms = self.size_of_kind(EntityKind::Atom)?;
        if atom >= n_atoms {
            return Err(MolError::bounds(atom, n_atoms));
        }
        self.ensure_resid_property()?;
        self.properties
            .property_at_mut(EntityKind::Atom, &PropertyName::ResId, None)
            .expect("just registered")
            .set_int(atom, -1);
        Ok(())
    }

    /// Every atom index whose `residue_id` equals `residue`. O(N_Atom); acceptable for this
    /// crate's scale and keeps the invariant trivially correct since there is only ever one
    /// source of truth for residue membership.
    pub fn residue_atoms(&self, residue: usize) -> Vec<usize> {
        match self.properties.property_at(EntityKind::Atom, &PropertyName::ResId, None) {
            Some(Column::Int(ids)) => ids
                .iter()
                .enumerate()
                .filter(|(_, &r)| r == residue as i32)
                .map(|(i, _)| i)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// `None` for an atom with no property registered or no assigned residue (`-1`).
    pub fn residue_id_of_atom(&self, atom: usize) -> Option<i32> {
        match self.properties.property_at(EntityKind::Atom, &PropertyName::ResId, None)?.get_int(atom)? {
            -1 => None,
            id => Some(id),
        }
    }
}
