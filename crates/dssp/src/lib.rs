// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! DSSP-style protein secondary-structure classification: prepares per-residue backbone records,
//! computes CHARMM-style hydrogen-bond energies, then runs the bridge/ladder/sheet and helix/turn
//! passes over them to produce a 9-state classification per residue.

mod hbond;
mod helices;
mod residue;
mod sheets;

use common::{MolError, Result};
use store::{EntityKind, Frame, MolData, PropertyName};
use ultraviolet::Vec3;

use residue::BackboneResidue;

/// Per-residue secondary-structure state. Non-amino-acid residues (missing any backbone atom)
/// are always `Unknown`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SecondaryStructure {
    Unknown,
    Loop,
    Helix,
    Bridge,
    Strand,
    Helix3,
    Helix5,
    Turn,
    Bend,
}

/// Holds the store's residues in backbone-prepared form so that `run` can be called once per
/// frame without re-scanning atom names and residue membership each time.
pub struct Dssp<'a> {
    store: &'a MolData,
    residue_indices: Vec<usize>,
}

impl<'a> Dssp<'a> {
    pub fn new(store: &'a MolData) -> Result<Self> {
        let n_residues = store.size_of_kind(EntityKind::Residue)?;
        Ok(Self {
            store,
            residue_indices: (0..n_residues).collect(),
        })
    }

    /// Classifies every residue's secondary structure at `frame`. Idempotent: repeated calls with
    /// the same frame and unchanged store contents produce identical results.
    pub fn run(&self, frame: Frame, prefer_pi_helices: bool) -> Result<Vec<SecondaryStructure>> {
        self.store.check_frame(Some(frame))?;
        log::debug!("classifying secondary structure for {} residues at frame {frame}", self.residue_indices.len());

        let mut backbone: Vec<Option<BackboneResidue>> = Vec::with_capacity(self.residue_indices.len());
        for &residue in &self.residue_indices {
            backbone.push(prepare_backbone(self.store, residue, frame)?);
        }

        let mut chain: Vec<usize> = Vec::new();
        let mut mapped: Vec<BackboneResidue> = Vec::new();
        for (slot, entry) in backbone.into_iter().enumerate() {
            if let Some(mut residue) = entry {
                if let Some(&previous) = chain.last() {
                    let previous_residue = &mapped[previous];
                    residue.link_after(previous_residue);
                }
                chain.push(slot);
                mapped.push(residue);
            }
        }

        hbond::compute_h_bond_energies(&mut mapped);
        sheets::compute_sheets(&mut mapped);
        helices::compute_helices(&mut mapped, prefer_pi_helices);

        let mut structures = vec![SecondaryStructure::Unknown; self.residue_indices.len()];
        for (mapped_index, &slot) in chain.iter().enumerate() {
            structures[slot] = mapped[mapped_index].structure;
        }
        Ok(structures)
    }
}

/// Locates N/Cα/C/O by atom name within `residue`'s member atoms and reads its chain id and
/// proline flag. Returns `None` (not an error) when any backbone atom is missing -- such a
/// residue is simply not amino-acid-like.
fn prepare_backbone(store: &MolData, residue: usize, frame: Frame) -> Result<Option<BackboneResidue>> {
    let atoms = store.residue_atoms(residue);
    if atoms.is_empty() {
        return Ok(None);
    }

    let name_column = store
        .property_at(EntityKind::Atom, &PropertyName::Name, None)
        .ok_or_else(|| MolError::invariant("Name property not registered"))?;
    let position_column = store
        .property_at(EntityKind::Atom, &PropertyName::Position, Some(frame))
        .ok_or_else(|| MolError::invariant("Position property not registered"))?;

    let mut n = None;
    let mut ca = None;
    let mut c = None;
    let mut o = None;
    for &atom in &atoms {
        let Some(name) = name_column.get_str(atom) else { continue };
        let Some(pos) = position_column.get_vec3(atom) else { continue };
        match name {
            "N" => n = Some(pos),
            "CA" => ca = Some(pos),
            "C" => c = Some(pos),
            "O" => o = Some(pos),
            _ => {}
        }
    }

    let (Some(n), Some(ca), Some(c), Some(o)) = (n, ca, c, o) else {
        log::trace!("residue {residue} missing a backbone atom, treating as non-amino-acid");
        return Ok(None);
    };

    let resname = store
        .property_at(EntityKind::Atom, &PropertyName::ResName, None)
        .and_then(|col| col.get_str(atoms[0]))
        .unwrap_or("");
    let chain_id = store
        .property_at(EntityKind::Atom, &PropertyName::Chain, None)
        .and_then(|col| col.get_str(atoms[0]))
        .unwrap_or("")
        .to_string();

    Ok(Some(BackboneResidue::new(chain_id, resname == "PRO", n, ca, c, o)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::PropertyType;

    fn add_backbone_atom(
        store: &mut MolData,
        atom: usize,
        frame: Frame,
        name: &str,
        resname: &str,
        chain: &str,
        pos: Vec3,
    ) {
        store
            .property_at_mut(EntityKind::Atom, &PropertyName::Name, None)
            .unwrap()
            .set_str(atom, name);
        store
            .property_at_mut(EntityKind::Atom, &PropertyName::ResName, None)
            .unwrap()
            .set_str(atom, resname);
        store
            .property_at_mut(EntityKind::Atom, &PropertyName::Chain, None)
            .unwrap()
            .set_str(atom, chain);
        store
            .property_at_mut(EntityKind::Atom, &PropertyName::Position, Some(frame))
            .unwrap()
            .set_vec3(atom, pos);
    }

    /// Builds a short straight-backbone chain: not enough to form any bonded secondary
    /// structure, but enough to exercise preparation, chain linkage and idempotency.
    fn straight_chain(n_residues: usize) -> MolData {
        let n_atoms = n_residues * 4;
        let mut store = MolData::new(n_atoms);
        store.register_kind(EntityKind::Residue, n_residues);
        store.add_property(EntityKind::Atom, PropertyName::Name, PropertyType::Str, false).unwrap();
        store.add_property(EntityKind::Atom, PropertyName::ResName, PropertyType::Str, false).unwrap();
        store.add_property(EntityKind::Atom, PropertyName::Chain, PropertyType::Str, false).unwrap();
        store.add_property(EntityKind::Atom, PropertyName::Position, PropertyType::Vec3, true).unwrap();
        store.add_frame();

        for r in 0..n_residues {
            let base = r as f32 * 3.8;
            let atom_base = r * 4;
            for (offset, name) in ["N", "CA", "C", "O"].iter().enumerate() {
                let atom = atom_base + offset;
                store.assign_atom_to_residue(atom, r).unwrap();
                let pos = Vec3::new(base + offset as f32 * 0.3, 0.0, 0.0);
                add_backbone_atom(&mut store, atom, 0, name, "ALA", "A", pos);
            }
        }
        store
    }

    #[test]
    fn incomplete_backbone_is_unknown() {
        let mut store = MolData::new(2);
        store.register_kind(EntityKind::Residue, 1);
        store.add_property(EntityKind::Atom, PropertyName::Name, PropertyType::Str, false).unwrap();
        store.add_property(EntityKind::Atom, PropertyName::Position, PropertyType::Vec3, true).unwrap();
        store.add_frame();
        store.assign_atom_to_residue(0, 0).unwrap();
        store
            .property_at_mut(EntityKind::Atom, &PropertyName::Name, None)
            .unwrap()
            .set_str(0, "CA");

        let dssp = Dssp::new(&store).unwrap();
        let result = dssp.run(0, true).unwrap();
        assert_eq!(result, vec![SecondaryStructure::Unknown]);
    }

    #[test]
    fn run_is_idempotent() {
        let store = straight_chain(6);
        let dssp = Dssp::new(&store).unwrap();
        let first = dssp.run(0, true).unwrap();
        let second = dssp.run(0, true).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_frame_is_rejected() {
        let store = straight_chain(2);
        let dssp = Dssp::new(&store).unwrap();
        assert!(dssp.run(5, true).is_err());
    }

    #[test]
    fn straight_backbone_with_no_hydrogen_bonds_is_loop() {
        let store = straight_chain(4);
        let dssp = Dssp::new(&store).unwrap();
        let result = dssp.run(0, true).unwrap();
        assert!(result.iter().all(|s| *s == SecondaryStructure::Loop || *s == SecondaryStructure::Bend));
    }
}
