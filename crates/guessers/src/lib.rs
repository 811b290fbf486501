// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Bond guessers: fill in missing topology from geometry (element-distance rule) or from
//! tabulated per-residue templates. Both take explicit atom/residue index slices rather than a
//! `selection::Selection` so this crate can sit below `selection` in the dependency graph --
//! callers pass `selection.atom_indices()` (or any other index set) straight through.

use std::collections::HashMap;

use periodic_table::PeriodicTable;
use residue_table::ResidueTable;
use spatial::SpatialIndex;
use store::{Bond, EntityKind, Frame, MolData, PropertyName};

const MAX_BOND_LENGTH: f32 = 3.0;
const BOND_LENGTH_PADDING: f32 = 0.1;
const MIN_BOND_DISTANCE_SQ: f32 = 0.16;
const VDW_BOND_MARGIN: f32 = 0.4;

/// Infers bonds from interatomic distance and covalent radii (Zhang et al., DOI
/// 10.1186/1758-2946-4-26). No-ops if `AtomicNumber` or `Position` are not registered. Atoms
/// whose atomic number is unknown, or whose covalent radius is unmeasured in `table`, never
/// produce a bond.
pub fn guess_distance_bonds(store: &mut MolData, frame: Frame, atoms: &[usize], table: &PeriodicTable) {
    let Some(atomic_col) = store.property_at(EntityKind::Atom, &PropertyName::AtomicNumber, None) else {
        return;
    };
    let atomic_numbers: Vec<Option<u8>> = atoms
        .iter()
        .map(|&i| atomic_col.get_int(i).map(|z| z as u8))
        .collect();

    let Some(position_col) = store.property_at(EntityKind::Atom, &PropertyName::Position, Some(frame)) else {
        return;
    };
    let Some(points): Option<Vec<_>> = atoms.iter().map(|&i| position_col.get_vec3(i)).collect() else {
        return;
    };

    let index = SpatialIndex::new(&points, MAX_BOND_LENGTH + BOND_LENGTH_PADDING);
    let mut to_bond = Vec::new();
    for (pi, pj, d2) in index.pairs(MAX_BOND_LENGTH) {
        let (Some(z1), Some(z2)) = (atomic_numbers[pi], atomic_numbers[pj]) else {
            continue;
        };
        let (Some(r1), Some(r2)) = (table.covalent_radius(z1), table.covalent_radius(z2)) else {
            continue;
        };
        let cutoff = r1 + r2 + VDW_BOND_MARGIN;
        if d2 > MIN_BOND_DISTANCE_SQ && d2 <= cutoff * cutoff {
            to_bond.push((atoms[pi], atoms[pj]));
        }
    }

    log::debug!("distance guesser adding {} bonds", to_bond.len());
    for (i, j) in to_bond {
        store.bonds_mut().ensure_edge(i, j, Bond::guessed(1));
    }
}

/// Infers bonds within each residue from a tabulated per-residue-name template. Residues whose
/// name is not in `table` are skipped. Existing bonds keep their topology flag; only a missing
/// (`order <= 0`) order is filled in, and the aromatic flag is always (re)applied from the
/// template.
pub fn guess_residue_bonds(store: &mut MolData, residues: &[usize], table: &ResidueTable) {
    for &residue in residues {
        let resname = store
            .property_at(EntityKind::Residue, &PropertyName::ResName, None)
            .and_then(|c| c.get_str(residue))
            .map(str::to_owned);
        let Some(resname) = resname else { continue };
        let Some(template) = table.get(&resname) else {
            log::debug!("no residue template for {resname}, skipping");
            continue;
        };

        let atom_indices = store.residue_atoms(residue);
        let mut atom_by_name: HashMap<&'static str, usize> = HashMap::new();
        {
            let name_col = store.property_at(EntityKind::Atom, &PropertyName::Name, None);
            for &atom in &atom_indices {
                let Some(name) = name_col.and_then(|c| c.get_str(atom)) else {
                    continue;
                };
                if let Some(template_index) = template.atom_index(name) {
                    atom_by_name.insert(template.atoms[template_index], atom);
                }
            }
        }

        for bond_info in template.bonds {
            let (Some(&atom1), Some(&atom2)) =
                (atom_by_name.get(bond_info.atom1), atom_by_name.get(bond_info.atom2))
            else {
                continue;
            };

            match store.bonds().find_edge(atom1, atom2) {
                Some(id) => {
                    let bond = store.bonds_mut().bond_mut(id).expect("edge just looked up");
                    if bond.order == 0 {
                        bond.order = bond_info.order;
                        bond.guessed_order = true;
                    }
                    bond.aromatic = bond_info.aromatic;
                }
                None => {
                    let mut bond = Bond::guessed(bond_info.order);
                    bond.aromatic = bond_info.aromatic;
                    store.bonds_mut().add_edge(atom1, atom2, bond);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::PropertyType;
    use ultraviolet::Vec3;

    fn diatomic_carbon(distance: f32) -> MolData {
        let mut m = MolData::new(2);
        m.add_property(EntityKind::Atom, PropertyName::AtomicNumber, PropertyType::Int, false)
            .unwrap();
        m.add_property(EntityKind::Atom, PropertyName::Position, PropertyType::Vec3, true)
            .unwrap();
        m.add_frame();
        {
            let col = m
                .property_at_mut(EntityKind::Atom, &PropertyName::AtomicNumber, None)
                .unwrap();
            col.set_int(0, 6);
            col.set_int(1, 6);
        }
        {
            let col = m
                .property_at_mut(EntityKind::Atom, &PropertyName::Position, Some(0))
                .unwrap();
            col.set_vec3(0, Vec3::zero());
            col.set_vec3(1, Vec3::new(distance, 0.0, 0.0));
        }
        m
    }

    #[test]
    fn bonds_carbons_at_covalent_distance() {
        let mut m = diatomic_carbon(1.5);
        guess_distance_bonds(&mut m, 0, &[0, 1], &PeriodicTable::new());
        assert!(m.bonds().find_edge(0, 1).is_some());
    }

    #[test]
    fn does_not_bond_distant_carbons() {
        let mut m = diatomic_carbon(2.9);
        guess_distance_bonds(&mut m, 0, &[0, 1], &PeriodicTable::new());
        assert!(m.bonds().find_edge(0, 1).is_none());
    }

    #[test]
    fn missing_atomic_number_is_a_noop() {
        let mut m = MolData::new(2);
        m.add_property(EntityKind::Atom, PropertyName::Position, PropertyType::Vec3, true)
            .unwrap();
        m.add_frame();
        guess_distance_bonds(&mut m, 0, &[0, 1], &PeriodicTable::new());
        assert!(m.bonds().find_edge(0, 1).is_none());
    }

    #[test]
    fn distance_guesser_is_idempotent() {
        let mut m = diatomic_carbon(1.5);
        let table = PeriodicTable::new();
        guess_distance_bonds(&mut m, 0, &[0, 1], &table);
        guess_distance_bonds(&mut m, 0, &[0, 1], &table);
        let (id, bond) = m.bonds().edge(0, 1).unwrap();
        assert_eq!(bond.order, 1);
        assert!(m.bonds().bond(id).is_some());
    }

    fn alanine() -> (MolData, Vec<usize>) {
        let names = ["N", "CA", "C", "O", "CB"];
        let mut m = MolData::new(names.len());
        m.register_kind(EntityKind::Residue, 1);
        m.add_property(EntityKind::Atom, PropertyName::Name, PropertyType::Str, false)
            .unwrap();
        m.add_property(EntityKind::Residue, PropertyName::ResName, PropertyType::Str, false)
            .unwrap();
        {
            let col = m.property_at_mut(EntityKind::Atom, &PropertyName::Name, None).unwrap();
            for (i, name) in names.iter().enumerate() {
                col.set_str(i, *name);
            }
        }
        m.property_at_mut(EntityKind::Residue, &PropertyName::ResName, None)
            .unwrap()
            .set_str(0, "ALA");
        for i in 0..names.len() {
            m.assign_atom_to_residue(i, 0).unwrap();
        }
        (m, vec![0])
    }

    #[test]
    fn residue_guesser_bonds_backbone_and_cb() {
        let (mut m, residues) = alanine();
        guess_residue_bonds(&mut m, &residues, &ResidueTable::new());
        assert!(m.bonds().find_edge(0, 1).is_some()); // N-CA
        assert!(m.bonds().find_edge(1, 2).is_some()); // CA-C
        assert!(m.bonds().find_edge(2, 3).is_some()); // C-O
        assert!(m.bonds().find_edge(1, 4).is_some()); // CA-CB
    }

    #[test]
    fn residue_guesser_fills_missing_order_but_keeps_topology_flag() {
        let (mut m, residues) = alanine();
        let id = m.bonds_mut().add_edge(0, 1, Bond::new()).unwrap();
        guess_residue_bonds(&mut m, &residues, &ResidueTable::new());
        let bond = m.bonds().bond(id).unwrap();
        assert_eq!(bond.order, 1);
        assert!(!bond.guessed_topology);
        assert!(bond.guessed_order);
    }

    #[test]
    fn unknown_residue_name_is_skipped() {
        let (mut m, residues) = alanine();
        m.property_at_mut(EntityKind::Residue, &PropertyName::ResName, None)
            .unwrap()
            .set_str(0, "ZZZ");
        guess_residue_bonds(&mut m, &residues, &ResidueTable::new());
        assert!(m.bonds().find_edge(0, 1).is_none());
    }
}
