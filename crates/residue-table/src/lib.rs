// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Immutable standard-residue reference data: the expected atom names and template bonds of
//! common amino acids, consumed by the tabulated-residue bond guesser.

/// A bond between two atoms named within a single residue template.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TemplateBond {
    pub atom1: &'static str,
    pub atom2: &'static str,
    pub order: u8,
    pub aromatic: bool,
}

const fn bond(atom1: &'static str, atom2: &'static str, order: u8, aromatic: bool) -> TemplateBond {
    TemplateBond {
        atom1,
        atom2,
        order,
        aromatic,
    }
}

/// The atom names and template bonds expected for one residue name.
#[derive(Debug, Copy, Clone)]
pub struct ResidueTemplate {
    pub atoms: &'static [&'static str],
    pub bonds: &'static [TemplateBond],
}

impl ResidueTemplate {
    pub fn contains_atom(&self, name: &str) -> bool {
        self.atoms.iter().any(|a| *a == name)
    }

    pub fn atom_index(&self, name: &str) -> Option<usize> {
        self.atoms.iter().position(|a| *a == name)
    }
}

macro_rules! residue {
    ($name:literal, atoms: [$($atom:literal),* $(,)?], bonds: [$($b:expr),* $(,)?]) => {
        (
            $name,
            ResidueTemplate {
                atoms: &[$($atom),*],
                bonds: &[$($b),*],
            },
        )
    };
}

// The 20 standard amino acids, each as backbone (N, CA, C, O [, CB]) plus a chemically
// standard side chain. Non-goal: this is not a full PDB Chemical Component Dictionary,
// only the common proteinogenic residues DSSP and the bond guessers are exercised against.
const RESIDUES: &[(&str, ResidueTemplate)] = &[
    residue!("GLY", atoms: ["N", "CA", "C", "O"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
    ]),
    residue!("ALA", atoms: ["N", "CA", "C", "O", "CB"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false),
    ]),
    residue!("SER", atoms: ["N", "CA", "C", "O", "CB", "OG"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "OG", 1, false),
    ]),
    residue!("CYS", atoms: ["N", "CA", "C", "O", "CB", "SG"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "SG", 1, false),
    ]),
    residue!("THR", atoms: ["N", "CA", "C", "O", "CB", "OG1", "CG2"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "OG1", 1, false), bond("CB", "CG2", 1, false),
    ]),
    residue!("VAL", atoms: ["N", "CA", "C", "O", "CB", "CG1", "CG2"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "CG1", 1, false), bond("CB", "CG2", 1, false),
    ]),
    residue!("LEU", atoms: ["N", "CA", "C", "O", "CB", "CG", "CD1", "CD2"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "CG", 1, false),
        bond("CG", "CD1", 1, false), bond("CG", "CD2", 1, false),
    ]),
    residue!("ILE", atoms: ["N", "CA", "C", "O", "CB", "CG1", "CG2", "CD1"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "CG1", 1, false), bond("CB", "CG2", 1, false),
        bond("CG1", "CD1", 1, false),
    ]),
    residue!("PRO", atoms: ["N", "CA", "C", "O", "CB", "CG", "CD"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "CG", 1, false), bond("CG", "CD", 1, false),
        bond("CD", "N", 1, false),
    ]),
    residue!("MET", atoms: ["N", "CA", "C", "O", "CB", "CG", "SD", "CE"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "CG", 1, false), bond("CG", "SD", 1, false),
        bond("SD", "CE", 1, false),
    ]),
    residue!("ASP", atoms: ["N", "CA", "C", "O", "CB", "CG", "OD1", "OD2"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "CG", 1, false),
        bond("CG", "OD1", 2, false), bond("CG", "OD2", 1, false),
    ]),
    residue!("ASN", atoms: ["N", "CA", "C", "O", "CB", "CG", "OD1", "ND2"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "CG", 1, false),
        bond("CG", "OD1", 2, false), bond("CG", "ND2", 1, false),
    ]),
    residue!("GLU", atoms: ["N", "CA", "C", "O", "CB", "CG", "CD", "OE1", "OE2"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "CG", 1, false), bond("CG", "CD", 1, false),
        bond("CD", "OE1", 2, false), bond("CD", "OE2", 1, false),
    ]),
    residue!("GLN", atoms: ["N", "CA", "C", "O", "CB", "CG", "CD", "OE1", "NE2"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "CG", 1, false), bond("CG", "CD", 1, false),
        bond("CD", "OE1", 2, false), bond("CD", "NE2", 1, false),
    ]),
    residue!("LYS", atoms: ["N", "CA", "C", "O", "CB", "CG", "CD", "CE", "NZ"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "CG", 1, false), bond("CG", "CD", 1, false),
        bond("CD", "CE", 1, false), bond("CE", "NZ", 1, false),
    ]),
    residue!("ARG", atoms: ["N", "CA", "C", "O", "CB", "CG", "CD", "NE", "CZ", "NH1", "NH2"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "CG", 1, false), bond("CG", "CD", 1, false),
        bond("CD", "NE", 1, false), bond("NE", "CZ", 1, false),
        bond("CZ", "NH1", 2, false), bond("CZ", "NH2", 1, false),
    ]),
    residue!("HIS", atoms: ["N", "CA", "C", "O", "CB", "CG", "ND1", "CD2", "CE1", "NE2"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "CG", 1, false),
        bond("CG", "ND1", 1, true), bond("ND1", "CE1", 2, true),
        bond("CE1", "NE2", 1, true), bond("NE2", "CD2", 2, true), bond("CD2", "CG", 1, true),
    ]),
    residue!("PHE", atoms: ["N", "CA", "C", "O", "CB", "CG", "CD1", "CD2", "CE1", "CE2", "CZ"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "CG", 1, false),
        bond("CG", "CD1", 2, true), bond("CD1", "CE1", 1, true),
        bond("CE1", "CZ", 2, true), bond("CZ", "CE2", 1, true),
        bond("CE2", "CD2", 2, true), bond("CD2", "CG", 1, true),
    ]),
    residue!("TYR", atoms: ["N", "CA", "C", "O", "CB", "CG", "CD1", "CD2", "CE1", "CE2", "CZ", "OH"], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "CG", 1, false),
        bond("CG", "CD1", 2, true), bond("CD1", "CE1", 1, true),
        bond("CE1", "CZ", 2, true), bond("CZ", "CE2", 1, true),
        bond("CE2", "CD2", 2, true), bond("CD2", "CG", 1, true),
        bond("CZ", "OH", 1, false),
    ]),
    residue!("TRP", atoms: [
        "N", "CA", "C", "O", "CB", "CG", "CD1", "CD2", "NE1", "CE2", "CE3", "CZ2", "CZ3", "CH2",
    ], bonds: [
        bond("N", "CA", 1, false), bond("CA", "C", 1, false), bond("C", "O", 1, false),
        bond("CA", "CB", 1, false), bond("CB", "CG", 1, false),
        bond("CG", "CD1", 1, true), bond("CD1", "NE1", 1, true), bond("NE1", "CE2", 1, true),
        bond("CE2", "CD2", 2, true), bond("CD2", "CG", 1, true),
        bond("CD2", "CE3", 1, true), bond("CE3", "CZ3", 2, true),
        bond("CZ3", "CH2", 1, true), bond("CH2", "CZ2", 2, true), bond("CZ2", "CE2", 1, true),
    ]),
];

/// Read-only collection of residue templates, looked up by residue name.
#[derive(Debug, Copy, Clone)]
pub struct ResidueTable {
    residues: &'static [(&'static str, ResidueTemplate)],
}

impl ResidueTable {
    pub fn new() -> Self {
        Self { residues: RESIDUES }
    }

    pub fn contains(&self, resname: &str) -> bool {
        self.residues.iter().any(|(name, _)| *name == resname)
    }

    pub fn get(&self, resname: &str) -> Option<&'static ResidueTemplate> {
        self.residues
            .iter()
            .find(|(name, _)| *name == resname)
            .map(|(_, template)| template)
    }

    pub fn max_atoms(&self) -> usize {
        self.residues
            .iter()
            .map(|(_, template)| template.atoms.len())
            .max()
            .unwrap_or(0)
    }
}

impl Default for ResidueTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gln_has_double_bonded_oe1() {
        let table = ResidueTable::new();
        let gln = table.get("GLN").unwrap();
        let b = gln
            .bonds
            .iter()
            .find(|b| (b.atom1 == "CD" && b.atom2 == "OE1") || (b.atom1 == "OE1" && b.atom2 == "CD"))
            .unwrap();
        assert_eq!(b.order, 2);
        assert!(!b.aromatic);
    }

    #[test]
    fn phe_ring_is_aromatic() {
        let table = ResidueTable::new();
        let phe = table.get("PHE").unwrap();
        assert!(phe.bonds.iter().all(|b| {
            let ring = ["CG", "CD1", "CD2", "CE1", "CE2", "CZ"];
            !ring.contains(&b.atom1) || !ring.contains(&b.atom2) || b.aromatic
        }));
    }

    #[test]
    fn unknown_residue_is_absent() {
        let table = ResidueTable::new();
        assert!(!table.contains("ZZZ"));
        assert!(table.get("ZZZ").is_none());
    }
}
