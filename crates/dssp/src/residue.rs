// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use ultraviolet::Vec3;

use crate::SecondaryStructure;

pub const MAX_PEPTIDE_BOND_LENGTH: f32 = 2.5;

/// Chain-break and kappa sentinel: an angle of exactly 360 degrees cannot occur from `atan2`, so
/// it doubles as "no chain-break-free window of residues existed to compute this from".
pub const KAPPA_SENTINEL: f32 = 360.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HelixFlag {
    None,
    Start,
    End,
    StartAndEnd,
    Middle,
}

#[derive(Debug, Copy, Clone)]
pub struct HBond {
    pub partner: Option<usize>,
    pub energy: f32,
}

impl Default for HBond {
    fn default() -> Self {
        Self { partner: None, energy: 0.0 }
    }
}

/// Backbone geometry and running classification state for one amino-acid-like residue.
/// `index` is the residue's position in the chain-break-aware numbering used by every stride
/// and window check below -- consecutive in sequence, but incremented an extra step across a
/// chain break so neighbourhood arithmetic never treats two chains as contiguous.
pub struct BackboneResidue {
    pub residue_index: usize,
    pub chain_id: String,
    pub is_proline: bool,
    pub n: Vec3,
    pub ca: Vec3,
    pub c: Vec3,
    pub o: Vec3,
    pub h: Vec3,
    pub is_chain_break: bool,
    pub is_bend: bool,
    pub structure: SecondaryStructure,
    pub helix_flags: [HelixFlag; 3],
    pub h_bond_donor: [HBond; 2],
    pub h_bond_acceptor: [HBond; 2],
}

impl BackboneResidue {
    pub fn new(chain_id: String, is_proline: bool, n: Vec3, ca: Vec3, c: Vec3, o: Vec3) -> Self {
        Self {
            residue_index: 0,
            chain_id,
            is_proline,
            n,
            ca,
            c,
            o,
            h: n,
            is_chain_break: false,
            is_bend: false,
            structure: SecondaryStructure::Loop,
            helix_flags: [HelixFlag::None; 3],
            h_bond_donor: [HBond::default(); 2],
            h_bond_acceptor: [HBond::default(); 2],
        }
    }

    pub fn helix_flag(&self, stride: usize) -> HelixFlag {
        self.helix_flags[stride - 3]
    }

    pub fn set_helix_flag(&mut self, stride: usize, flag: HelixFlag) {
        self.helix_flags[stride - 3] = flag;
    }

    pub fn is_helix_start(&self, stride: usize) -> bool {
        matches!(self.helix_flag(stride), HelixFlag::Start | HelixFlag::StartAndEnd)
    }

    fn is_valid_peptide_distance(&self, previous: &Self) -> bool {
        (self.n - previous.c).mag() <= MAX_PEPTIDE_BOND_LENGTH
    }

    /// Links this residue after `previous` in chain order: places the idealised amide hydrogen,
    /// flags a chain break on an over-long (or cross-chain) peptide bond, and advances the
    /// chain-break-aware residue index accordingly.
    pub fn link_after(&mut self, previous: &Self) {
        self.residue_index = previous.residue_index + 1;
        if !self.is_proline {
            self.h = self.n + (previous.c - previous.o).normalized();
        }
        if self.chain_id != previous.chain_id || !self.is_valid_peptide_distance(previous) {
            self.is_chain_break = true;
        }
        if self.is_chain_break {
            self.residue_index += 1;
        }
    }
}

pub fn distance(a: Vec3, b: Vec3) -> f32 {
    (a - b).mag()
}

fn cosine_angle(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> f32 {
    let v1 = a - b;
    let v2 = c - d;
    let x = v1.dot(v1) * v2.dot(v2);
    if x > 0.0 {
        v1.dot(v2) / x.sqrt()
    } else {
        0.0
    }
}

/// True iff no residue in `(from, to]` is flagged as a chain break, i.e. the whole half-open
/// window `from..=to` forms one unbroken peptide.
pub fn no_chain_break(residues: &[BackboneResidue], from: usize, to: usize) -> bool {
    for i in from..to {
        if i + 1 >= residues.len() || residues[i + 1].is_chain_break {
            return false;
        }
    }
    true
}

/// Cα-angle κ at `index`, or [`KAPPA_SENTINEL`] if there is no unbroken `i-2..=i+2` window.
pub fn kappa(residues: &[BackboneResidue], index: usize) -> f32 {
    if index < 2 || index + 2 >= residues.len() {
        return KAPPA_SENTINEL;
    }
    let prev_prev = index - 2;
    let next_next = index + 2;
    if !no_chain_break(residues, prev_prev, next_next) {
        return KAPPA_SENTINEL;
    }
    let ckap = cosine_angle(
        residues[index].ca,
        residues[prev_prev].ca,
        residues[next_next].ca,
        residues[index].ca,
    );
    let skap = (1.0 - ckap * ckap).max(0.0).sqrt();
    skap.atan2(ckap).to_degrees()
}
