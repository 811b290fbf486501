// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::residue::{distance, BackboneResidue};

const MIN_DISTANCE: f32 = 0.5;
const MIN_CA_DISTANCE: f32 = 9.0;
const MIN_HBOND_ENERGY: f32 = -9.9;
pub const MAX_HBOND_ENERGY: f32 = -0.5;
/// `27.888 ~= 332 * 0.42 * 0.2`, the CHARMM partial-charge coupling constant for the backbone
/// amide/carbonyl dipole approximation.
const COUPLING_CONSTANT: f32 = -332.0 * 0.42 * 0.2;

/// Computes every Cα-proximate donor/acceptor pair's hydrogen-bond energy and keeps, per
/// residue, its two strongest acceptor and two strongest donor partners.
pub fn compute_h_bond_energies(residues: &mut [BackboneResidue]) {
    let n = residues.len();
    for i in 0..n.saturating_sub(1) {
        for j in (i + 1)..n {
            if distance(residues[i].ca, residues[j].ca) < MIN_CA_DISTANCE {
                compute_h_bond(residues, i, j);
                if j != i + 1 {
                    compute_h_bond(residues, j, i);
                }
            }
        }
    }
}

fn compute_h_bond(residues: &mut [BackboneResidue], donor: usize, acceptor: usize) {
    let mut energy = 0.0;

    if !residues[donor].is_proline {
        let d = &residues[donor];
        let a = &residues[acceptor];
        let dist_h_o = distance(d.h, a.o);
        let dist_h_c = distance(d.h, a.c);
        let dist_n_c = distance(d.n, a.c);
        let dist_n_o = distance(d.n, a.o);

        energy = if dist_h_o < MIN_DISTANCE || dist_h_c < MIN_DISTANCE || dist_n_c < MIN_DISTANCE || dist_n_o < MIN_DISTANCE {
            MIN_HBOND_ENERGY
        } else {
            COUPLING_CONSTANT / dist_h_o - COUPLING_CONSTANT / dist_h_c + COUPLING_CONSTANT / dist_n_c - COUPLING_CONSTANT / dist_n_o
        };
        energy = energy.max(MIN_HBOND_ENERGY);
    }

    let d = &mut residues[donor];
    if energy < d.h_bond_acceptor[0].energy {
        d.h_bond_acceptor[1] = d.h_bond_acceptor[0];
        d.h_bond_acceptor[0].partner = Some(acceptor);
        d.h_bond_acceptor[0].energy = energy;
    } else if energy < d.h_bond_acceptor[1].energy {
        d.h_bond_acceptor[1].partner = Some(acceptor);
        d.h_bond_acceptor[1].energy = energy;
    }

    let a = &mut residues[acceptor];
    if energy < a.h_bond_donor[0].energy {
        a.h_bond_donor[1] = a.h_bond_donor[0];
        a.h_bond_donor[0].partner = Some(donor);
        a.h_bond_donor[0].energy = energy;
    } else if energy < a.h_bond_donor[1].energy {
        a.h_bond_donor[1].partner = Some(donor);
        a.h_bond_donor[1].energy = energy;
    }
}

/// True iff `first` accepts a hydrogen bond from `second` strong enough to count
/// (`E < `[`MAX_HBOND_ENERGY`]``).
pub fn test_bond(residues: &[BackboneResidue], first: usize, second: usize) -> bool {
    let hb1 = &residues[first].h_bond_acceptor[0];
    let hb2 = &residues[first].h_bond_acceptor[1];
    (hb1.partner == Some(second) && hb1.energy < MAX_HBOND_ENERGY) || (hb2.partner == Some(second) && hb2.energy < MAX_HBOND_ENERGY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ultraviolet::Vec3;

    fn residue(chain: &str, n: Vec3, ca: Vec3, c: Vec3, o: Vec3) -> BackboneResidue {
        BackboneResidue::new(chain.to_string(), false, n, ca, c, o)
    }

    #[test]
    fn distant_residues_never_evaluate_a_bond() {
        let mut residues = vec![
            residue("A", Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)),
            residue(
                "A",
                Vec3::new(100.0, 0.0, 0.0),
                Vec3::new(101.0, 0.0, 0.0),
                Vec3::new(102.0, 0.0, 0.0),
                Vec3::new(103.0, 0.0, 0.0),
            ),
        ];
        compute_h_bond_energies(&mut residues);
        assert!(!test_bond(&residues, 0, 1));
        assert!(!test_bond(&residues, 1, 0));
    }

    #[test]
    fn proline_donor_is_excluded() {
        let mut residues = vec![
            BackboneResidue::new(
                "A".to_string(),
                true,
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(0.5, 1.0, 0.0),
            ),
            residue(
                "A",
                Vec3::new(0.0, 0.0, 1.3),
                Vec3::new(1.0, 0.0, 1.3),
                Vec3::new(2.0, 0.0, 1.3),
                Vec3::new(0.5, 1.0, 1.3),
            ),
        ];
        compute_h_bond_energies(&mut residues);
        assert_eq!(residues[0].h_bond_acceptor[0].energy, 0.0);
    }
}
