// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::hbond::test_bond;
use crate::residue::{no_chain_break, BackboneResidue};
use crate::SecondaryStructure;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum BridgeType {
    Parallel,
    AntiParallel,
}

/// A run of residues `i` bridged to a run of residues `j`, growing as adjacent bridges of the
/// same type and direction merge into a ladder.
struct Bridge {
    kind: BridgeType,
    i: Vec<usize>,
    j: Vec<usize>,
}

/// `i, j` both interior (neither an endpoint) with an unbroken `[i-1, i+1]` and `[j-1, j+1]`
/// window: parallel if `HB(i+1,j) and HB(j,i-1)` or `HB(j+1,i) and HB(i,j-1)`; antiparallel if
/// `HB(i+1,j-1) and HB(j+1,i-1)` or `HB(j,i) and HB(i,j)`.
fn test_bridge(residues: &[BackboneResidue], first: usize, second: usize) -> Option<BridgeType> {
    if first == 0 || first + 1 >= residues.len() || second == 0 || second + 1 >= residues.len() {
        return None;
    }

    let a = first - 1;
    let b = first;
    let c = first + 1;
    let d = second - 1;
    let e = second;
    let f = second + 1;

    if no_chain_break(residues, a, c) && no_chain_break(residues, d, f) {
        if (test_bond(residues, c, e) && test_bond(residues, e, a)) || (test_bond(residues, f, b) && test_bond(residues, b, d)) {
            return Some(BridgeType::Parallel);
        }
        if (test_bond(residues, c, d) && test_bond(residues, f, a)) || (test_bond(residues, e, b) && test_bond(residues, b, e)) {
            return Some(BridgeType::AntiParallel);
        }
    }

    None
}

/// Detects bridges, merges contiguous ones into ladders, merges close ladders into bulged
/// sheets, then assigns `Bridge`/`Strand` per the merged length.
pub fn compute_sheets(residues: &mut [BackboneResidue]) {
    let n = residues.len();
    let mut bridges: Vec<Bridge> = Vec::new();

    for i in 1..n.saturating_sub(4) {
        for j in (i + 3)..n.saturating_sub(1) {
            let Some(kind) = test_bridge(residues, i, j) else {
                continue;
            };

            let mut found = false;
            for bridge in bridges.iter_mut() {
                if kind != bridge.kind || i != *bridge.i.last().unwrap() + 1 {
                    continue;
                }
                if kind == BridgeType::Parallel && *bridge.j.last().unwrap() + 1 == j {
                    bridge.i.push(i);
                    bridge.j.push(j);
                    found = true;
                    break;
                }
                if kind == BridgeType::AntiParallel && bridge.j[0] > 0 && bridge.j[0] - 1 == j {
                    bridge.i.push(i);
                    bridge.j.insert(0, j);
                    found = true;
                    break;
                }
            }

            if !found {
                bridges.push(Bridge { kind, i: vec![i], j: vec![j] });
            }
        }
    }

    bridges.sort_by_key(|b| b.i[0]);

    let mut i = 0;
    while i < bridges.len() {
        let mut j = i + 1;
        while j < bridges.len() {
            let ibi = bridges[i].i[0];
            let iei = *bridges[i].i.last().unwrap();
            let jbi = bridges[i].j[0];
            let jei = *bridges[i].j.last().unwrap();
            let ibj = bridges[j].i[0];
            let iej = *bridges[j].i.last().unwrap();
            let jbj = bridges[j].j[0];
            let jej = *bridges[j].j.last().unwrap();

            let skip = bridges[i].kind != bridges[j].kind
                || !no_chain_break(residues, ibi.min(ibj), iei.max(iej))
                || !no_chain_break(residues, jbi.min(jbj), jei.max(jej))
                || ibj >= iei + 6
                || (iei >= ibj && ibi <= iej);

            if skip {
                j += 1;
                continue;
            }

            let bulge = if bridges[i].kind == BridgeType::Parallel {
                (jbj > jei && jbj - jei < 6 && ibj - iei < 3) || (jbj > jei && jbj - jei < 3)
            } else {
                (jbi >= jej && jbi - jej < 6 && ibj - iei < 3) || (jbi >= jej && jbi - jej < 3)
            };

            if bulge {
                let merged_j = bridges[j].j.clone();
                let merged_i = bridges[j].i.clone();
                bridges[i].i.extend(merged_i);
                if bridges[i].kind == BridgeType::Parallel {
                    bridges[i].j.extend(merged_j);
                } else {
                    let mut combined = merged_j;
                    combined.extend(bridges[i].j.clone());
                    bridges[i].j = combined;
                }
                bridges.remove(j);
                continue;
            }

            j += 1;
        }
        i += 1;
    }

    for bridge in &bridges {
        let structure = if bridge.i.len() > 1 { SecondaryStructure::Strand } else { SecondaryStructure::Bridge };
        let i_lo = *bridge.i.iter().min().unwrap();
        let i_hi = *bridge.i.iter().max().unwrap();
        let j_lo = *bridge.j.iter().min().unwrap();
        let j_hi = *bridge.j.iter().max().unwrap();
        for idx in i_lo..=i_hi {
            if residues[idx].structure != SecondaryStructure::Strand {
                residues[idx].structure = structure;
            }
        }
        for idx in j_lo..=j_hi {
            if residues[idx].structure != SecondaryStructure::Strand {
                residues[idx].structure = structure;
            }
        }
    }
}
