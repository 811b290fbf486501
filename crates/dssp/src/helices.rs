// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::hbond::test_bond;
use crate::residue::{kappa, no_chain_break, BackboneResidue, HelixFlag, KAPPA_SENTINEL};
use crate::SecondaryStructure;

const BEND_ANGLE: f32 = 70.0;

fn stride_structure(stride: usize) -> SecondaryStructure {
    match stride {
        3 => SecondaryStructure::Helix3,
        4 => SecondaryStructure::Helix,
        5 => SecondaryStructure::Helix5,
        _ => unreachable!("helix strides are 3, 4 or 5"),
    }
}

/// Flags helix starts/ends/middles for every stride in `{3, 4, 5}`, paints runs of consecutive
/// starts with the stride's helix state (honouring `prefer_pi_helices` for the 5-stride
/// overpaint), then derives bend, turn and the residual `Bend` state.
pub fn compute_helices(residues: &mut [BackboneResidue], prefer_pi_helices: bool) {
    for stride in 3..=5usize {
        if residues.len() < stride {
            continue;
        }
        for i in 0..(residues.len() - stride) {
            if test_bond(residues, i + stride, i) && no_chain_break(residues, i, i + stride) {
                residues[i + stride].set_helix_flag(stride, HelixFlag::End);
                for j in (i + 1)..(i + stride) {
                    if residues[j].helix_flag(stride) == HelixFlag::None {
                        residues[j].set_helix_flag(stride, HelixFlag::Middle);
                    }
                }
                let flag = if residues[i].helix_flag(stride) == HelixFlag::End {
                    HelixFlag::StartAndEnd
                } else {
                    HelixFlag::Start
                };
                residues[i].set_helix_flag(stride, flag);
            }
        }
    }

    for i in 0..residues.len() {
        let k = kappa(residues, i);
        residues[i].is_bend = k != KAPPA_SENTINEL && k > BEND_ANGLE;
    }

    paint_stride(residues, 4, prefer_pi_helices);
    paint_stride(residues, 3, prefer_pi_helices);
    paint_stride(residues, 5, prefer_pi_helices);

    let n = residues.len();
    for i in 1..n.saturating_sub(1) {
        if residues[i].structure != SecondaryStructure::Loop {
            continue;
        }
        let mut is_turn = false;
        'strides: for stride in 3..=5usize {
            for k in 1..stride {
                if i >= k && residues[i - k].is_helix_start(stride) {
                    is_turn = true;
                    break 'strides;
                }
            }
        }
        if is_turn {
            residues[i].structure = SecondaryStructure::Turn;
        } else if residues[i].is_bend {
            residues[i].structure = SecondaryStructure::Bend;
        }
    }
}

/// Paints `i..i+stride-1` with the stride's helix state whenever residues `i-1` and `i` are both
/// helix-starts of that stride. The 4-stride (`Helix`) pass always overwrites; the 3- and
/// 5-stride passes only take a run that is still free (`Loop`, already the same state, or --
/// 5-stride with `prefer_pi_helices` set -- an existing 4-stride `Helix` run it may overpaint).
fn paint_stride(residues: &mut [BackboneResidue], stride: usize, prefer_pi_helices: bool) {
    let structure = stride_structure(stride);
    let n = residues.len();
    if n == 0 {
        return;
    }
    for i in 1..n {
        if residues[i].is_helix_start(stride) && residues[i - 1].is_helix_start(stride) {
            let end = i + stride - 1;
            if end >= n {
                continue;
            }
            let free = stride == 4
                || (i..=end).all(|j| {
                    let s = residues[j].structure;
                    s == SecondaryStructure::Loop || s == structure || (stride == 5 && prefer_pi_helices && s == SecondaryStructure::Helix)
                });
            if free {
                for j in i..=end {
                    residues[j].structure = structure;
                }
            }
        }
    }
}
