// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Stack-machine evaluator: turns a parsed `Node` tree into a sorted-unique set of atom indices.
//! Never recurses -- a single explicit `Vec` stands in for the call stack, so arbitrarily long
//! boolean chains cannot blow it.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use common::Result;
use store::{EntityKind, Frame, MolData, PropertyName};

use crate::ast::{NumPropKind, NumSpec, Node};

type IndexSet = Rc<RefCell<BTreeSet<usize>>>;

fn new_set() -> IndexSet {
    Rc::new(RefCell::new(BTreeSet::new()))
}

enum WorkItem<'a> {
    Eval {
        node: &'a Node,
        mask: IndexSet,
        selected: IndexSet,
    },
    CombineNot {
        mask: IndexSet,
        inverted_selected: IndexSet,
        target: IndexSet,
    },
}

/// Evaluates `root` over every atom in `universe`, producing the sorted-unique set of matches
/// for `frame` (which may be `None` for frame-independent predicates).
pub fn evaluate(
    root: &Node,
    store: &MolData,
    frame: Option<Frame>,
    universe: impl IntoIterator<Item = usize>,
) -> Result<BTreeSet<usize>> {
    store.check_frame(frame)?;

    let selected_root = new_set();
    let mask_root = Rc::new(RefCell::new(universe.into_iter().collect()));
    let mut stack = vec![WorkItem::Eval {
        node: root,
        mask: mask_root,
        selected: selected_root.clone(),
    }];

    while let Some(item) = stack.pop() {
        match item {
            WorkItem::Eval { node, mask, selected } => eval_node(node, store, &mut stack, mask, selected),
            WorkItem::CombineNot {
                mask,
                inverted_selected,
                target,
            } => {
                let diff: BTreeSet<usize> = mask
                    .borrow()
                    .difference(&inverted_selected.borrow())
                    .copied()
                    .collect();
                target.borrow_mut().extend(diff);
            }
        }
    }

    let result = selected_root.borrow().clone();
    Ok(result)
}

fn eval_node<'a>(node: &'a Node, store: &MolData, stack: &mut Vec<WorkItem<'a>>, mask: IndexSet, selected: IndexSet) {
    match node {
        Node::All => {
            selected.borrow_mut().extend(mask.borrow().iter().copied());
        }
        Node::NumProp(kind, specs) => {
            for atom in mask.borrow().iter().copied() {
                if numprop_matches(*kind, specs, store, atom) {
                    selected.borrow_mut().insert(atom);
                }
            }
        }
        Node::Or(left, right) => {
            stack.push(WorkItem::Eval {
                node: right,
                mask: mask.clone(),
                selected: selected.clone(),
            });
            stack.push(WorkItem::Eval { node: left, mask, selected });
        }
        Node::And(left, right) => {
            let partial = new_set();
            stack.push(WorkItem::Eval {
                node: right,
                mask: partial.clone(),
                selected: selected.clone(),
            });
            stack.push(WorkItem::Eval {
                node: left,
                mask,
                selected: partial,
            });
        }
        Node::Not(child) => {
            let inverted_selected = new_set();
            stack.push(WorkItem::CombineNot {
                mask: mask.clone(),
                inverted_selected: inverted_selected.clone(),
                target: selected,
            });
            stack.push(WorkItem::Eval {
                node: child,
                mask,
                selected: inverted_selected,
            });
        }
    }
}

fn numprop_matches(kind: NumPropKind, specs: &[NumSpec], store: &MolData, atom: usize) -> bool {
    let (value, exact) = match kind {
        NumPropKind::Index => (atom as f64, true),
        NumPropKind::ResId => {
            let Some(column) = store.property_at(EntityKind::Atom, &PropertyName::ResId, None) else {
                return false;
            };
            let exact = matches!(column, store::Column::Int(_));
            let Some(value) = (match column {
                store::Column::Int(_) => column.get_int(atom).map(|v| v as f64),
                store::Column::Float(_) => column.get_float(atom).map(|v| v as f64),
                _ => None,
            }) else {
                return false;
            };
            (value, exact)
        }
    };

    specs.iter().any(|spec| match spec {
        NumSpec::Number(n) => n.matches(value, exact),
        NumSpec::Range(r) => r.matches(value, exact),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parse;
    use store::PropertyType;

    fn store_with_resids(resids: &[i32]) -> MolData {
        let mut m = MolData::new(resids.len());
        m.add_property(EntityKind::Atom, PropertyName::ResId, PropertyType::Int, false)
            .unwrap();
        let col = m.property_at_mut(EntityKind::Atom, &PropertyName::ResId, None).unwrap();
        for (i, &r) in resids.iter().enumerate() {
            col.set_int(i, r);
        }
        m
    }

    #[test]
    fn all_selects_every_atom() {
        let m = store_with_resids(&[1, 2, 3]);
        let node = parse("all").unwrap();
        let result = evaluate(&node, &m, None, 0..3).unwrap();
        assert_eq!(result, BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn resid_selects_matching_atoms() {
        let m = store_with_resids(&[1, 2, 3]);
        let node = parse("resid 2 3").unwrap();
        let result = evaluate(&node, &m, None, 0..3).unwrap();
        assert_eq!(result, BTreeSet::from([1, 2]));
    }

    #[test]
    fn not_inverts_within_mask() {
        let m = store_with_resids(&[1, 2, 3]);
        let node = parse("not resid 2").unwrap();
        let result = evaluate(&node, &m, None, 0..3).unwrap();
        assert_eq!(result, BTreeSet::from([0, 2]));
    }

    #[test]
    fn and_short_circuits_through_left_matches() {
        let m = store_with_resids(&[1, 2, 3]);
        let node = parse("resid 1 2 and resid 2 3").unwrap();
        let result = evaluate(&node, &m, None, 0..3).unwrap();
        assert_eq!(result, BTreeSet::from([1]));
    }

    #[test]
    fn or_unions_both_sides() {
        let m = store_with_resids(&[1, 2, 3]);
        let node = parse("resid 1 or resid 3").unwrap();
        let result = evaluate(&node, &m, None, 0..3).unwrap();
        assert_eq!(result, BTreeSet::from([0, 2]));
    }

    #[test]
    fn index_range_selects_inclusive_bounds() {
        let m = store_with_resids(&[1, 2, 3, 4]);
        let node = parse("index 1:2").unwrap();
        let result = evaluate(&node, &m, None, 0..4).unwrap();
        assert_eq!(result, BTreeSet::from([1, 2]));
    }

    #[test]
    fn out_of_range_frame_is_rejected() {
        let m = store_with_resids(&[1, 2]);
        let node = parse("all").unwrap();
        assert!(evaluate(&node, &m, Some(0), 0..2).is_err());
    }
}
