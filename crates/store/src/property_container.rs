// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::HashMap;

use common::{MolError, Result};

use crate::entity::{EntityKind, Frame};
use crate::property::{Column, PropertyName, PropertyType};

/// A property's storage across frames: one column if static, one column per frame if
/// time-based. Time-based trajectories are born with as many columns as the container
/// currently has frames, and grow/shrink in lockstep with `add_frame`/`remove_frame`.
struct PropertyTrajectory {
    time_based: bool,
    columns: Vec<Column>,
}

impl PropertyTrajectory {
    fn new(prop_type: PropertyType, time_based: bool, num_frames: usize, size: usize) -> Self {
        let columns = if time_based {
            (0..num_frames).map(|_| Column::new(prop_type, size)).collect()
        } else {
            vec![Column::new(prop_type, size)]
        };
        Self { time_based, columns }
    }

    fn add_frame(&mut self, size: usize) {
        if self.time_based {
            self.columns.push(Column::new(self.prop_type(), size));
        }
    }

    fn remove_frame(&mut self, frame: Frame) {
        if self.time_based && frame < self.columns.len() {
            self.columns.remove(frame);
        }
    }

    fn resize(&mut self, size: usize) {
        for column in &mut self.columns {
            column.resize(size);
        }
    }

    fn get(&self, frame: Option<Frame>) -> Option<&Column> {
        if self.time_based {
            self.columns.get(frame?)
        } else {
            self.columns.first()
        }
    }

    fn get_mut(&mut self, frame: Option<Frame>) -> Option<&mut Column> {
        if self.time_based {
            self.columns.get_mut(frame?)
        } else {
            self.columns.first_mut()
        }
    }

    fn prop_type(&self) -> PropertyType {
        self.columns
            .first()
            .map(Column::property_type)
            .unwrap_or(PropertyType::Int)
    }
}

type PropertyKey = (EntityKind, PropertyName);

/// Columnar, per-entity-kind, per-frame property storage. Owns nothing about what a property
/// "means" beyond its type; `store::mol_data` builds the domain vocabulary (residue ids, atomic
/// numbers, positions, ...) on top of this.
pub struct PropertyContainer {
    properties: HashMap<PropertyKey, PropertyTrajectory>,
    sizes: HashMap<EntityKind, usize>,
    num_frames: usize,
}

impl PropertyContainer {
    pub fn new(atom_count: usize) -> Self {
        let mut sizes = HashMap::new();
        sizes.insert(EntityKind::Atom, atom_count);
        Self {
            properties: HashMap::new(),
            sizes,
            num_frames: 0,
        }
    }

    pub fn register_kind(&mut self, kind: EntityKind, size: usize) {
        self.sizes.insert(kind, size);
    }

    pub fn size_of_kind(&self, kind: EntityKind) -> Result<usize> {
        self.sizes
            .get(&kind)
            .copied()
            .ok_or_else(|| MolError::unregistered_kind(kind.name()))
    }

    pub fn resize_kind(&mut self, kind: EntityKind, n: usize) -> Result<()> {
        self.size_of_kind(kind)?;
        self.sizes.insert(kind, n);
        for (key, trajectory) in self.properties.iter_mut() {
            if key.0 == kind {
                trajectory.resize(n);
            }
        }
        Ok(())
    }

    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// Fails-soft: an already-registered property is returned unchanged rather than erroring.
    pub fn add_property(
        &mut self,
        kind: EntityKind,
        name: PropertyName,
        prop_type: PropertyType,
        time_based: bool,
    ) -> Result<()> {
        let size = self.size_of_kind(kind)?;
        let key = (kind, name);
        if !self.properties.contains_key(&key) {
            self.properties.insert(
                key,
                PropertyTrajectory::new(prop_type, time_based, self.num_frames, size),
            );
        }
        Ok(())
    }

    pub fn has_property(&self, kind: EntityKind, name: &PropertyName) -> bool {
        self.properties.contains_key(&(kind, name.clone()))
    }

    pub fn property_at(&self, kind: EntityKind, name: &PropertyName, frame: Option<Frame>) -> Option<&Column> {
        self.properties.get(&(kind, name.clone()))?.get(frame)
    }

    pub fn property_at_mut(
        &mut self,
        kind: EntityKind,
        name: &PropertyName,
        frame: Option<Frame>,
    ) -> Option<&mut Column> {
        self.properties.get_mut(&(kind, name.clone()))?.get_mut(frame)
    }

    /// Grows every time-based trajectory by one column at the current size of its kind; static
    /// trajectories are untouched. Returns the new frame's index.
    pub fn add_frame(&mut self) -> Frame {
        for (key, trajectory) in self.properties.iter_mut() {
            let size = self.sizes.get(&key.0).copied().unwrap_or(0);
            trajectory.add_frame(size);
        }
        self.num_frames += 1;
        self.num_frames - 1
    }

    /// No-op if `frame >= num_frames`.
    pub fn remove_frame(&mut self, frame: Frame) {
        if frame >= self.num_frames {
            return;
        }
        for trajectory in self.properties.values_mut() {
            trajectory.remove_frame(frame);
        }
        self.num_frames -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_property_is_fails_soft() {
        let mut c = PropertyContainer::new(3);
        c.add_property(EntityKind::Atom, PropertyName::ResId, PropertyType::Int, false)
            .unwrap();
        c.property_at_mut(EntityKind::Atom, &PropertyName::ResId, None)
            .unwrap()
            .set_int(0, 7);
        c.add_property(EntityKind::Atom, PropertyName::ResId, PropertyType::Int, false)
            .unwrap();
        assert_eq!(
            c.property_at(EntityKind::Atom, &PropertyName::ResId, None)
                .unwrap()
                .get_int(0),
            Some(7)
        );
    }

    #[test]
    fn unregistered_kind_rejected() {
        let c = PropertyContainer::new(2);
        assert!(c.size_of_kind(EntityKind::Residue).is_err());
    }

    #[test]
    fn time_based_property_tracks_frames() {
        let mut c = PropertyContainer::new(2);
        c.add_property(EntityKind::Atom, PropertyName::Position, PropertyType::Vec3, true)
            .unwrap();
        assert!(c.property_at(EntityKind::Atom, &PropertyName::Position, Some(0)).is_none());
        let f0 = c.add_frame();
        assert_eq!(f0, 0);
        assert!(c.property_at(EntityKind::Atom, &PropertyName::Position, Some(0)).is_some());
        assert!(c.property_at(EntityKind::Atom, &PropertyName::Position, Some(1)).is_none());
        c.add_frame();
        assert_eq!(c.num_frames(), 2);
        c.remove_frame(0);
        assert_eq!(c.num_frames(), 1);
    }

    #[test]
    fn resize_propagates_to_existing_properties() {
        let mut c = PropertyContainer::new(2);
        c.add_property(EntityKind::Atom, PropertyName::Mass, PropertyType::Float, false)
            .unwrap();
        c.resize_kind(EntityKind::Atom, 5).unwrap();
        assert_eq!(
            c.property_at(EntityKind::Atom, &PropertyName::Mass, None)
                .unwrap()
                .len(),
            5
        );
    }

    #[test]
    fn static_property_ignores_frame_argument() {
        let mut c = PropertyContainer::new(1);
        c.add_property(EntityKind::Atom, PropertyName::Charge, PropertyType::Float, false)
            .unwrap();
        c.add_frame();
        assert!(c.property_at(EntityKind::Atom, &PropertyName::Charge, Some(0)).is_some());
        assert!(c.property_at(EntityKind::Atom, &PropertyName::Charge, Some(99)).is_some());
    }
}
