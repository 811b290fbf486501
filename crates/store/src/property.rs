// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use ultraviolet::Vec3;

/// The closed set of column value types a property can hold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Int,
    Float,
    Vec3,
    Str,
}

/// Identity of a property within one entity kind. The standard set mirrors the legacy
/// `AtomData`/`ResidueData` column names; `Custom` lets callers register anything else at
/// runtime without the container needing to know about it ahead of time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyName {
    Name,
    Type,
    AlternateLocation,
    InsertionCode,
    ResName,
    ResId,
    AtomicNumber,
    Occupancy,
    TemperatureFactor,
    Mass,
    Charge,
    Radius,
    Position,
    SegId,
    Chain,
    Custom(String),
}

/// One property's storage for a single frame (or the lone instance of a static property).
#[derive(Debug, Clone)]
pub enum Column {
    Int(Vec<i32>),
    Float(Vec<f32>),
    Vec3(Vec<Vec3>),
    Str(Vec<String>),
}

impl Column {
    pub fn new(prop_type: PropertyType, size: usize) -> Self {
        match prop_type {
            PropertyType::Int => Column::Int(vec![0; size]),
            PropertyType::Float => Column::Float(vec![0.0; size]),
            PropertyType::Vec3 => Column::Vec3(vec![Vec3::zero(); size]),
            PropertyType::Str => Column::Str(vec![String::new(); size]),
        }
    }

    pub fn property_type(&self) -> PropertyType {
        match self {
            Column::Int(_) => PropertyType::Int,
            Column::Float(_) => PropertyType::Float,
            Column::Vec3(_) => PropertyType::Vec3,
            Column::Str(_) => PropertyType::Str,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Int(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Vec3(v) => v.len(),
            Column::Str(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn resize(&mut self, n: usize) {
        match self {
            Column::Int(v) => v.resize(n, 0),
            Column::Float(v) => v.resize(n, 0.0),
            Column::Vec3(v) => v.resize(n, Vec3::zero()),
            Column::Str(v) => v.resize(n, String::new()),
        }
    }

    pub fn as_int(&self) -> Option<&[i32]> {
        match self {
            Column::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<&[f32]> {
        match self {
            Column::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec3(&self) -> Option<&[Vec3]> {
        match self {
            Column::Vec3(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&[String]> {
        match self {
            Column::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_int(&self, index: usize) -> Option<i32> {
        self.as_int()?.get(index).copied()
    }

    pub fn get_float(&self, index: usize) -> Option<f32> {
        self.as_float()?.get(index).copied()
    }

    pub fn get_vec3(&self, index: usize) -> Option<Vec3> {
        self.as_vec3()?.get(index).copied()
    }

    pub fn get_str(&self, index: usize) -> Option<&str> {
        self.as_str()?.get(index).map(String::as_str)
    }

    pub fn set_int(&mut self, index: usize, value: i32) -> Option<()> {
        if let Column::Int(v) = self {
            *v.get_mut(index)? = value;
            Some(())
        } else {
            None
        }
    }

    pub fn set_float(&mut self, index: usize, value: f32) -> Option<()> {
        if let Column::Float(v) = self {
            *v.get_mut(index)? = value;
            Some(())
        } else {
            None
        }
    }

    pub fn set_vec3(&mut self, index: usize, value: Vec3) -> Option<()> {
        if let Column::Vec3(v) = self {
            *v.get_mut(index)? = value;
            Some(())
        } else {
            None
        }
    }

    pub fn set_str(&mut self, index: usize, value: impl Into<String>) -> Option<()> {
        if let Column::Str(v) = self {
            *v.get_mut(index)? = value.into();
            Some(())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_grows_with_defaults() {
        let mut col = Column::new(PropertyType::Int, 2);
        col.resize(4);
        assert_eq!(col.as_int(), Some(&[0, 0, 0, 0][..]));
    }

    #[test]
    fn typed_accessors_reject_wrong_variant() {
        let col = Column::new(PropertyType::Float, 1);
        assert_eq!(col.get_int(0), None);
        assert_eq!(col.get_float(0), Some(0.0));
    }
}
