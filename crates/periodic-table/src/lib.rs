// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Immutable periodic-table reference data: atomic number, relative atomic mass, covalent and
//! van der Waals radii, symbol and name. Consumed by the element-distance bond guesser and by
//! any caller that needs to resolve an atomic number to chemistry.

use serde::{Deserialize, Serialize};
use static_assertions::const_assert_eq;
use std::mem;

#[allow(dead_code)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[repr(u8)] // Oganesson == 118
pub enum Element {
    Hydrogen = 1,
    Helium,
    Lithium,
    Beryllium,
    Boron,
    Carbon,
    Nitrogen,
    Oxygen,
    Fluorine,
    Neon,
    Sodium,
    Magnesium,
    Aluminium,
    Silicon,
    Phosphorus,
    Sulfur,
    Chlorine,
    Argon,
    Potassium,
    Calcium,
    Scandium,
    Titanium,
    Vanadium,
    Chromium,
    Manganese,
    Iron,
    Cobalt,
    Nickel,
    Copper,
    Zinc,
    Gallium,
    Germanium,
    Arsenic,
    Selenium,
    Bromine,
    Krypton,
    Rubidium,
    Strontium,
    Yttrium,
    Zirconium,
    Niobium,
    Molybdenum,
    Technetium,
    Ruthenium,
    Rhodium,
    Palladium,
    Silver,
    Cadmium,
    Indium,
    Tin,
    Antimony,
    Tellurium,
    Iodine,
    Xenon,
    Cesium,
    Barium,
    Lanthanum,
    Cerium,
    Praseodymium,
    Neodymium,
    Promethium,
    Samarium,
    Europium,
    Gadolinium,
    Terbium,
    Dysprosium,
    Holmium,
    Erbium,
    Thulium,
    Ytterbium,
    Lutetium,
    Hafnium,
    Tantalum,
    Tungsten,
    Rhenium,
    Osmium,
    Iridium,
    Platinum,
    Gold,
    Mercury,
    Thallium,
    Lead,
    Bismuth,
    Polonium,
    Astatine,
    Radon,
    Francium,
    Radium,
    Actinium,
    Thorium,
    Protactinium,
    Uranium,
    Neptunium,
    Plutonium,
    Americium,
    Curium,
    Berkelium,
    Californium,
    Einsteinium,
    Fermium,
    Mendelevium,
    Nobelium,
    Lawrencium,
    Rutherfordium,
    Dubnium,
    Seaborgium,
    Bohrium,
    Hassium,
    Meitnerium,
    Darmstadtium,
    Roentgenium,
    Copernicium,
    Nihonium,
    Flerovium,
    Moscovium,
    Livermorium,
    Tennessine,
    Oganesson,
}
const_assert_eq!(Element::Oganesson as usize, 118);

impl Element {
    pub const MIN: Self = Element::Hydrogen; // 1
    pub const MAX: Self = Element::Oganesson; // 118

    pub fn from_atomic_number(n: u8) -> Option<Self> {
        if Self::MIN as u8 <= n && n <= Self::MAX as u8 {
            Some(unsafe { mem::transmute::<u8, Element>(n) })
        } else {
            None
        }
    }

    pub fn atomic_number(self) -> u8 {
        self as u8
    }
}

/// One row of periodic-table reference data.
///
/// `covalent_radius`/`vdw_radius` are `None` where the source data has no measured value
/// (several lanthanides, actinides and superheavy elements) — callers must treat this the same
/// way as an entirely unknown atomic number (see `ElementsTable::covalent_radius`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ElementInfo {
    pub atomic_number: u8,
    pub mass: f32,
    pub covalent_radius: Option<f32>,
    pub vdw_radius: Option<f32>,
    pub symbol: &'static str,
    pub name: &'static str,
}

const fn row(
    atomic_number: u8,
    mass: f32,
    covalent_radius: f32,
    vdw_radius: f32,
    symbol: &'static str,
    name: &'static str,
) -> ElementInfo {
    ElementInfo {
        atomic_number,
        mass,
        covalent_radius: if covalent_radius > 0.0 {
            Some(covalent_radius)
        } else {
            None
        },
        vdw_radius: if vdw_radius > 0.0 {
            Some(vdw_radius)
        } else {
            None
        },
        symbol,
        name,
    }
}

const ELEMENT_COUNT: usize = Element::MAX as usize + 1; // + the dummy entry at index 0

// The following lines mirror the element-data table this crate was seeded from, indexed by
// atomic number (index 0 is the "Dummy" placeholder used for unassigned atoms).
const ELEMENTS: [ElementInfo; ELEMENT_COUNT] = [
    row(0, 0.0, 0.0, 0.0, "Xx", "Dummy"),
    row(1, 1.008, 0.37, 1.2, "H", "Hydrogen"),
    row(2, 4.002602, 0.32, 1.4, "He", "Helium"),
    row(3, 6.94, 1.34, 2.2, "Li", "Lithium"),
    row(4, 9.012182, 0.90, 1.9, "Be", "Beryllium"),
    row(5, 10.81, 0.82, 1.8, "B", "Boron"),
    row(6, 12.011, 0.77, 1.7, "C", "Carbon"),
    row(7, 14.007, 0.75, 1.6, "N", "Nitrogen"),
    row(8, 15.999, 0.73, 1.55, "O", "Oxygen"),
    row(9, 18.9984032, 0.71, 1.5, "F", "Fluorine"),
    row(10, 20.1797, 0.69, 1.54, "Ne", "Neon"),
    row(11, 22.98976928, 1.54, 2.4, "Na", "Sodium"),
    row(12, 24.305, 1.30, 2.2, "Mg", "Magnesium"),
    row(13, 26.9815386, 1.18, 2.1, "Al", "Aluminium"),
    row(14, 28.085, 1.11, 2.1, "Si", "Silicon"),
    row(15, 30.973762, 1.06, 1.95, "P", "Phosphorus"),
    row(16, 32.06, 1.02, 1.8, "S", "Sulfur"),
    row(17, 35.45, 0.99, 1.8, "Cl", "Chlorine"),
    row(18, 39.948, 0.97, 1.88, "Ar", "Argon"),
    row(19, 39.0983, 1.96, 2.8, "K", "Potassium"),
    row(20, 40.078, 1.74, 2.4, "Ca", "Calcium"),
    row(21, 44.955912, 1.44, 2.3, "Sc", "Scandium"),
    row(22, 47.867, 1.36, 2.15, "Ti", "Titanium"),
    row(23, 50.9415, 1.25, 2.05, "V", "Vanadium"),
    row(24, 51.9961, 1.27, 2.05, "Cr", "Chromium"),
    row(25, 54.938045, 1.39, 2.05, "Mn", "Manganese"),
    row(26, 55.845, 1.25, 2.05, "Fe", "Iron"),
    row(27, 58.933195, 1.26, 2.0, "Co", "Cobalt"),
    row(28, 58.6934, 1.21, 2.0, "Ni", "Nickel"),
    row(29, 63.546, 1.38, 2.0, "Cu", "Copper"),
    row(30, 65.38, 1.31, 2.1, "Zn", "Zinc"),
    row(31, 69.723, 1.26, 2.1, "Ga", "Gallium"),
    row(32, 72.630, 1.22, 2.1, "Ge", "Germanium"),
    row(33, 74.92160, 1.19, 2.05, "As", "Arsenic"),
    row(34, 78.96, 1.16, 1.9, "Se", "Selenium"),
    row(35, 79.904, 1.14, 1.9, "Br", "Bromine"),
    row(36, 83.798, 1.10, 2.02, "Kr", "Krypton"),
    row(37, 85.4678, 2.11, 2.9, "Rb", "Rubidium"),
    row(38, 87.62, 1.92, 2.55, "Sr", "Strontium"),
    row(39, 88.90585, 1.62, 2.4, "Y", "Yttrium"),
    row(40, 91.224, 1.48, 2.3, "Zr", "Zirconium"),
    row(41, 92.90638, 1.37, 2.15, "Nb", "Niobium"),
    row(42, 95.96, 1.45, 2.1, "Mo", "Molybdenum"),
    row(43, 97.0, 1.56, 2.05, "Tc", "Technetium"),
    row(44, 101.07, 1.26, 2.05, "Ru", "Ruthenium"),
    row(45, 102.90550, 1.35, 2.0, "Rh", "Rhodium"),
    row(46, 106.42, 1.31, 2.05, "Pd", "Palladium"),
    row(47, 107.8682, 1.53, 2.1, "Ag", "Silver"),
    row(48, 112.411, 1.48, 2.2, "Cd", "Cadmium"),
    row(49, 114.818, 1.44, 2.2, "In", "Indium"),
    row(50, 118.710, 1.41, 2.25, "Sn", "Tin"),
    row(51, 121.760, 1.38, 2.2, "Sb", "Antimony"),
    row(52, 127.60, 1.35, 2.1, "Te", "Tellurium"),
    row(53, 126.90447, 1.33, 2.1, "I", "Iodine"),
    row(54, 131.293, 1.30, 2.16, "Xe", "Xenon"),
    row(55, 132.9054519, 2.25, 3.0, "Cs", "Cesium"),
    row(56, 137.327, 1.98, 2.7, "Ba", "Barium"),
    row(57, 138.90547, 1.69, 2.5, "La", "Lanthanum"),
    row(58, 140.116, 0.0, 2.48, "Ce", "Cerium"),
    row(59, 140.90765, 0.0, 2.47, "Pr", "Praseodymium"),
    row(60, 144.242, 0.0, 2.45, "Nd", "Neodymium"),
    row(61, 145.0, 0.0, 2.43, "Pm", "Promethium"),
    row(62, 150.36, 0.0, 2.42, "Sm", "Samarium"),
    row(63, 151.964, 0.0, 2.40, "Eu", "Europium"),
    row(64, 157.25, 0.0, 2.38, "Gd", "Gadolinium"),
    row(65, 158.92535, 0.0, 2.37, "Tb", "Terbium"),
    row(66, 162.500, 0.0, 2.35, "Dy", "Dysprosium"),
    row(67, 164.93032, 0.0, 2.33, "Ho", "Holmium"),
    row(68, 167.259, 0.0, 2.32, "Er", "Erbium"),
    row(69, 168.93421, 0.0, 2.30, "Tm", "Thulium"),
    row(70, 173.054, 0.0, 2.28, "Yb", "Ytterbium"),
    row(71, 174.9668, 1.60, 2.27, "Lu", "Lutetium"),
    row(72, 178.49, 1.50, 2.25, "Hf", "Hafnium"),
    row(73, 180.94788, 1.38, 2.2, "Ta", "Tantalum"),
    row(74, 183.84, 1.46, 2.1, "W", "Tungsten"),
    row(75, 186.207, 1.59, 2.05, "Re", "Rhenium"),
    row(76, 190.23, 1.28, 2.0, "Os", "Osmium"),
    row(77, 192.217, 1.37, 2.0, "Ir", "Iridium"),
    row(78, 195.084, 1.28, 2.05, "Pt", "Platinum"),
    row(79, 196.966569, 1.44, 2.1, "Au", "Gold"),
    row(80, 200.592, 1.49, 2.05, "Hg", "Mercury"),
    row(81, 204.38, 1.48, 2.2, "Tl", "Thallium"),
    row(82, 207.2, 1.47, 2.3, "Pb", "Lead"),
    row(83, 208.98040, 1.46, 2.3, "Bi", "Bismuth"),
    row(84, 209.0, 0.0, 2.0, "Po", "Polonium"),
    row(85, 210.0, 0.0, 2.0, "At", "Astatine"),
    row(86, 222.0, 1.45, 2.0, "Rn", "Radon"),
    row(87, 223.0, 0.0, 2.0, "Fr", "Francium"),
    row(88, 226.0, 0.0, 2.0, "Ra", "Radium"),
    row(89, 227.0, 0.0, 2.0, "Ac", "Actinium"),
    row(90, 232.03806, 0.0, 2.4, "Th", "Thorium"),
    row(91, 231.03588, 0.0, 2.0, "Pa", "Protactinium"),
    row(92, 238.02891, 0.0, 2.3, "U", "Uranium"),
    row(93, 237.0, 0.0, 2.0, "Np", "Neptunium"),
    row(94, 244.0, 0.0, 2.0, "Pu", "Plutonium"),
    row(95, 243.0, 0.0, 2.0, "Am", "Americium"),
    row(96, 247.0, 0.0, 2.0, "Cm", "Curium"),
    row(97, 247.0, 0.0, 2.0, "Bk", "Berkelium"),
    row(98, 251.0, 0.0, 2.0, "Cf", "Californium"),
    row(99, 252.0, 0.0, 2.0, "Es", "Einsteinium"),
    row(100, 257.0, 0.0, 2.0, "Fm", "Fermium"),
    row(101, 258.0, 0.0, 2.0, "Md", "Mendelevium"),
    row(102, 259.0, 0.0, 2.0, "No", "Nobelium"),
    row(103, 262.0, 0.0, 2.0, "Lr", "Lawrencium"),
    row(104, 267.0, 0.0, 2.0, "Rf", "Rutherfordium"),
    row(105, 270.0, 0.0, 2.0, "Db", "Dubnium"),
    row(106, 271.0, 0.0, 2.0, "Sg", "Seaborgium"),
    row(107, 270.0, 0.0, 2.0, "Bh", "Bohrium"),
    row(108, 277.0, 0.0, 2.0, "Hs", "Hassium"),
    row(109, 276.0, 0.0, 2.0, "Mt", "Meitnerium"),
    row(110, 281.0, 0.0, 0.0, "Ds", "Darmstadtium"),
    row(111, 282.0, 0.0, 0.0, "Rg", "Roentgenium"),
    row(112, 285.0, 0.0, 0.0, "Cn", "Copernicium"),
    row(113, 285.0, 0.0, 0.0, "Nh", "Nihonium"),
    row(114, 289.0, 0.0, 0.0, "Fl", "Flerovium"),
    row(115, 289.0, 0.0, 0.0, "Mc", "Moscovium"),
    row(116, 293.0, 0.0, 0.0, "Lv", "Livermorium"),
    row(117, 294.0, 0.0, 0.0, "Ts", "Tennessine"),
    row(118, 294.0, 0.0, 0.0, "Og", "Oganesson"),
];

/// The built-in, immutable periodic table. Cheap to construct (it wraps a `const` array); callers
/// typically build one instance and share it by reference.
#[derive(Debug, Copy, Clone)]
pub struct PeriodicTable {
    rows: &'static [ElementInfo; ELEMENT_COUNT],
}

impl PeriodicTable {
    pub fn new() -> Self {
        Self { rows: &ELEMENTS }
    }

    /// Looks up reference data by atomic number. Returns `None` for `0` (the dummy entry) and
    /// for numbers outside the table.
    pub fn get(&self, atomic_number: u8) -> Option<&'static ElementInfo> {
        if atomic_number == 0 {
            return None;
        }
        self.rows.get(atomic_number as usize)
    }

    /// Covalent radius in angstroms, or `None` if `atomic_number` is unknown or unmeasured.
    ///
    /// This is the function the element-distance bond guesser calls to reject atoms with an
    /// "unknown atomic number" (spec §4.6); a `0` covalent number or an entry with no measured
    /// radius are both treated as unknown.
    pub fn covalent_radius(&self, atomic_number: u8) -> Option<f32> {
        self.get(atomic_number).and_then(|e| e.covalent_radius)
    }

    pub fn vdw_radius(&self, atomic_number: u8) -> Option<f32> {
        self.get(atomic_number).and_then(|e| e.vdw_radius)
    }

    pub fn symbol(&self, atomic_number: u8) -> Option<&'static str> {
        self.get(atomic_number).map(|e| e.symbol)
    }

    pub fn name(&self, atomic_number: u8) -> Option<&'static str> {
        self.get(atomic_number).map(|e| e.name)
    }

    pub fn mass(&self, atomic_number: u8) -> Option<f32> {
        self.get(atomic_number).map(|e| e.mass)
    }

    pub fn max_covalent_radius(&self) -> f32 {
        self.rows
            .iter()
            .filter_map(|e| e.covalent_radius)
            .fold(0.0_f32, f32::max)
    }

    pub fn max_vdw_radius(&self) -> f32 {
        self.rows
            .iter()
            .filter_map(|e| e.vdw_radius)
            .fold(0.0_f32, f32::max)
    }
}

impl Default for PeriodicTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_atomic_number_round_trips() {
        assert_eq!(Element::from_atomic_number(6), Some(Element::Carbon));
        assert_eq!(Element::from_atomic_number(118), Some(Element::Oganesson));
        assert_eq!(Element::from_atomic_number(0), None);
        assert_eq!(Element::from_atomic_number(119), None);
    }

    #[test]
    fn carbon_covalent_radius() {
        let table = PeriodicTable::new();
        assert_eq!(table.covalent_radius(6), Some(0.77));
        assert_eq!(table.symbol(30), Some("Zn"));
    }

    #[test]
    fn dummy_and_out_of_range_are_unknown() {
        let table = PeriodicTable::new();
        assert_eq!(table.covalent_radius(0), None);
        assert_eq!(table.covalent_radius(255), None);
    }

    #[test]
    fn unmeasured_lanthanide_radius_is_none() {
        // Cerium (58) has no measured covalent radius in the source table.
        let table = PeriodicTable::new();
        assert_eq!(table.covalent_radius(58), None);
        assert_eq!(table.vdw_radius(58), Some(2.48));
    }
}
