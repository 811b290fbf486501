// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Uniform-grid neighbour search over a fixed point set (typically one frame's atom
//! coordinates). Cells are kept in a hash map rather than a dense array: only occupied cells
//! ever hold points, so touching "every interior cell" the original grid iterated is equivalent
//! to touching every key this map actually has.

use rustc_hash::FxHashMap;
use ultraviolet::Vec3;

type CellIndex = (i32, i32, i32);

pub struct SpatialIndex<'a> {
    points: &'a [Vec3],
    cell_size: f32,
    origin: Vec3,
    max_clamp: CellIndex,
    cells: FxHashMap<CellIndex, Vec<usize>>,
}

impl<'a> SpatialIndex<'a> {
    /// Builds the grid over `points` with a desired cell edge length of `cell_size`. The grid is
    /// padded by one cell on every side so boundary queries never need special-casing, and the
    /// cell size is silently grown if it would otherwise produce more than 100 cells along the
    /// largest spanning extent.
    pub fn new(points: &'a [Vec3], cell_size: f32) -> Self {
        if points.is_empty() {
            return Self {
                points,
                cell_size: cell_size.max(f32::MIN_POSITIVE),
                origin: Vec3::zero(),
                max_clamp: (1, 1, 1),
                cells: FxHashMap::default(),
            };
        }

        let mut min = Vec3::broadcast(f32::INFINITY);
        let mut max = Vec3::broadcast(f32::NEG_INFINITY);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        let max_edge = max.x.max(max.y).max(max.z) - min.x.min(min.y).min(min.z);
        let cell_size = if max_edge / cell_size > 100.0 {
            max_edge / 100.0
        } else {
            cell_size
        };

        let origin = min - Vec3::broadcast(cell_size);
        let max_clamp = Self::raw_index(origin, cell_size, max);

        let mut cells: FxHashMap<CellIndex, Vec<usize>> = FxHashMap::default();
        for (i, p) in points.iter().enumerate() {
            let cell = Self::clamp_cell(Self::raw_index(origin, cell_size, *p), max_clamp);
            cells.entry(cell).or_default().push(i);
        }

        Self {
            points,
            cell_size,
            origin,
            max_clamp,
            cells,
        }
    }

    fn raw_index(origin: Vec3, cell_size: f32, p: Vec3) -> CellIndex {
        let rel = (p - origin) / cell_size;
        (rel.x.floor() as i32, rel.y.floor() as i32, rel.z.floor() as i32)
    }

    fn clamp_cell(cell: CellIndex, max_clamp: CellIndex) -> CellIndex {
        (
            cell.0.clamp(1, max_clamp.0),
            cell.1.clamp(1, max_clamp.1),
            cell.2.clamp(1, max_clamp.2),
        )
    }

    fn clamped_index(&self, p: Vec3) -> CellIndex {
        Self::clamp_cell(Self::raw_index(self.origin, self.cell_size, p), self.max_clamp)
    }

    fn num_layers(&self, distance: f32) -> i32 {
        (distance / self.cell_size).floor() as i32 + 1
    }

    /// Every unordered point-index pair closer than `distance`, as `(i, j, d_squared)` with
    /// `i > j`. The squared distance is returned so callers can avoid a redundant `sqrt`.
    pub fn pairs(&self, distance: f32) -> Vec<(usize, usize, f32)> {
        let layers = self.num_layers(distance);
        let distance2 = distance * distance;
        let mut result = Vec::new();

        for (&cell, here) in &self.cells {
            for dz in -layers..=layers {
                for dy in -layers..=layers {
                    for dx in -layers..=layers {
                        let neighbour_cell = (cell.0 + dx, cell.1 + dy, cell.2 + dz);
                        let Some(there) = self.cells.get(&neighbour_cell) else {
                            continue;
                        };
                        for &i in here {
                            for &j in there {
                                if i <= j {
                                    continue;
                                }
                                let d2 = (self.points[i] - self.points[j]).mag_sq();
                                if d2 <= distance2 {
                                    result.push((i, j, d2));
                                }
                            }
                        }
                    }
                }
            }
        }

        result
    }

    /// Every point index within `distance` of point `query`, including `query` itself.
    pub fn query(&self, query: usize, distance: f32) -> Vec<usize> {
        let layers = self.num_layers(distance);
        let distance2 = distance * distance;
        let point = self.points[query];
        let point_cell = self.clamped_index(point);
        let mut result = Vec::new();

        for dz in -layers..=layers {
            for dy in -layers..=layers {
                for dx in -layers..=layers {
                    let neighbour_cell = (point_cell.0 + dx, point_cell.1 + dy, point_cell.2 + dz);
                    let Some(there) = self.cells.get(&neighbour_cell) else {
                        continue;
                    };
                    for &j in there {
                        if (self.points[j] - point).mag_sq() <= distance2 {
                            result.push(j);
                        }
                    }
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_finds_close_points_and_dedupes() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.5, 0.0, 0.0),
            Vec3::new(10.0, 10.0, 10.0),
        ];
        let index = SpatialIndex::new(&points, 1.0);
        let found = index.pairs(1.0);
        assert_eq!(found.len(), 1);
        let (i, j, d2) = found[0];
        assert_eq!((i, j), (1, 0));
        assert!((d2 - 0.25).abs() < 1e-6);
    }

    #[test]
    fn query_includes_self() {
        let points = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.2, 0.0, 0.0)];
        let index = SpatialIndex::new(&points, 1.0);
        let mut hits = index.query(0, 0.5);
        hits.sort_unstable();
        assert_eq!(hits, vec![0, 1]);
    }

    #[test]
    fn oversized_cell_request_is_capped() {
        let points: Vec<Vec3> = (0..5).map(|i| Vec3::new(i as f32 * 100.0, 0.0, 0.0)).collect();
        let index = SpatialIndex::new(&points, 0.001);
        assert!(index.cell_size > 0.001);
    }

    #[test]
    fn empty_point_set_has_no_pairs() {
        let points: Vec<Vec3> = Vec::new();
        let index = SpatialIndex::new(&points, 1.0);
        assert!(index.pairs(5.0).is_empty());
    }
}
