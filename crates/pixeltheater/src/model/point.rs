use crate::constants::{MAX_NEIGHBORS, NEIGHBOR_THRESHOLD};
use glam::Vec3;

/// One neighbor entry: the id of a nearby point and the Euclidean distance to it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Neighbor {
    pub point_id: u16,
    pub distance: f32,
}

/// Up to [`MAX_NEIGHBORS`] neighbors, sorted ascending by distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Neighbors {
    entries: [Neighbor; MAX_NEIGHBORS],
    count: u8,
}

impl Neighbors {
    pub fn as_slice(&self) -> &[Neighbor] {
        &self.entries[..self.count as usize]
    }

    pub fn len(&self) -> usize {
        self.count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn contains(&self, point_id: u16) -> bool {
        self.as_slice().iter().any(|n| n.point_id == point_id)
    }

    /// Replace the neighbor set, dropping anything beyond [`NEIGHBOR_THRESHOLD`],
    /// sorting ascending by distance, and truncating at [`MAX_NEIGHBORS`] entries.
    pub fn set(&mut self, mut candidates: Vec<Neighbor>) {
        candidates.retain(|n| n.distance <= NEIGHBOR_THRESHOLD);
        candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        candidates.truncate(MAX_NEIGHBORS);
        self.entries = [Neighbor::default(); MAX_NEIGHBORS];
        self.count = candidates.len() as u8;
        for (slot, candidate) in self.entries.iter_mut().zip(candidates) {
            *slot = candidate;
        }
    }
}

/// Immutable geometric record for one LED, produced once at model build time.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    pub id: u16,
    pub face_id: u8,
    pub position: Vec3,
    pub neighbors: Neighbors,
}

impl Point {
    pub fn new(id: u16, face_id: u8, x: f32, y: f32, z: f32) -> Self {
        Self {
            id,
            face_id,
            position: Vec3::new(x, y, z),
            neighbors: Neighbors::default(),
        }
    }

    pub fn distance_to(&self, other: &Point) -> f32 {
        self.position.distance(other.position)
    }

    pub fn is_neighbor(&self, point_id: u16) -> bool {
        self.neighbors.contains(point_id)
    }

    pub fn set_neighbors(&mut self, candidates: Vec<Neighbor>) {
        self.neighbors.set(candidates);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_is_euclidean() {
        let a = Point::new(0, 0, 0.0, 0.0, 0.0);
        let b = Point::new(1, 0, 3.0, 4.0, 0.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn neighbors_sorted_and_truncated() {
        let mut p = Point::new(0, 0, 0.0, 0.0, 0.0);
        let candidates = (0..10)
            .map(|i| Neighbor {
                point_id: i,
                distance: (10 - i) as f32,
            })
            .collect();
        p.set_neighbors(candidates);
        assert_eq!(p.neighbors.len(), MAX_NEIGHBORS);
        let distances: Vec<f32> = p.neighbors.as_slice().iter().map(|n| n.distance).collect();
        let mut sorted = distances.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(distances, sorted);
    }
}
