//! Curvature bookkeeping for parallel pathways
//!
//! Several pathways may join the same two stops (stairs next to an elevator,
//! or one pathway per direction). Drawn straight they would overlap, so each
//! further edge on a pair gets a larger roundness and the renderer fans them out.
//!
//! Keys are direction qualified: the lower stop id comes first and the tag
//! records which way the edge runs. The first edge on a pair registers both
//! directions at level 0. Any later edge, whichever way it runs, is placed one
//! level above the highest level already recorded on the pair.

use std::collections::HashMap;
use crate::models::StopId;

/// Which way an edge runs relative to its canonical (lower id first) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum DirectionTag {
    Forward,
    Reverse,
}

impl DirectionTag {
    const fn mirrored(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PairKey {
    low: StopId,
    high: StopId,
    tag: DirectionTag,
}

impl PairKey {
    /// Key for an edge running `from -> to`; an edge running the other way
    /// shares `low`/`high` and gets the mirrored tag
    fn canonical(from: StopId, to: StopId) -> Self {
        if from > to {
            Self { low: to, high: from, tag: DirectionTag::Reverse }
        } else {
            Self { low: from, high: to, tag: DirectionTag::Forward }
        }
    }

    const fn mirrored(self) -> Self {
        Self { tag: self.tag.mirrored(), ..self }
    }
}

/// Session-wide record of how many curvature levels each stop pair uses
#[derive(Debug, Clone, Default)]
pub struct CurvatureRegistry {
    levels: HashMap<PairKey, u32>,
}

impl CurvatureRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one more edge between `from` and `to` and return its level.
    /// The first edge on a pair gets level 0; each further edge on the same
    /// unordered pair gets the next level.
    pub fn next_level(&mut self, from: StopId, to: StopId) -> u32 {
        let key = PairKey::canonical(from, to);
        let mirror = key.mirrored();

        let Some(&current) = self.levels.get(&key) else {
            self.levels.insert(key, 0);
            self.levels.insert(mirror, 0);
            return 0;
        };

        let highest = self.levels.get(&mirror).map_or(current, |&m| m.max(current));
        let level = highest + 1;
        self.levels.insert(key, level);
        level
    }

    /// Roundness for the next edge on the pair
    pub fn next_roundness(&mut self, from: StopId, to: StopId, step: f64) -> f64 {
        f64::from(self.next_level(from, to)) * step
    }

    /// Highest level handed out on the unordered pair, if any edge was registered
    #[must_use]
    pub fn level_of(&self, from: StopId, to: StopId) -> Option<u32> {
        let key = PairKey::canonical(from, to);
        let forward = self.levels.get(&key).copied()?;
        Some(self.levels.get(&key.mirrored()).map_or(forward, |&m| m.max(forward)))
    }

    /// Number of distinct stop pairs seen
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.levels.len() / 2
    }

    pub fn clear(&mut self) {
        self.levels.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_edge_is_straight() {
        let mut registry = CurvatureRegistry::new();
        assert_eq!(registry.next_level(5, 7), 0);
        assert_eq!(registry.pair_count(), 1);
    }

    #[test]
    fn test_same_direction_levels_increase() {
        let mut registry = CurvatureRegistry::new();
        let levels: Vec<u32> = (0..4).map(|_| registry.next_level(5, 7)).collect();
        assert_eq!(levels, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_direction_swap_continues_sequence() {
        let mut registry = CurvatureRegistry::new();
        assert_eq!(registry.next_level(5, 7), 0);
        assert_eq!(registry.next_level(7, 5), 1);
        assert_eq!(registry.next_level(5, 7), 2);
        assert_eq!(registry.next_level(7, 5), 3);
        assert_eq!(registry.level_of(7, 5), Some(3));
    }

    #[test]
    fn test_reverse_first_is_straight() {
        let mut registry = CurvatureRegistry::new();
        assert_eq!(registry.next_level(9, 2), 0);
        assert_eq!(registry.next_level(2, 9), 1);
    }

    #[test]
    fn test_unrelated_pairs_are_independent() {
        let mut registry = CurvatureRegistry::new();
        assert_eq!(registry.next_level(5, 7), 0);
        assert_eq!(registry.next_level(5, 8), 0);
        assert_eq!(registry.next_level(7, 8), 0);
        assert_eq!(registry.next_level(7, 5), 1);
        assert_eq!(registry.pair_count(), 3);
        assert_eq!(registry.level_of(1, 2), None);
    }

    #[test]
    fn test_roundness_uses_step() {
        let mut registry = CurvatureRegistry::new();
        assert_eq!(registry.next_roundness(1, 2, 0.2), 0.0);
        assert!((registry.next_roundness(2, 1, 0.2) - 0.2).abs() < 1e-9);
        assert!((registry.next_roundness(1, 2, 0.2) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_clear() {
        let mut registry = CurvatureRegistry::new();
        registry.next_level(1, 2);
        registry.next_level(1, 2);
        registry.clear();
        assert_eq!(registry.pair_count(), 0);
        assert_eq!(registry.next_level(1, 2), 0);
    }
}
