// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Outer-iteration partitioner.

/// Skips all but one out of `parts` outer iterations. Useful to split a long
/// run into independently-executed slices, to profile a fraction of the
/// work, or to feed PGO; the selected slice is chosen by the starting
/// offset.
#[derive(Debug, Clone)]
pub struct Divider {
    counter: u32,
    parts: u32,
}

impl Divider {
    pub fn new(start: u32, parts: u32) -> Self {
        Self {
            counter: start,
            parts,
        }
    }

    /// True when the current iteration belongs to another slice.
    pub fn skip(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.parts {
            self.counter = 0;
        }
        self.counter != 0
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_part_never_skips() {
        let mut div = Divider::default();
        assert!((0..10).all(|_| !div.skip()));
    }

    #[test]
    fn test_parts_partition_iterations() {
        let mut kept: Vec<usize> = (0..3)
            .flat_map(|part| {
                let mut div = Divider::new(part, 3);
                (0..9).filter(move |_| !div.skip()).collect::<Vec<_>>()
            })
            .collect();

        // each of the 9 iterations kept by exactly one of the 3 slices
        kept.sort_unstable();
        assert_eq!(kept, (0..9).collect::<Vec<_>>());
    }
}
