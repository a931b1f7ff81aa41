//! Floor generation parameters.

use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::{
    MAX_PLACEMENT_ATTEMPTS, MAX_ROOM_HEIGHT, MAX_ROOM_WIDTH, MIN_ROOM_SIDE, SECTORS_HIGH,
    SECTORS_WIDE,
};

/// Parameters for generating one floor
///
/// Fixed for the lifetime of a generation run. `floor_index` is
/// zero-based; the deepest floor is `total_floors - 1` and gets no down
/// stairway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorSpec {
    pub floor_index: usize,
    pub total_floors: usize,
    pub width: usize,
    pub height: usize,
    pub min_room_side: usize,
    pub max_room_width: usize,
    pub max_room_height: usize,
    /// Retry budget for each accept/reject placement search
    pub max_placement_attempts: u32,
}

impl FloorSpec {
    /// Create a spec with the standard room size limits
    pub fn new(floor_index: usize, total_floors: usize, width: usize, height: usize) -> Self {
        Self {
            floor_index,
            total_floors,
            width,
            height,
            min_room_side: MIN_ROOM_SIDE,
            max_room_width: MAX_ROOM_WIDTH,
            max_room_height: MAX_ROOM_HEIGHT,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Width of one sector column
    pub fn sector_width(&self) -> usize {
        self.width / SECTORS_WIDE
    }

    /// Height of one sector row
    pub fn sector_height(&self) -> usize {
        self.height / SECTORS_HIGH
    }

    /// Number of sectors on a floor
    pub fn sector_count(&self) -> usize {
        SECTORS_WIDE * SECTORS_HIGH
    }

    /// Check if this floor is the deepest one (no down stairway)
    pub fn is_deepest(&self) -> bool {
        self.floor_index + 1 == self.total_floors
    }

    /// Check that rooms and stairways can be placed at all
    ///
    /// The smallest allowed room plus its one-tile margin must fit in
    /// every sector, otherwise the placement search has no candidate
    /// positions to draw from.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.total_floors == 0 {
            return Err(GenError::InvalidConfiguration {
                reason: "a dungeon needs at least one floor".to_string(),
            });
        }
        if self.floor_index >= self.total_floors {
            return Err(GenError::InvalidConfiguration {
                reason: format!(
                    "floor index {} out of range for {} floors",
                    self.floor_index, self.total_floors
                ),
            });
        }
        if self.min_room_side == 0 {
            return Err(GenError::InvalidConfiguration {
                reason: "rooms must be at least one tile on a side".to_string(),
            });
        }
        if self.max_room_width < self.min_room_side || self.max_room_height < self.min_room_side {
            return Err(GenError::InvalidConfiguration {
                reason: format!(
                    "room size limits {}x{} are below the minimum side {}",
                    self.max_room_width, self.max_room_height, self.min_room_side
                ),
            });
        }
        if self.max_placement_attempts == 0 {
            return Err(GenError::InvalidConfiguration {
                reason: "placement needs a nonzero retry budget".to_string(),
            });
        }

        let needed = self.min_room_side + 2;
        if self.sector_width() < needed || self.sector_height() < needed {
            return Err(GenError::InvalidConfiguration {
                reason: format!(
                    "{}x{} sectors cannot hold a {}-tile room with margin (need {}x{})",
                    self.sector_width(),
                    self.sector_height(),
                    self.min_room_side,
                    needed,
                    needed
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_spec_is_valid() {
        assert!(FloorSpec::new(0, 1, 30, 20).validate().is_ok());
        assert!(FloorSpec::new(2, 5, 80, 21).validate().is_ok());
    }

    #[test]
    fn test_undersized_floor_is_rejected() {
        let narrow = FloorSpec::new(0, 1, 21, 20);
        assert!(matches!(
            narrow.validate(),
            Err(GenError::InvalidConfiguration { .. })
        ));

        let short = FloorSpec::new(0, 1, 30, 14);
        assert!(matches!(
            short.validate(),
            Err(GenError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_floor_index_out_of_range_is_rejected() {
        let spec = FloorSpec::new(3, 3, 30, 20);
        assert!(matches!(
            spec.validate(),
            Err(GenError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_zero_floors_is_rejected() {
        let spec = FloorSpec::new(0, 0, 30, 20);
        assert!(matches!(
            spec.validate(),
            Err(GenError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_inverted_room_limits_are_rejected() {
        let mut spec = FloorSpec::new(0, 1, 30, 20);
        spec.max_room_height = spec.min_room_side - 1;
        assert!(matches!(
            spec.validate(),
            Err(GenError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_deepest_floor() {
        assert!(FloorSpec::new(0, 1, 30, 20).is_deepest());
        assert!(FloorSpec::new(2, 3, 30, 20).is_deepest());
        assert!(!FloorSpec::new(1, 3, 30, 20).is_deepest());
    }

    #[test]
    fn test_sector_dimensions() {
        let spec = FloorSpec::new(0, 1, 80, 21);
        assert_eq!(spec.sector_width(), 26);
        assert_eq!(spec.sector_height(), 10);
        assert_eq!(spec.sector_count(), 6);
    }
}
