//! Terminal collision classification

use super::state::{CollisionOutcome, TerrainId};

/// Landing on the designated zone wins; any other terrain loses
pub fn classify(terrain: TerrainId, landing_zone: TerrainId) -> CollisionOutcome {
    if terrain == landing_zone {
        CollisionOutcome::Success
    } else {
        CollisionOutcome::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_zone_is_success() {
        assert_eq!(
            classify(TerrainId::LANDING_ZONE, TerrainId::LANDING_ZONE),
            CollisionOutcome::Success
        );
    }

    #[test]
    fn test_other_terrain_is_failure() {
        assert_eq!(
            classify(TerrainId::GROUND, TerrainId::LANDING_ZONE),
            CollisionOutcome::Failure
        );
        assert_eq!(
            classify(TerrainId(99), TerrainId::LANDING_ZONE),
            CollisionOutcome::Failure
        );
    }
}
