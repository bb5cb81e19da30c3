//! Named buildings offered by the simulation service.
//!
//! The service accepts any building name; the five below are the ones it
//! publishes.  Unknown names are kept verbatim in [`Building::Custom`] so new
//! buildings work without a code change.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Published size of a catalog building.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BuildingShape {
    pub floors:    u32,
    pub elevators: u32,
    pub turns:     u32,
    /// Passenger arrivals cluster around rush hours.
    pub clustered: bool,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Building {
    #[default]
    TinyRandom,
    MediumRandom,
    BigRandom,
    BigClustered,
    SkyTower,
    Custom(String),
}

impl Building {
    pub const CATALOG: [Building; 5] = [
        Building::TinyRandom,
        Building::MediumRandom,
        Building::BigRandom,
        Building::BigClustered,
        Building::SkyTower,
    ];

    /// The name sent as `building_name` when opening a session.
    pub fn as_str(&self) -> &str {
        match self {
            Building::TinyRandom   => "tiny_random",
            Building::MediumRandom => "medium_random",
            Building::BigRandom    => "big_random",
            Building::BigClustered => "big_clustered",
            Building::SkyTower     => "85_sky_tower",
            Building::Custom(name) => name.as_str(),
        }
    }

    /// Published shape, or `None` for custom buildings.
    pub fn shape(&self) -> Option<BuildingShape> {
        let (floors, elevators, turns, clustered) = match self {
            Building::TinyRandom   => (10, 2, 30, false),
            Building::MediumRandom => (20, 4, 80, false),
            Building::BigRandom    => (25, 8, 500, false),
            Building::BigClustered => (25, 8, 500, true),
            Building::SkyTower     => (50, 8, 1_000, true),
            Building::Custom(_)    => return None,
        };
        Some(BuildingShape { floors, elevators, turns, clustered })
    }
}

impl FromStr for Building {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Ok(Building::CATALOG
            .into_iter()
            .find(|b| b.as_str() == name)
            .unwrap_or_else(|| Building::Custom(name.to_owned())))
    }
}

impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
