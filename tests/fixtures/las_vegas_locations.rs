//! Real Las Vegas / Henderson addresses for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap via Overpass API.

use route_optimizer::Location;

/// A named place with known coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    /// The place as an unresolved address, as a user would enter it.
    pub fn address(&self, id: u64) -> Location {
        Location::new(id, self.name)
    }

    pub fn resolved(&self, id: u64) -> Location {
        Location::resolved(id, self.name, self.lat, self.lng)
    }
}

pub const DEPOT: Place = Place::new("Wynn Las Vegas", 36.1263781, -115.1658180);

// ============================================================================
// Strip stops (dense, good for exact search)
// ============================================================================

pub const STRIP_STOPS: &[Place] = &[
    Place::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Place::new("Sinatra", 36.1300035, -115.1654850),
    Place::new("Brooklyn Bowl", 36.1175388, -115.1695094),
    Place::new("Gordon Ramsay BurGR", 36.1107195, -115.1720818),
    Place::new("Spago by Wolfgang Puck", 36.1139368, -115.1741462),
    Place::new("Rao's", 36.1163982, -115.1763053),
    Place::new("Il Fornaio", 36.1024474, -115.1740110),
    Place::new("Charlie Palmer Steak", 36.0910624, -115.1743364),
];

// ============================================================================
// Spread-out stops (forces the heuristic)
// ============================================================================

pub const VALLEY_STOPS: &[Place] = &[
    Place::new("I Love Sushi Henderson", 35.9916660, -115.1028343),
    Place::new("Islander's Grill", 36.0335058, -114.9856162),
    Place::new("Naga", 36.0137634, -114.9928676),
    Place::new("RibCage", 35.9949754, -115.0999810),
    Place::new("Green Valley Ranch Area", 36.0308, -115.0825),
    Place::new("Sunset Station Area", 36.0614, -115.0631),
    Place::new("Rivas Mexican Grill North", 36.1450055, -115.0482587),
    Place::new("Monarca Mexican Restaurant", 36.1440711, -115.0634197),
    Place::new("Beers and Bets", 36.1428945, -115.1573836),
    Place::new("Buffalo Wild Wings South", 36.0543044, -115.1714860),
    Place::new("Bootlegger Bistro", 36.0492047, -115.1715744),
    Place::new("Longhorn Casino", 36.1070664, -115.0591256),
    Place::new("MGM Grand", 36.1023654, -115.1688720),
];
