//! Real Legazpi City evacuation sites for realistic test fixtures.
//!
//! Schools, gyms, and covered courts that appear in the city's Mayon
//! contingency plans, grouped by district. Coordinates sourced from
//! OpenStreetMap; they are real, routable locations on the Philippines
//! extract.

use evac_routes::types::{CenterStatus, EvacuationCenter, Point, WaySegment};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> Point {
        Point::new(self.lat, self.lng)
    }
}

/// Legazpi City Hall, the usual test origin.
pub fn city_hall() -> Point {
    Point::new(13.1391, 123.7438)
}

// ============================================================================
// Albay District (old town, southwest city center)
// ============================================================================

pub const ALBAY_DISTRICT_SITES: &[Location] = &[
    Location::new("Legazpi City Astrodome", 13.1394, 123.7277),
    Location::new("Ibalong Centrum for Recreation", 13.1411, 123.7263),
    Location::new("Albay Central School", 13.1376, 123.7255),
    Location::new("Legazpi City Science High School", 13.1349, 123.7288),
    Location::new("Bicol University Main Campus Gym", 13.1437, 123.7246),
    Location::new("St. Agnes Academy Covered Court", 13.1389, 123.7300),
    Location::new("Penaranda Park Covered Court", 13.1371, 123.7237),
];

// ============================================================================
// Port District (downtown and waterfront)
// ============================================================================

pub const PORT_DISTRICT_SITES: &[Location] = &[
    Location::new("Legazpi Port District Central School", 13.1457, 123.7497),
    Location::new("Victory Village Elementary School", 13.1419, 123.7480),
    Location::new("Bitano Elementary School", 13.1392, 123.7519),
    Location::new("Em's Barrio Elementary School", 13.1498, 123.7468),
    Location::new("Lapu-lapu Elementary School", 13.1513, 123.7449),
    Location::new("Legazpi City High School", 13.1448, 123.7453),
];

// ============================================================================
// North Coast (Rawis, Arimbay, Bigaa, San Joaquin)
// ============================================================================

pub const NORTH_COAST_SITES: &[Location] = &[
    Location::new("Pag-asa National High School", 13.1645, 123.7452),
    Location::new("Rawis Elementary School", 13.1621, 123.7478),
    Location::new("University of Santo Tomas-Legazpi Gym", 13.1607, 123.7464),
    Location::new("Arimbay Elementary School", 13.1684, 123.7408),
    Location::new("Bigaa Elementary School", 13.1736, 123.7531),
    Location::new("San Joaquin Elementary School", 13.1792, 123.7561),
];

// ============================================================================
// West Side (Daraga and west Legazpi barangays)
// ============================================================================

pub const WEST_SITES: &[Location] = &[
    Location::new("Daraga National High School", 13.1486, 123.7125),
    Location::new("Daraga North Central School", 13.1516, 123.7103),
    Location::new("Penafrancia Covered Court", 13.1467, 123.7152),
    Location::new("Banag Elementary School", 13.1557, 123.7198),
    Location::new("Estanza Elementary School", 13.1570, 123.7214),
];

// ============================================================================
// South Upland (Taysan, Banquerohan, Homapon)
// ============================================================================

pub const SOUTH_UPLAND_SITES: &[Location] = &[
    Location::new("Taysan Elementary School", 13.1173, 123.7289),
    Location::new("Banquerohan National High School", 13.1014, 123.6889),
    Location::new("Banquerohan Resettlement Site Hall", 13.0994, 123.6864),
    Location::new("Homapon Elementary School", 13.0904, 123.7551),
    Location::new("Mariawa Barangay Hall", 13.1082, 123.7121),
    Location::new("Buenavista Elementary School", 13.0867, 123.7210),
];

// ============================================================================
// All Sites Combined
// ============================================================================

/// Returns all evacuation sites as one list.
pub fn all_sites() -> Vec<Location> {
    let mut all = Vec::with_capacity(32);
    all.extend_from_slice(ALBAY_DISTRICT_SITES);
    all.extend_from_slice(PORT_DISTRICT_SITES);
    all.extend_from_slice(NORTH_COAST_SITES);
    all.extend_from_slice(WEST_SITES);
    all.extend_from_slice(SOUTH_UPLAND_SITES);
    all
}

/// Builds evacuation center records for every site, all open with room.
pub fn evacuation_centers() -> Vec<EvacuationCenter> {
    all_sites()
        .iter()
        .enumerate()
        .map(|(index, site)| EvacuationCenter {
            id: format!("ec-{}", index + 1),
            name: site.name.to_string(),
            lat: site.lat,
            lng: site.lng,
            capacity: 300,
            current_occupancy: 0,
            status: CenterStatus::Open,
            contact_person: None,
            contact_number: None,
        })
        .collect()
}

// ============================================================================
// City Boundary
// ============================================================================

/// A simplified city boundary as four member ways, in order. The last
/// point of "upland-west" meets the first point of "coastal-north", so
/// stitching the set yields one already-closed loop.
pub fn boundary_segments() -> Vec<WaySegment> {
    let corners = boundary_corners();
    vec![
        WaySegment::new("coastal-north", vec![corners[0], corners[1], corners[2]]),
        WaySegment::new("coastal-south", vec![corners[2], corners[3], corners[4]]),
        WaySegment::new("upland-south", vec![corners[4], corners[5], corners[6]]),
        WaySegment::new("upland-west", vec![corners[6], corners[7], corners[0]]),
    ]
}

/// The eight corner points of the simplified boundary, counterclockwise
/// from the northwest.
pub fn boundary_corners() -> Vec<Point> {
    vec![
        Point::new(13.190, 123.720),
        Point::new(13.185, 123.760),
        Point::new(13.150, 123.770),
        Point::new(13.120, 123.760),
        Point::new(13.080, 123.740),
        Point::new(13.085, 123.700),
        Point::new(13.120, 123.680),
        Point::new(13.160, 123.690),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_count() {
        let all = all_sites();
        assert!(all.len() >= 25, "should have at least 25 sites, got {}", all.len());
    }

    #[test]
    fn test_coordinates_in_albay_area() {
        for site in all_sites() {
            assert!(
                site.lat > 13.05 && site.lat < 13.20,
                "{} lat out of range: {}",
                site.name,
                site.lat
            );
            assert!(
                site.lng > 123.65 && site.lng < 123.80,
                "{} lng out of range: {}",
                site.name,
                site.lng
            );
        }
    }

    #[test]
    fn test_boundary_ways_share_endpoints() {
        let segments = boundary_segments();
        for pair in segments.windows(2) {
            let (_, first_end) = pair[0].endpoints().unwrap();
            let (second_start, _) = pair[1].endpoints().unwrap();
            assert_eq!(first_end, second_start);
        }
    }
}
