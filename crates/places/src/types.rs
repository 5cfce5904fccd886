use serde::{Deserialize, Serialize};

/// Category of a place as reported by the search provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceType {
    /// A campground, reservable through recreation.gov or Reserve California
    Campground,
    /// A trailhead gated by a wilderness permit
    Trailhead,
}

/// Category of trip currently being planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripType {
    /// Camping trip, searches campgrounds
    Camp,
    /// Hiking trip, searches trailheads
    Hike,
}

impl TripType {
    /// The place type searched and displayed for this trip type.
    pub fn place_type(&self) -> PlaceType {
        match self {
            TripType::Camp => PlaceType::Campground,
            TripType::Hike => PlaceType::Trailhead,
        }
    }
}

/// A longitude/latitude pair in WGS84.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Longitude in degrees
    pub longitude: f64,
    /// Latitude in degrees
    pub latitude: f64,
}

/// Rectangular map bounds described by the north-east and south-west corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    /// North-east corner of the bounds
    pub ne: Coordinates,
    /// South-west corner of the bounds
    pub sw: Coordinates,
}

impl MapBounds {
    /// Whether the given coordinates fall inside these bounds.
    pub fn contains(&self, coords: &Coordinates) -> bool {
        coords.latitude <= self.ne.latitude
            && coords.latitude >= self.sw.latitude
            && coords.longitude <= self.ne.longitude
            && coords.longitude >= self.sw.longitude
    }
}

/// A campground or trailhead returned by the search provider.
///
/// Places are immutable value records; the planner only moves them between
/// the candidate catalog and the selection set, never mutating their fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Identifier, unique within a place type
    pub id: i64,

    /// Whether this place is a campground or a trailhead
    #[serde(rename = "type")]
    pub place_type: PlaceType,

    /// Reservation-system variant (e.g. "res_ca" for Reserve California)
    pub sub_type: Option<String>,

    /// Display name of the place
    pub name: String,

    /// Name of the containing park or forest
    pub parent_name: Option<String>,

    /// Ranger district, where applicable
    pub district: Option<String>,

    /// Key into the external reservation system
    pub legacy_id: Option<String>,

    /// Permit-system key, trailheads only
    pub subparent_id: Option<String>,

    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,

    /// Opaque markup describing the place, rendered as-is by the UI
    pub description: Option<String>,
}

impl Place {
    /// Coordinates of this place.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            longitude: self.longitude,
            latitude: self.latitude,
        }
    }

    /// URL of the external reservation page for this place.
    ///
    /// Campgrounds link to Reserve California or recreation.gov depending on
    /// their reservation-system variant; trailheads link to the recreation.gov
    /// permit page. Returns `None` when the backing external key is missing.
    pub fn reservation_url(&self) -> Option<String> {
        match self.place_type {
            PlaceType::Trailhead => self
                .subparent_id
                .as_ref()
                .map(|id| format!("https://www.recreation.gov/permits/{}", id)),
            PlaceType::Campground => {
                let legacy_id = self.legacy_id.as_ref()?;
                if self.sub_type.as_deref() == Some("res_ca") {
                    Some(format!(
                        "https://www.reservecalifornia.com/Web/#!park/{}",
                        legacy_id
                    ))
                } else {
                    Some(format!(
                        "https://www.recreation.gov/camping/campgrounds/{}",
                        legacy_id
                    ))
                }
            }
        }
    }
}
