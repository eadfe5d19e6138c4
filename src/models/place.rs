use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    // Sightseeing
    Attraction,
    Monument,
    Viewpoint,
    Historic,

    // Culture
    Museum,
    Gallery,
    Theatre,

    // Food & drink
    Restaurant,
    Cafe,
    Market,

    // Outdoors
    Park,
    Beach,
    Zoo,

    // Entertainment
    AmusementPark,
    Nightlife,
    Shopping,

    // Practical
    Lodging,
}

impl PlaceCategory {
    /// Human-readable day theme for a day dominated by this category.
    pub fn theme_label(&self) -> &'static str {
        match self {
            PlaceCategory::Attraction | PlaceCategory::Monument | PlaceCategory::Viewpoint => {
                "Sightseeing Highlights"
            }
            PlaceCategory::Historic => "History & Heritage",
            PlaceCategory::Museum | PlaceCategory::Gallery => "Museums & Culture",
            PlaceCategory::Theatre => "Arts & Performance",
            PlaceCategory::Restaurant | PlaceCategory::Cafe | PlaceCategory::Market => {
                "Food & Local Flavors"
            }
            PlaceCategory::Park | PlaceCategory::Beach | PlaceCategory::Zoo => "Outdoors & Nature",
            PlaceCategory::AmusementPark => "Fun & Entertainment",
            PlaceCategory::Nightlife => "Evening & Nightlife",
            PlaceCategory::Shopping => "Shopping & Strolling",
            PlaceCategory::Lodging => "Rest & Recharge",
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlaceCategory::Attraction => "attraction",
            PlaceCategory::Monument => "monument",
            PlaceCategory::Viewpoint => "viewpoint",
            PlaceCategory::Historic => "historic",
            PlaceCategory::Museum => "museum",
            PlaceCategory::Gallery => "gallery",
            PlaceCategory::Theatre => "theatre",
            PlaceCategory::Restaurant => "restaurant",
            PlaceCategory::Cafe => "cafe",
            PlaceCategory::Market => "market",
            PlaceCategory::Park => "park",
            PlaceCategory::Beach => "beach",
            PlaceCategory::Zoo => "zoo",
            PlaceCategory::AmusementPark => "amusement_park",
            PlaceCategory::Nightlife => "nightlife",
            PlaceCategory::Shopping => "shopping",
            PlaceCategory::Lodging => "lodging",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PlaceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "attraction" | "tourist_attraction" => Ok(PlaceCategory::Attraction),
            "monument" => Ok(PlaceCategory::Monument),
            "viewpoint" => Ok(PlaceCategory::Viewpoint),
            "historic" => Ok(PlaceCategory::Historic),
            "museum" => Ok(PlaceCategory::Museum),
            "gallery" | "art_gallery" => Ok(PlaceCategory::Gallery),
            "theatre" | "theater" => Ok(PlaceCategory::Theatre),
            "restaurant" => Ok(PlaceCategory::Restaurant),
            "cafe" => Ok(PlaceCategory::Cafe),
            "market" => Ok(PlaceCategory::Market),
            "park" => Ok(PlaceCategory::Park),
            "beach" => Ok(PlaceCategory::Beach),
            "zoo" => Ok(PlaceCategory::Zoo),
            "amusement_park" | "theme_park" => Ok(PlaceCategory::AmusementPark),
            "nightlife" | "night_club" | "bar" => Ok(PlaceCategory::Nightlife),
            "shopping" | "shopping_mall" => Ok(PlaceCategory::Shopping),
            "lodging" | "hotel" => Ok(PlaceCategory::Lodging),
            _ => Err(format!("Invalid place category: {}", s)),
        }
    }
}

/// A point of interest as returned by the Place Directory.
/// Immutable once fetched; the engine never mutates places, only groups
/// and orders them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Stable identifier from the Place Directory.
    pub id: String,
    pub name: String,
    pub location: Coordinates,
    /// Ordered semantic tags; the first one is the primary category.
    pub categories: Vec<PlaceCategory>,
    /// Price level ordinal 0-4, when the directory knows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    /// Rating 0-5, when the directory knows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

impl Place {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: Coordinates,
        categories: Vec<PlaceCategory>,
    ) -> Self {
        Place {
            id: id.into(),
            name: name.into(),
            location,
            categories,
            price_level: None,
            rating: None,
        }
    }

    pub fn with_price_level(mut self, price_level: u8) -> Self {
        self.price_level = Some(price_level.min(4));
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating.clamp(0.0, 5.0));
        self
    }

    /// Primary category tag (first in the ordered set), if any.
    pub fn primary_category(&self) -> Option<PlaceCategory> {
        self.categories.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!(
            "museum".parse::<PlaceCategory>().unwrap(),
            PlaceCategory::Museum
        );
        assert_eq!(
            "THEME_PARK".parse::<PlaceCategory>().unwrap(),
            PlaceCategory::AmusementPark
        );
        assert!("invalid".parse::<PlaceCategory>().is_err());
    }

    #[test]
    fn test_primary_category_is_first_tag() {
        let place = Place::new(
            "p1",
            "Louvre",
            Coordinates::new(48.8606, 2.3376).unwrap(),
            vec![PlaceCategory::Museum, PlaceCategory::Attraction],
        );
        assert_eq!(place.primary_category(), Some(PlaceCategory::Museum));

        let untagged = Place::new(
            "p2",
            "Somewhere",
            Coordinates::new(48.86, 2.33).unwrap(),
            vec![],
        );
        assert_eq!(untagged.primary_category(), None);
    }

    #[test]
    fn test_builder_clamps() {
        let place = Place::new(
            "p3",
            "Bistro",
            Coordinates::new(48.85, 2.35).unwrap(),
            vec![PlaceCategory::Restaurant],
        )
        .with_price_level(9)
        .with_rating(7.5);

        assert_eq!(place.price_level, Some(4));
        assert_eq!(place.rating, Some(5.0));
    }
}
