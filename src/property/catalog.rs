//! Listing catalog: repository trait, search filter and the in-memory store

use serde::Deserialize;

use super::Property;
use crate::error::{InvestError, Result};

/// Search criteria for listings
///
/// Numeric criteria are truncated toward zero, so `bathrooms=2.5` means at least two;
/// a criterion that truncates to zero is treated as unset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilter {
    /// Case-insensitive substring of the city name
    pub city: Option<String>,

    /// Case-insensitive state code
    pub state: Option<String>,

    pub min_price: Option<f64>,
    pub max_price: Option<f64>,

    /// Minimum bedroom count
    pub bedrooms: Option<f64>,

    /// Minimum bathroom count
    pub bathrooms: Option<f64>,
}

impl PropertyFilter {
    /// Filter on state only
    pub fn state(state: &str) -> Self {
        Self {
            state: Some(state.to_string()),
            ..Self::default()
        }
    }

    /// Whether a listing satisfies every criterion that is set
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(city) = self.city.as_deref().filter(|c| !c.is_empty()) {
            if !property.city.to_lowercase().contains(&city.to_lowercase()) {
                return false;
            }
        }

        if let Some(state) = self.state.as_deref().filter(|s| !s.is_empty()) {
            if !property.state.eq_ignore_ascii_case(state) {
                return false;
            }
        }

        if let Some(min) = criterion(self.min_price) {
            if property.price < min {
                return false;
            }
        }

        if let Some(max) = criterion(self.max_price) {
            if property.price > max {
                return false;
            }
        }

        if let Some(beds) = criterion(self.bedrooms) {
            if f64::from(property.bedrooms) < beds {
                return false;
            }
        }

        if let Some(baths) = criterion(self.bathrooms) {
            if property.bathrooms < baths {
                return false;
            }
        }

        true
    }
}

/// Whole part of a numeric criterion, or `None` when it is unset
fn criterion(value: Option<f64>) -> Option<f64> {
    value.map(f64::trunc).filter(|&v| v > 0.0)
}

/// Source of listings for the calculator's callers
pub trait PropertyRepository: Send + Sync {
    /// Every listing, in catalog order
    fn all(&self) -> &[Property];

    /// Look up a listing by id
    fn find(&self, id: &str) -> Result<&Property> {
        self.all()
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| InvestError::PropertyNotFound(id.to_string()))
    }

    /// Listings matching a filter, in catalog order
    fn search(&self, filter: &PropertyFilter) -> Vec<&Property> {
        self.all().iter().filter(|p| filter.matches(p)).collect()
    }

    /// Distinct state codes, in order of first appearance
    fn states(&self) -> Vec<&str> {
        let mut states: Vec<&str> = Vec::new();
        for property in self.all() {
            if !states.contains(&property.state.as_str()) {
                states.push(&property.state);
            }
        }
        states
    }
}

/// Catalog held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    properties: Vec<Property>,
}

impl InMemoryCatalog {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// The six demo listings
    pub fn mock_listings() -> Self {
        Self::new(MOCK_LISTINGS.iter().map(SeedListing::to_property).collect())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertyRepository for InMemoryCatalog {
    fn all(&self) -> &[Property] {
        &self.properties
    }
}

struct SeedListing {
    id: &'static str,
    address: &'static str,
    city: &'static str,
    state: &'static str,
    price: f64,
    bedrooms: u32,
    bathrooms: f64,
    sqft: u32,
    image_url: &'static str,
    latitude: f64,
    longitude: f64,
}

impl SeedListing {
    fn to_property(&self) -> Property {
        Property {
            id: self.id.to_string(),
            address: self.address.to_string(),
            city: self.city.to_string(),
            state: self.state.to_string(),
            price: self.price,
            estimated_rent: None,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            sqft: self.sqft,
            image_url: self.image_url.to_string(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

const MOCK_LISTINGS: [SeedListing; 6] = [
    SeedListing {
        id: "1",
        address: "123 Main St, Austin, TX 78701",
        city: "Austin",
        state: "TX",
        price: 450_000.0,
        bedrooms: 3,
        bathrooms: 2.0,
        sqft: 1800,
        image_url: "https://images.unsplash.com/photo-1568605114967-8130f3a36994?w=800",
        latitude: 30.2672,
        longitude: -97.7431,
    },
    SeedListing {
        id: "2",
        address: "456 Oak Ave, Denver, CO 80202",
        city: "Denver",
        state: "CO",
        price: 380_000.0,
        bedrooms: 2,
        bathrooms: 2.0,
        sqft: 1400,
        image_url: "https://images.unsplash.com/photo-1570129477492-45c003edd2be?w=800",
        latitude: 39.7392,
        longitude: -104.9903,
    },
    SeedListing {
        id: "3",
        address: "789 Sunset Blvd, Miami, FL 33139",
        city: "Miami",
        state: "FL",
        price: 520_000.0,
        bedrooms: 4,
        bathrooms: 3.0,
        sqft: 2200,
        image_url: "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=800",
        latitude: 25.7907,
        longitude: -80.1300,
    },
    SeedListing {
        id: "4",
        address: "321 Desert Rd, Phoenix, AZ 85001",
        city: "Phoenix",
        state: "AZ",
        price: 310_000.0,
        bedrooms: 3,
        bathrooms: 2.0,
        sqft: 1600,
        image_url: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800",
        latitude: 33.4484,
        longitude: -112.0740,
    },
    SeedListing {
        id: "5",
        address: "555 Music Row, Nashville, TN 37203",
        city: "Nashville",
        state: "TN",
        price: 425_000.0,
        bedrooms: 3,
        bathrooms: 2.5,
        sqft: 1900,
        image_url: "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=800",
        latitude: 36.1627,
        longitude: -86.7816,
    },
    SeedListing {
        id: "6",
        address: "888 Mountain View Dr, Denver, CO 80203",
        city: "Denver",
        state: "CO",
        price: 550_000.0,
        bedrooms: 4,
        bathrooms: 3.0,
        sqft: 2400,
        image_url: "https://images.unsplash.com/photo-1600607687644-c7171b42498b?w=800",
        latitude: 39.7500,
        longitude: -104.9900,
    },
];
