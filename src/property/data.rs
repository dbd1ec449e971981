//! Listing records and the financial view the calculator works from

use serde::{Deserialize, Serialize};

/// A residential listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Opaque listing identifier
    pub id: String,

    /// Full street address
    pub address: String,

    pub city: String,

    /// Two-letter state code
    pub state: String,

    /// Listing price
    pub price: f64,

    /// Expected monthly long-term rent, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_rent: Option<f64>,

    pub bedrooms: u32,

    /// Bathroom count (half baths allowed, e.g. 2.5)
    pub bathrooms: f64,

    /// Interior square footage
    pub sqft: u32,

    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Property {
    /// The subset of the listing the investment calculator needs
    pub fn financials(&self) -> PropertyFinancials {
        PropertyFinancials {
            price: self.price,
            estimated_rent: self.estimated_rent,
        }
    }
}

/// Price and rent facts for a single calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFinancials {
    /// Purchase price
    pub price: f64,

    /// Monthly long-term rent; derived from price when absent
    #[serde(default)]
    pub estimated_rent: Option<f64>,
}

impl PropertyFinancials {
    pub fn new(price: f64) -> Self {
        Self { price, estimated_rent: None }
    }

    pub fn with_rent(price: f64, estimated_rent: f64) -> Self {
        Self { price, estimated_rent: Some(estimated_rent) }
    }
}

impl From<&Property> for PropertyFinancials {
    fn from(property: &Property) -> Self {
        property.financials()
    }
}
