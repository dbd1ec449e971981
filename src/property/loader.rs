//! Load listings from data/properties.csv

use super::{InMemoryCatalog, Property};
use crate::error::Result;
use csv::Reader;
use std::path::Path;

/// Default listings file
pub const DEFAULT_CATALOG_FILE: &str = "data/properties.csv";

/// Raw CSV row matching properties.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: String,
    address: String,
    city: String,
    state: String,
    price: f64,
    estimated_rent: Option<f64>,
    bedrooms: u32,
    bathrooms: f64,
    sqft: u32,
    image_url: String,
    latitude: f64,
    longitude: f64,
}

impl From<CsvRow> for Property {
    fn from(row: CsvRow) -> Self {
        Property {
            id: row.id,
            address: row.address,
            city: row.city,
            state: row.state,
            price: row.price,
            estimated_rent: row.estimated_rent,
            bedrooms: row.bedrooms,
            bathrooms: row.bathrooms,
            sqft: row.sqft,
            image_url: row.image_url,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}

/// Load all listings from a CSV file
pub fn load_properties<P: AsRef<Path>>(path: P) -> Result<Vec<Property>> {
    let reader = Reader::from_path(path)?;
    read_rows(reader)
}

/// Load listings from any reader (e.g., string buffer, network stream)
pub fn load_properties_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Property>> {
    read_rows(Reader::from_reader(reader))
}

/// Build a catalog from a listings file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<InMemoryCatalog> {
    let path = path.as_ref();
    let properties = load_properties(path)?;
    log::info!("Loaded {} listings from {}", properties.len(), path.display());
    Ok(InMemoryCatalog::new(properties))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Property>> {
    let mut properties = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        properties.push(row.into());
    }

    Ok(properties)
}
