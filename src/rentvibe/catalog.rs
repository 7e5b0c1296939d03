//! # Catalog
//!
//! The ordered, read-only set of listings a session searches over. The catalog
//! is either the built-in seed (six listings) or a JSON array of
//! [`PropertyRecord`]s loaded from disk.
//!
//! Construction validates two invariants that the rest of the crate relies on:
//! ids are unique, and every record has at least one image.

use crate::error::{RentError, Result};
use crate::model::PropertyRecord;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const PROPERTY_TYPES: [&str; 5] = ["Apartment", "Villa", "House", "Penthouse", "Builder Floor"];

pub const AMENITIES: [&str; 9] = [
    "Power Backup",
    "Parking",
    "Gym",
    "Pool",
    "Security",
    "Club House",
    "Children Park",
    "Servant Room",
    "Garden",
];

const PEXELS: &str = "https://images.pexels.com/photos";
const IMAGE_PARAMS: &str = "auto=compress&cs=tinysrgb&w=800";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<PropertyRecord>,
}

impl Catalog {
    pub fn new(records: Vec<PropertyRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(RentError::InvalidCatalog(format!(
                    "duplicate property id {}",
                    record.id
                )));
            }
            if record.images.is_empty() {
                return Err(RentError::InvalidCatalog(format!(
                    "property {} has no images",
                    record.id
                )));
            }
        }
        Ok(Self { records })
    }

    /// The built-in listings, ids `1` through `6`.
    pub fn seed() -> Self {
        Self {
            records: SEED.clone(),
        }
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading catalog");
        let content = fs::read_to_string(path)?;
        let records: Vec<PropertyRecord> = serde_json::from_str(&content)?;
        Self::new(records)
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn find(&self, id: &str) -> Option<&PropertyRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The type picker: [`PROPERTY_TYPES`], then any other type a loaded
    /// catalog uses, in catalog order.
    pub fn property_types(&self) -> Vec<&str> {
        vocabulary(&PROPERTY_TYPES, self.records.iter().map(|r| r.property_type.as_str()))
    }

    /// The amenity picker: [`AMENITIES`], then any extra amenity the catalog
    /// lists.
    pub fn amenities(&self) -> Vec<&str> {
        vocabulary(
            &AMENITIES,
            self.records
                .iter()
                .flat_map(|r| r.amenities.iter().map(String::as_str)),
        )
    }
}

fn image(photo: u32) -> String {
    format!("{PEXELS}/{photo}/pexels-photo-{photo}.jpeg?{IMAGE_PARAMS}")
}

fn vocabulary<'a>(known: &[&'static str], found: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut terms: Vec<&'a str> = known.to_vec();
    for term in found {
        if !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static SEED: Lazy<Vec<PropertyRecord>> = Lazy::new(|| {
    vec![
        PropertyRecord {
            id: "1".into(),
            title: "Premium Apartment in DLF Cyber City".into(),
            location: "DLF Cyber City, Gurgaon".into(),
            description: "Luxurious 3 BHK apartment in prime location of Gurgaon with modern \
                amenities, 24x7 security, and breathtaking city views."
                .into(),
            price: 45_000,
            bedrooms: 3,
            bathrooms: 3,
            area: 1850,
            property_type: "Apartment".into(),
            images: vec![image(1571460), image(1643384), image(1571458)],
            amenities: strings(&["Power Backup", "Gym", "Pool", "Parking", "Security", "Club House"]),
        },
        PropertyRecord {
            id: "2".into(),
            title: "Sea-Facing Apartment in Worli".into(),
            location: "Worli Sea Face, Mumbai".into(),
            description: "Stunning 4 BHK sea-facing apartment in Worli with premium finishes, \
                servant quarters, and world-class amenities."
                .into(),
            price: 85_000,
            bedrooms: 4,
            bathrooms: 4,
            area: 2200,
            property_type: "Apartment".into(),
            images: vec![image(2089698), image(1457847), image(2343465)],
            amenities: strings(&["Power Backup", "Gym", "Pool", "Parking", "Security", "Servant Room"]),
        },
        PropertyRecord {
            id: "3".into(),
            title: "Modern Flat in Electronic City".into(),
            location: "Electronic City Phase 1, Bangalore".into(),
            description: "Well-designed 2 BHK apartment perfect for IT professionals, with modern \
                amenities and close to major tech parks."
                .into(),
            price: 25_000,
            bedrooms: 2,
            bathrooms: 2,
            area: 1200,
            property_type: "Apartment".into(),
            images: vec![image(1918291), image(276554), image(3935349)],
            amenities: strings(&["Power Backup", "Gym", "Security", "Children Park"]),
        },
        PropertyRecord {
            id: "4".into(),
            title: "Luxury Villa in Jubilee Hills".into(),
            location: "Jubilee Hills, Hyderabad".into(),
            description: "Magnificent 5 BHK villa with private garden, home theater, modular \
                kitchen, and premium Italian marble flooring."
                .into(),
            price: 120_000,
            bedrooms: 5,
            bathrooms: 5,
            area: 4500,
            property_type: "Villa".into(),
            images: vec![image(1438832), image(1571463), image(1457842)],
            amenities: strings(&["Power Backup", "Pool", "Parking", "Security", "Home Theater", "Garden"]),
        },
        PropertyRecord {
            id: "5".into(),
            title: "Premium Flat in Koramangala".into(),
            location: "Koramangala, Bangalore".into(),
            description: "Spacious 3 BHK apartment in prime Koramangala location with modern \
                amenities, reserved parking, and 24x7 security."
                .into(),
            price: 35_000,
            bedrooms: 3,
            bathrooms: 3,
            area: 1800,
            property_type: "Apartment".into(),
            images: vec![image(2462015), image(1571459), image(3935325)],
            amenities: strings(&["Power Backup", "Gym", "Pool", "Parking", "Security", "Children Park"]),
        },
        PropertyRecord {
            id: "6".into(),
            title: "Garden View Independent House".into(),
            location: "Vasant Vihar, New Delhi".into(),
            description: "Beautiful 4 BHK independent house with landscaped garden, modern \
                interiors, and servant quarters in prestigious Vasant Vihar."
                .into(),
            price: 65_000,
            bedrooms: 4,
            bathrooms: 4,
            area: 3200,
            property_type: "House".into(),
            images: vec![image(323780), image(1571460), image(280232)],
            amenities: strings(&["Power Backup", "Parking", "Security", "Garden", "Servant Room"]),
        },
    ]
});
