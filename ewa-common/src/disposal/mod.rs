//! Disposal reference data
//!
//! Read-only lookup tables consumed by the explanation relay:
//! - Collection centers, matched by exact city name across all states
//! - Disposal guidance per [`ItemCategory`]
//!
//! The built-in tables are loaded once per process. Tests and alternative
//! deployments can build their own [`DisposalDirectory`] with [`DisposalDirectory::new`].

mod data;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::ItemCategory;

/// A physical e-waste collection point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisposalRecord {
    pub id: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub contact: String,
}

impl DisposalRecord {
    /// `"{address}, {contact}"`, the form embedded into generated guidance
    pub fn address_and_contact(&self) -> String {
        format!("{}, {}", self.address, self.contact)
    }
}

static BUILTIN: Lazy<DisposalDirectory> = Lazy::new(|| {
    let records = data::COLLECTION_CENTERS
        .iter()
        .map(|(id, state, city, address, contact)| DisposalRecord {
            id: id.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: address.to_string(),
            contact: contact.to_string(),
        })
        .collect();

    let instructions = data::DISPOSAL_METHODS
        .iter()
        .map(|(category, method)| (*category, method.to_string()))
        .collect();

    DisposalDirectory::new(records, instructions)
});

/// Immutable collection-center and disposal-guidance tables
#[derive(Debug, Clone, Default)]
pub struct DisposalDirectory {
    records: Vec<DisposalRecord>,
    instructions: HashMap<ItemCategory, String>,
}

impl DisposalDirectory {
    pub fn new(records: Vec<DisposalRecord>, instructions: HashMap<ItemCategory, String>) -> Self {
        Self {
            records,
            instructions,
        }
    }

    /// Tables shipped with the application
    pub fn builtin() -> &'static DisposalDirectory {
        &BUILTIN
    }

    /// All records, in table order
    pub fn records(&self) -> &[DisposalRecord] {
        &self.records
    }

    /// Records whose city equals `city` exactly, in table order
    ///
    /// A city can appear under several states; every match is returned.
    pub fn records_in_city(&self, city: &str) -> Vec<&DisposalRecord> {
        self.records.iter().filter(|r| r.city == city).collect()
    }

    /// Records listed under `state` (e.g. `"UTTAR_PRADESH"`)
    pub fn records_in_state(&self, state: &str) -> Vec<&DisposalRecord> {
        self.records.iter().filter(|r| r.state == state).collect()
    }

    /// Distinct city names, sorted
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = self.records.iter().map(|r| r.city.as_str()).collect();
        cities.sort_unstable();
        cities.dedup();
        cities
    }

    /// Addresses and contacts of every center in `city`, joined with `", "`
    ///
    /// Empty when the city has no centers.
    pub fn contact_summary(&self, city: &str) -> String {
        self.records_in_city(city)
            .iter()
            .map(|r| r.address_and_contact())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Disposal guidance for a category name as reported by the classifier
    pub fn instruction_for(&self, category: &str) -> Option<&str> {
        let category: ItemCategory = category.parse().ok()?;
        self.instructions.get(&category).map(String::as_str)
    }

    /// Like [`Self::instruction_for`], empty when the category is unknown
    pub fn disposal_method(&self, category: &str) -> &str {
        self.instruction_for(category).unwrap_or("")
    }
}
