//! Item categories recognised by the inference model
//!
//! The classification service returns a numeric `class_id` and a display
//! `class_name`. Both map onto [`ItemCategory`]. Parsing is forgiving about
//! case and embedded whitespace so that `"Mobile"`, `"mobile"` and
//! `"Washing Machine"` all resolve.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Electronic item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Battery,
    Keyboard,
    Microwave,
    Mobile,
    Mouse,
    #[serde(rename = "PCB")]
    Pcb,
    Player,
    Printer,
    Television,
    WashingMachine,
}

impl ItemCategory {
    /// All categories in model class-id order
    pub const ALL: [ItemCategory; 10] = [
        ItemCategory::Battery,
        ItemCategory::Keyboard,
        ItemCategory::Microwave,
        ItemCategory::Mobile,
        ItemCategory::Mouse,
        ItemCategory::Pcb,
        ItemCategory::Player,
        ItemCategory::Printer,
        ItemCategory::Television,
        ItemCategory::WashingMachine,
    ];

    /// Map a model class id (0-9) to a category
    pub fn from_class_id(class_id: u32) -> Option<Self> {
        Self::ALL.get(class_id as usize).copied()
    }

    /// Model class id for this category
    pub fn class_id(self) -> u32 {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .map(|i| i as u32)
            .unwrap_or_default()
    }

    /// Display name, as emitted by the inference service
    pub fn name(self) -> &'static str {
        match self {
            ItemCategory::Battery => "Battery",
            ItemCategory::Keyboard => "Keyboard",
            ItemCategory::Microwave => "Microwave",
            ItemCategory::Mobile => "Mobile",
            ItemCategory::Mouse => "Mouse",
            ItemCategory::Pcb => "PCB",
            ItemCategory::Player => "Player",
            ItemCategory::Printer => "Printer",
            ItemCategory::Television => "Television",
            ItemCategory::WashingMachine => "WashingMachine",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ItemCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().to_lowercase() == key)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown item category: {}", s)))
    }
}
