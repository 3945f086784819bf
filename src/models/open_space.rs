//! Open space registry entry.

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::view::{Category, Record, RecordId};

/// Operational status of an open space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpenSpaceStatus {
    Active,
    Inactive,
    #[serde(rename = "Under Maintenance")]
    UnderMaintenance,
}

impl OpenSpaceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpenSpaceStatus::Active => "Active",
            OpenSpaceStatus::Inactive => "Inactive",
            OpenSpaceStatus::UnderMaintenance => "Under Maintenance",
        }
    }
}

/// A registered open space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSpace {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub status: OpenSpaceStatus,
}

/// Open space filter selector. "Inactive" covers everything that is not active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenSpaceCategory {
    #[default]
    All,
    Active,
    Inactive,
}

impl Category for OpenSpaceCategory {
    const PARTITION: &'static [Self] = &[OpenSpaceCategory::Active, OpenSpaceCategory::Inactive];

    fn as_str(self) -> &'static str {
        match self {
            OpenSpaceCategory::All => "all",
            OpenSpaceCategory::Active => "active",
            OpenSpaceCategory::Inactive => "inactive",
        }
    }
}

impl Record for OpenSpace {
    type Category = OpenSpaceCategory;
    // The registry is read-only from the console.
    type Mutation = Infallible;

    const KIND: &'static str = "open space";

    fn id(&self) -> RecordId {
        self.id
    }

    fn in_category(&self, category: OpenSpaceCategory) -> bool {
        let active = self.status == OpenSpaceStatus::Active;
        match category {
            OpenSpaceCategory::All => true,
            OpenSpaceCategory::Active => active,
            OpenSpaceCategory::Inactive => !active,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.address.as_str(), self.status.as_str()]
    }

    fn apply(&mut self, mutation: &Infallible) {
        match *mutation {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&OpenSpaceStatus::UnderMaintenance).unwrap();
        assert_eq!(json, "\"Under Maintenance\"");

        let status: OpenSpaceStatus = serde_json::from_str("\"Inactive\"").unwrap();
        assert_eq!(status, OpenSpaceStatus::Inactive);
        assert_eq!(status.as_str(), "Inactive");
    }

    #[test]
    fn test_inactive_covers_maintenance() {
        let space = OpenSpace {
            id: 5,
            name: "Central Plaza".to_string(),
            address: "202 Plaza Blvd".to_string(),
            lat: 34.0555,
            lng: -118.2475,
            status: OpenSpaceStatus::UnderMaintenance,
        };
        assert!(space.in_category(OpenSpaceCategory::Inactive));
        assert!(!space.in_category(OpenSpaceCategory::Active));
        assert_eq!(
            space.search_fields(),
            vec!["Central Plaza", "202 Plaza Blvd", "Under Maintenance"]
        );
    }
}
