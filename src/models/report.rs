//! Report of illegal use of an open space.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::view::{Category, Record, RecordId};

/// A citizen report about an open space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: RecordId,
    pub open_space_name: String,
    pub street: String,
    pub reporter_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub is_resolved: bool,
    #[serde(default)]
    pub photos: Vec<String>,
    pub date_reported: DateTime<Utc>,
}

/// Report filter selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportCategory {
    #[default]
    All,
    Pending,
    Resolved,
}

impl Category for ReportCategory {
    const PARTITION: &'static [Self] = &[ReportCategory::Pending, ReportCategory::Resolved];

    fn as_str(self) -> &'static str {
        match self {
            ReportCategory::All => "all",
            ReportCategory::Pending => "pending",
            ReportCategory::Resolved => "resolved",
        }
    }
}

/// The only field the console changes on a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMutation {
    SetResolved(bool),
}

impl Record for Report {
    type Category = ReportCategory;
    type Mutation = ReportMutation;

    const KIND: &'static str = "report";

    fn id(&self) -> RecordId {
        self.id
    }

    fn in_category(&self, category: ReportCategory) -> bool {
        match category {
            ReportCategory::All => true,
            ReportCategory::Pending => !self.is_resolved,
            ReportCategory::Resolved => self.is_resolved,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.open_space_name.as_str(),
            self.street.as_str(),
            self.description.as_str(),
            self.reporter_name.as_str(),
        ]
    }

    fn apply(&mut self, mutation: &ReportMutation) {
        match *mutation {
            ReportMutation::SetResolved(resolved) => self.is_resolved = resolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixtures;

    #[test]
    fn test_report_wire_format() {
        let report = fixtures::reports().remove(1);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["id"], 2);
        assert_eq!(json["openSpaceName"], "Community Garden");
        assert_eq!(json["reporterName"], "Jane Smith");
        assert_eq!(json["isResolved"], true);
        assert_eq!(json["photos"].as_array().unwrap().len(), 1);
        assert_eq!(json["dateReported"], "2024-07-20T14:30:00Z");

        let back: Report = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_category_selectors() {
        let pending: ReportCategory = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(pending, ReportCategory::Pending);
        assert!(ReportCategory::default().is_all());
        assert!(serde_json::from_str::<ReportCategory>("\"active\"").is_err());
    }

    #[test]
    fn test_apply_resolution() {
        let mut report = fixtures::reports().remove(0);
        report.apply(&ReportMutation::SetResolved(true));
        assert!(report.in_category(ReportCategory::Resolved));
        assert!(!report.in_category(ReportCategory::Pending));
    }
}
