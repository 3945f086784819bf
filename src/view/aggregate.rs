//! Summary counts for the dashboard tiles.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{Category, Record};

/// Total plus one count per partition selector, e.g.
/// `{"total":3,"pending":2,"resolved":1}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    #[serde(flatten)]
    pub counts: BTreeMap<&'static str, usize>,
}

impl Summary {
    #[cfg(test)]
    pub fn count<C: Category>(&self, category: C) -> usize {
        if category.is_all() {
            return self.total;
        }
        self.counts.get(category.as_str()).copied().unwrap_or(0)
    }
}

/// Summarize the full, unfiltered collection.
pub fn summarize<R: Record>(records: &[R]) -> Summary {
    let counts = <R::Category as Category>::PARTITION
        .iter()
        .map(|&category| {
            let count = records.iter().filter(|r| r.in_category(category)).count();
            (category.as_str(), count)
        })
        .collect();

    Summary {
        total: records.len(),
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OpenSpace, OpenSpaceCategory, OpenSpaceStatus, Report, ReportCategory};
    use crate::source::fixtures;

    #[test]
    fn test_report_summary() {
        let summary = summarize(&fixtures::reports());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.count(ReportCategory::Pending), 2);
        assert_eq!(summary.count(ReportCategory::Resolved), 1);
        assert_eq!(summary.count(ReportCategory::All), 3);
    }

    #[test]
    fn test_open_space_summary() {
        let summary = summarize(&fixtures::open_spaces());
        assert_eq!(summary.total, 5);
        assert_eq!(summary.count(OpenSpaceCategory::Active), 3);
        assert_eq!(summary.count(OpenSpaceCategory::Inactive), 2);
    }

    #[test]
    fn test_partition_identity() {
        let mut reports = fixtures::reports();
        for resolved in [true, false] {
            for i in 0..reports.len() {
                reports[i].is_resolved = resolved;
                let summary = summarize(&reports);
                let pending = summary.count(ReportCategory::Pending);
                let resolved_count = summary.count(ReportCategory::Resolved);
                assert_eq!(pending + resolved_count, summary.total);
            }
        }

        let mut spaces = fixtures::open_spaces();
        spaces[0].status = OpenSpaceStatus::UnderMaintenance;
        let summary = summarize(&spaces);
        assert_eq!(summary.count(OpenSpaceCategory::Active), 2);
        assert_eq!(
            summary.count(OpenSpaceCategory::Active) + summary.count(OpenSpaceCategory::Inactive),
            summary.total
        );
    }

    #[test]
    fn test_empty_summary_serializes_flat() {
        let reports: Vec<Report> = Vec::new();
        let json = serde_json::to_value(summarize(&reports)).unwrap();
        assert_eq!(json, serde_json::json!({"total": 0, "pending": 0, "resolved": 0}));

        let spaces: Vec<OpenSpace> = Vec::new();
        let json = serde_json::to_value(summarize(&spaces)).unwrap();
        assert_eq!(json, serde_json::json!({"total": 0, "active": 0, "inactive": 0}));
    }
}
