//! Hardcoded collections served by [`super::FixtureSource`].

use chrono::{DateTime, Utc};

use crate::models::{Notification, NotificationKind, OpenSpace, OpenSpaceStatus, Report};

fn reported_at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

fn photos(ids: &[u32]) -> Vec<String> {
    ids.iter()
        .map(|n| format!("https://picsum.photos/400?random={}", n))
        .collect()
}

pub fn reports() -> Vec<Report> {
    vec![
        Report {
            id: 1,
            open_space_name: "City Park".to_string(),
            street: "Park Avenue".to_string(),
            reporter_name: "John Doe".to_string(),
            latitude: 34.0522,
            longitude: -118.2437,
            description: "Illegal dumping of construction waste near the main entrance."
                .to_string(),
            is_resolved: false,
            photos: photos(&[1, 2]),
            date_reported: reported_at("2024-07-25T10:00:00Z"),
        },
        Report {
            id: 2,
            open_space_name: "Community Garden".to_string(),
            street: "Garden Street".to_string(),
            reporter_name: "Jane Smith".to_string(),
            latitude: 34.0522,
            longitude: -118.2437,
            description: "Someone is building an unauthorized shed in the middle of the garden."
                .to_string(),
            is_resolved: true,
            photos: photos(&[3]),
            date_reported: reported_at("2024-07-20T14:30:00Z"),
        },
        Report {
            id: 3,
            open_space_name: "Riverfront Promenade".to_string(),
            street: "Riverside Drive".to_string(),
            reporter_name: "Peter Jones".to_string(),
            latitude: 34.0522,
            longitude: -118.2437,
            description: "Vandalism and graffiti on the benches and walkway.".to_string(),
            is_resolved: false,
            photos: photos(&[4, 5]),
            date_reported: reported_at("2024-07-22T08:15:00Z"),
        },
    ]
}

pub fn open_spaces() -> Vec<OpenSpace> {
    let entry = |id, name: &str, address: &str, lat, lng, status| OpenSpace {
        id,
        name: name.to_string(),
        address: address.to_string(),
        lat,
        lng,
        status,
    };

    vec![
        entry(
            1,
            "City Park",
            "123 Park Ave",
            34.0522,
            -118.2437,
            OpenSpaceStatus::Active,
        ),
        entry(
            2,
            "Community Garden",
            "456 Garden St",
            34.0535,
            -118.245,
            OpenSpaceStatus::Active,
        ),
        entry(
            3,
            "Riverfront Promenade",
            "789 Riverside Dr",
            34.054,
            -118.2465,
            OpenSpaceStatus::Inactive,
        ),
        entry(
            4,
            "Westside Fields",
            "101 Field Ln",
            34.051,
            -118.242,
            OpenSpaceStatus::Active,
        ),
        entry(
            5,
            "Central Plaza",
            "202 Plaza Blvd",
            34.0555,
            -118.2475,
            OpenSpaceStatus::UnderMaintenance,
        ),
    ]
}

pub fn notifications() -> Vec<Notification> {
    let entry = |id, title: &str, message: &str, kind, timestamp: &str, is_read| Notification {
        id,
        title: title.to_string(),
        message: message.to_string(),
        kind,
        timestamp: timestamp.to_string(),
        is_read,
    };

    vec![
        entry(
            1,
            "New Report Submitted",
            "Illegal dumping reported at City Park",
            NotificationKind::Warning,
            "2 minutes ago",
            false,
        ),
        entry(
            2,
            "Report Resolved",
            "Community Garden shed issue has been resolved",
            NotificationKind::Success,
            "1 hour ago",
            false,
        ),
        entry(
            3,
            "System Update",
            "Dashboard maintenance scheduled for tonight",
            NotificationKind::Info,
            "3 hours ago",
            true,
        ),
        entry(
            4,
            "New User Registration",
            "5 new users registered today",
            NotificationKind::Info,
            "5 hours ago",
            true,
        ),
        entry(
            5,
            "High Priority Report",
            "Vandalism at Riverfront Promenade needs attention",
            NotificationKind::Warning,
            "1 day ago",
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_timestamps_parse() {
        for report in reports() {
            assert_ne!(report.date_reported, DateTime::<Utc>::default());
        }
        assert_eq!(
            reports()[0].date_reported.to_rfc3339(),
            "2024-07-25T10:00:00+00:00"
        );
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        let ids: HashSet<_> = reports().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 3);

        let ids: HashSet<_> = open_spaces().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 5);

        let ids: HashSet<_> = notifications().iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), 5);
    }
}
