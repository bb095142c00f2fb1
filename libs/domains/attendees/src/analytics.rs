//! Attendee analytics, recomputed from a full roster on every call.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::models::Attendee;

/// How many attendees share one exact designation string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DesignationBreakdown {
    pub designation: String,
    pub count: usize,
}

/// Tallies attendees per designation.
///
/// Matching is exact and case-sensitive. Rows come back largest group
/// first, ties broken by designation, but callers should treat the order as
/// unspecified.
pub fn designation_breakdown(attendees: &[Attendee]) -> Vec<DesignationBreakdown> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for attendee in attendees {
        *counts.entry(attendee.designation.as_str()).or_default() += 1;
    }

    let mut rows: Vec<DesignationBreakdown> = counts
        .into_iter()
        .map(|(designation, count)| DesignationBreakdown {
            designation: designation.to_string(),
            count,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.designation.cmp(&b.designation))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn attendee(designation: &str) -> Attendee {
        Attendee {
            id: uuid::Uuid::new_v4().to_string(),
            name: "someone".into(),
            email: "someone@example.com".into(),
            designation: designation.into(),
            registered_at: Utc::now(),
        }
    }

    fn row(designation: &str, count: usize) -> DesignationBreakdown {
        DesignationBreakdown {
            designation: designation.into(),
            count,
        }
    }

    #[test]
    fn groups_by_exact_designation() {
        let roster = [attendee("Eng"), attendee("Eng"), attendee("PM")];
        let rows = designation_breakdown(&roster);

        assert_eq!(rows, vec![row("Eng", 2), row("PM", 1)]);
        assert_eq!(rows.iter().map(|r| r.count).sum::<usize>(), roster.len());
    }

    #[test]
    fn is_case_sensitive() {
        let roster = [attendee("eng"), attendee("Eng")];
        let rows = designation_breakdown(&roster);

        assert_eq!(rows.len(), 2);
        assert!(rows.contains(&row("eng", 1)));
        assert!(rows.contains(&row("Eng", 1)));
    }

    #[test]
    fn empty_roster_has_no_rows() {
        assert!(designation_breakdown(&[]).is_empty());
    }
}
