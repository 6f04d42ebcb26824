//! Display ordering and dismissal report formatting.
//!
//! Pure functions over a snapshot of the roster: the store returns records
//! unordered, callers apply `order_for_display` before rendering.

use crate::models::collaborator::Collaborator;
use chrono::NaiveDate;

/// Sort the roster for display: active collaborators first, then away ones;
/// within each group, records without a dismissal date come first, the rest
/// by earlier date. The sort is stable, so ties keep the store order.
pub fn order_for_display(mut records: Vec<Collaborator>) -> Vec<Collaborator> {
    // Option<NaiveDateTime> orders None before Some, which is exactly the
    // NULLS FIRST secondary key.
    records.sort_by_key(|c| (c.away, c.dismissed_at));
    records
}

/// Build the dismissal report text for the given date.
///
/// Only active (`away == false`) collaborators are listed, numbered from 1,
/// in the order given — the caller is responsible for any ordering. The
/// `*bold*` / `_italic_` markers target chat clients that render them.
pub fn format_dismissal_report(
    records: &[Collaborator],
    today: NaiveDate,
    header: &str,
    date_format: &str,
) -> String {
    let mut out = format!("*{}* {}\n\n", header, today.format(date_format));

    for (idx, c) in records.iter().filter(|c| !c.away).enumerate() {
        out.push_str(&format!("*{}* - _{}_\n", idx + 1, c.name));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn collab(id: i64, name: &str, away: bool, dismissed: Option<&str>) -> Collaborator {
        Collaborator {
            id,
            name: name.to_string(),
            away,
            dismissed_at: dismissed.map(|s| {
                NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid test date")
            }),
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn active_before_away_nulls_first() {
        let a = collab(1, "A", false, None);
        let b = collab(2, "B", true, None);
        let c = collab(3, "C", false, Some("2024-01-01 00:00:00"));

        let ordered = order_for_display(vec![a, b, c]);
        let names: Vec<&str> = ordered.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, ["A", "C", "B"]);
    }

    #[test]
    fn away_sorts_last_regardless_of_dismissal_date() {
        let early = collab(1, "early", true, Some("2020-01-01 00:00:00"));
        let active = collab(2, "active", false, Some("2024-06-01 00:00:00"));

        let ordered = order_for_display(vec![early, active]);

        assert_eq!(ordered[0].name, "active");
        assert_eq!(ordered[1].name, "early");
    }

    #[test]
    fn earlier_dismissal_dates_first_within_group() {
        let late = collab(1, "late", false, Some("2024-03-01 00:00:00"));
        let early = collab(2, "early", false, Some("2024-01-01 00:00:00"));
        let none = collab(3, "none", false, None);

        let ordered = order_for_display(vec![late, early, none]);
        let names: Vec<&str> = ordered.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, ["none", "early", "late"]);
    }

    #[test]
    fn ordering_is_idempotent() {
        let records = vec![
            collab(1, "A", true, None),
            collab(2, "B", false, Some("2024-02-02 12:00:00")),
            collab(3, "C", false, None),
            collab(4, "D", true, Some("2023-12-31 08:00:00")),
        ];

        let once = order_for_display(records);
        let twice = order_for_display(once.clone());

        let ids_once: Vec<i64> = once.iter().map(|c| c.id).collect();
        let ids_twice: Vec<i64> = twice.iter().map(|c| c.id).collect();
        assert_eq!(ids_once, ids_twice);
    }

    #[test]
    fn ties_keep_input_order() {
        let first = collab(10, "first", false, None);
        let second = collab(20, "second", false, None);

        let ordered = order_for_display(vec![first, second]);

        assert_eq!(ordered[0].id, 10);
        assert_eq!(ordered[1].id, 20);
    }

    #[test]
    fn report_matches_chat_format_exactly() {
        let records = vec![collab(1, "Ana", false, None), collab(2, "Bea", false, None)];
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).expect("valid date");

        let text = format_dismissal_report(&records, today, "DISPENSA ATUALIZADA", "%d/%m/%Y");

        assert_eq!(
            text,
            "*DISPENSA ATUALIZADA* 10/05/2024\n\n*1* - _Ana_\n*2* - _Bea_\n"
        );
    }

    #[test]
    fn report_skips_away_and_renumbers() {
        let records = vec![
            collab(1, "Ana", false, None),
            collab(2, "Bea", true, None),
            collab(3, "Caio", false, Some("2024-01-01 00:00:00")),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).expect("valid date");

        let text = format_dismissal_report(&records, today, "DISPENSA ATUALIZADA", "%d/%m/%Y");

        assert!(!text.contains("Bea"));
        assert!(text.contains("*1* - _Ana_\n"));
        assert!(text.contains("*2* - _Caio_\n"));
    }

    #[test]
    fn report_on_empty_roster_is_header_only() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).expect("valid date");

        let text = format_dismissal_report(&[], today, "DISPENSA ATUALIZADA", "%d/%m/%Y");

        assert_eq!(text, "*DISPENSA ATUALIZADA* 10/05/2024\n\n");
    }
}
