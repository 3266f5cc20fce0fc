//! In-process event filtering
//!
//! Pure functions over a slice of events. Each returns a fresh Vec in the
//! input order and never mutates its argument. Filtering happens after the
//! full collection is loaded, so these stay independent of the storage
//! backend.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::Event;

/// Upper price bound applied when the caller gives none
pub const DEFAULT_MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Events whose tag list contains `tag` exactly.
///
/// A missing or empty tag matches nothing.
pub fn by_tag(events: &[Event], tag: Option<&str>) -> Vec<Event> {
    let Some(tag) = tag.filter(|t| !t.is_empty()) else {
        return Vec::new();
    };

    events
        .iter()
        .filter(|event| event.tags.iter().any(|t| t == tag))
        .cloned()
        .collect()
}

/// Events with a scheduled date inside `[start, end]`, bounds inclusive.
///
/// Both bounds are required; a missing bound matches nothing. An inverted
/// range yields zero matches rather than swapping the bounds.
pub fn by_date_range(
    events: &[Event],
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Vec<Event> {
    let (Some(start), Some(end)) = (start, end) else {
        return Vec::new();
    };

    events
        .iter()
        .filter(|event| {
            event
                .event_date_time
                .is_some_and(|date| date >= start && date <= end)
        })
        .cloned()
        .collect()
}

/// Events with a ticket price inside `[min, max]`, bounds inclusive.
///
/// A missing `min` defaults to zero and a missing `max` to
/// [`DEFAULT_MAX_PRICE`]. Unpriced events never match.
pub fn by_price_range(
    events: &[Event],
    min: Option<Decimal>,
    max: Option<Decimal>,
) -> Vec<Event> {
    let min = min.unwrap_or(Decimal::ZERO);
    let max = max.unwrap_or(DEFAULT_MAX_PRICE);

    events
        .iter()
        .filter(|event| {
            event
                .ticket_price
                .is_some_and(|price| price >= min && price <= max)
        })
        .cloned()
        .collect()
}

/// Events scheduled strictly after `now`.
///
/// The reference instant is caller-supplied so the filter stays
/// deterministic under test.
pub fn upcoming(events: &[Event], now: DateTime<Utc>) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.event_date_time.is_some_and(|date| date > now))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn event(name: &str, price: i64, date: DateTime<Utc>, tags: &[&str]) -> Event {
        Event {
            id: Uuid::now_v7(),
            event_name: Some(name.to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ticket_price: Some(Decimal::from(price)),
            event_date_time: Some(date),
            duration_minutes: 60,
        }
    }

    fn fixtures() -> Vec<Event> {
        vec![
            event(
                "A",
                50,
                Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
                &["music", "outdoor"],
            ),
            event(
                "B",
                150,
                Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
                &["music"],
            ),
        ]
    }

    #[test]
    fn test_by_tag_exact_match() {
        let events = fixtures();

        let music = by_tag(&events, Some("music"));
        assert_eq!(music.len(), 2);

        let outdoor = by_tag(&events, Some("outdoor"));
        assert_eq!(outdoor.len(), 1);
        assert_eq!(outdoor[0].event_name.as_deref(), Some("A"));

        assert!(by_tag(&events, Some("mus")).is_empty());
    }

    #[test]
    fn test_by_tag_none_or_empty_matches_nothing() {
        let events = fixtures();
        assert!(by_tag(&events, None).is_empty());
        assert!(by_tag(&events, Some("")).is_empty());
    }

    #[test]
    fn test_by_date_range_inclusive_bounds() {
        let events = fixtures();
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        let both = by_date_range(&events, Some(start), Some(end));
        assert_eq!(both.len(), 2);

        let only_a = by_date_range(
            &events,
            Some(start),
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
        );
        assert_eq!(only_a.len(), 1);
        assert_eq!(only_a[0].event_name.as_deref(), Some("A"));
    }

    #[test]
    fn test_by_date_range_missing_bound_matches_nothing() {
        let events = fixtures();
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(by_date_range(&events, Some(start), None).is_empty());
        assert!(by_date_range(&events, None, Some(start)).is_empty());
        assert!(by_date_range(&events, None, None).is_empty());
    }

    #[test]
    fn test_by_date_range_inverted_matches_nothing() {
        let events = fixtures();
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert!(by_date_range(&events, Some(start), Some(end)).is_empty());
    }

    #[test]
    fn test_by_date_range_skips_undated_events() {
        let mut events = fixtures();
        events[0].event_date_time = None;

        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let matched = by_date_range(&events, Some(start), Some(end));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].event_name.as_deref(), Some("B"));
    }

    #[test]
    fn test_by_price_range_inclusive_bounds() {
        let events = fixtures();

        let both = by_price_range(&events, Some(Decimal::from(50)), Some(Decimal::from(150)));
        assert_eq!(both.len(), 2);

        let only_b = by_price_range(&events, Some(Decimal::from(100)), Some(Decimal::from(200)));
        assert_eq!(only_b.len(), 1);
        assert_eq!(only_b[0].event_name.as_deref(), Some("B"));
    }

    #[test]
    fn test_by_price_range_defaults_keep_all_priced_events() {
        let mut events = fixtures();
        events.push(Event {
            ticket_price: None,
            ..events[0].clone()
        });

        let matched = by_price_range(&events, None, None);
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_by_price_range_exact_decimal_comparison() {
        let mut events = fixtures();
        events[0].ticket_price = Some(Decimal::new(1005, 2)); // 10.05

        let matched = by_price_range(
            &events,
            Some(Decimal::new(1005, 2)),
            Some(Decimal::new(1005, 2)),
        );
        assert_eq!(matched.len(), 1);

        let below = by_price_range(
            &events,
            Some(Decimal::ZERO),
            Some(Decimal::new(1004, 2)),
        );
        assert!(below.is_empty());
    }

    #[test]
    fn test_upcoming_strictly_after() {
        let events = fixtures();

        let before_all = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(upcoming(&events, before_all).len(), 2);

        // Exact equality is not upcoming.
        let at_first = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let matched = upcoming(&events, at_first);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].event_name.as_deref(), Some("B"));

        let after_all = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert!(upcoming(&events, after_all).is_empty());
    }

    #[test]
    fn test_filters_preserve_input_order() {
        let events = fixtures();
        let matched = by_tag(&events, Some("music"));
        assert_eq!(matched[0].event_name.as_deref(), Some("A"));
        assert_eq!(matched[1].event_name.as_deref(), Some("B"));
    }
}
