use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Event rendered by the planning view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    #[serde(default)]
    pub extended_props: Map<String, Value>,
}

impl CalendarEvent {
    /// Day the event is listed under in the agenda
    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }
}

/// Events grouped by start day, days ascending, events by start time.
pub fn group_by_day(events: &[CalendarEvent]) -> Vec<(NaiveDate, Vec<CalendarEvent>)> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));

    let mut groups: Vec<(NaiveDate, Vec<CalendarEvent>)> = Vec::new();
    for event in sorted {
        match groups.last_mut() {
            Some((day, bucket)) if *day == event.day() => bucket.push(event),
            _ => groups.push((event.day(), vec![event])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, start: &str) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: id.to_uppercase(),
            start: NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M").unwrap(),
            end: None,
            extended_props: Map::new(),
        }
    }

    #[test]
    fn test_group_by_day() {
        let events = vec![
            event("c", "2026-03-02 08:00"),
            event("a", "2026-03-01 14:00"),
            event("b", "2026-03-01 09:30"),
        ];
        let groups = group_by_day(&events);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        let ids: Vec<_> = groups[0].1.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(groups[1].1.len(), 1);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(event("x", "2026-01-05 10:00")).unwrap();
        assert!(json.get("extendedProps").is_some());
    }
}
