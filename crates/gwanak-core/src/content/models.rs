use chrono::NaiveDate;
use serde::Serialize;

/// One campus carousel slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub id: u32,
    /// Image reference (path under the site's static assets)
    pub image: String,
    pub title: String,
    pub description: String,
    pub location: String,
}

/// Headline figure shown in the statistics section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: u64,
    pub suffix: String,
    pub label: String,
    pub sublabel: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub id: u32,
    pub category: String,
    pub title: String,
    pub date: NaiveDate,
    pub is_video: bool,
    /// Featured items get large cards
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResearchItem {
    pub id: u32,
    pub category: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Ended,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub kind: String,
}

impl Event {
    /// Status on `today`; both bounds are inclusive
    pub fn status(&self, today: NaiveDate) -> EventStatus {
        if today < self.start_date {
            EventStatus::Upcoming
        } else if today > self.end_date {
            EventStatus::Ended
        } else {
            EventStatus::Ongoing
        }
    }
}

/// Visitor group selectable in the quick links section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Audience {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampusAddress {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub fax: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub name: String,
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> Event {
        Event {
            id: 1,
            title: "Library OA APC Support".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 2, 19).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 10, 31).unwrap(),
            location: "University Library".to_string(),
            kind: "Academic".to_string(),
        }
    }

    #[test]
    fn test_event_status_bounds() {
        let e = event();
        let day = |m, d| NaiveDate::from_ymd_opt(2026, m, d).unwrap();
        assert_eq!(e.status(day(2, 18)), EventStatus::Upcoming);
        assert_eq!(e.status(day(2, 19)), EventStatus::Ongoing);
        assert_eq!(e.status(day(10, 31)), EventStatus::Ongoing);
        assert_eq!(e.status(day(11, 1)), EventStatus::Ended);
    }
}
