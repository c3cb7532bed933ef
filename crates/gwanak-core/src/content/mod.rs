//! Seeded homepage content
//!
//! Everything here is fixed at startup and never mutated; widgets only read it.

mod models;
mod seed;

pub use models::{
    Audience, CampusAddress, Event, EventStatus, FooterLink, NewsItem, QuickLink, ResearchItem,
    Slide, Stat,
};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroContent {
    pub badge: String,
    /// Headline lines, revealed one after another
    pub headline: Vec<String>,
    pub subheading: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    /// Section names listed in the top bar
    pub anchors: Vec<String>,
    pub hero: HeroContent,
    pub stats: Vec<Stat>,
    pub library_holdings: Stat,
    pub news: Vec<NewsItem>,
    pub research: Vec<ResearchItem>,
    pub events: Vec<Event>,
    pub audiences: Vec<Audience>,
    pub quick_links: Vec<QuickLink>,
    pub slides: Vec<Slide>,
    pub campuses: Vec<CampusAddress>,
    pub footer_links: Vec<FooterLink>,
    pub legal_links: Vec<FooterLink>,
    pub social: Vec<String>,
}

impl SiteContent {
    pub fn builtin() -> Self {
        seed::builtin()
    }

    pub fn featured_news(&self) -> impl Iterator<Item = &NewsItem> {
        self.news.iter().filter(|n| n.featured)
    }

    pub fn latest_news(&self) -> impl Iterator<Item = &NewsItem> {
        self.news.iter().filter(|n| !n.featured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sequences_are_non_empty() {
        let content = SiteContent::builtin();
        assert_eq!(content.slides.len(), 4);
        assert_eq!(content.stats.len(), 4);
        assert!(!content.news.is_empty());
        assert!(!content.research.is_empty());
        assert!(!content.events.is_empty());
        assert!(!content.audiences.is_empty());
        assert!(!content.campuses.is_empty());
    }

    #[test]
    fn test_slide_ids_are_unique_and_ordered() {
        let content = SiteContent::builtin();
        let ids: Vec<u32> = content.slides.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(content.slides[0].image, "/campus-1.jpg");
    }

    #[test]
    fn test_news_split() {
        let content = SiteContent::builtin();
        assert_eq!(content.featured_news().count(), 2);
        assert_eq!(content.latest_news().count(), 3);
    }

    #[test]
    fn test_event_dates_are_ordered() {
        let content = SiteContent::builtin();
        for event in &content.events {
            assert!(event.start_date <= event.end_date, "{}", event.title);
        }
    }
}
