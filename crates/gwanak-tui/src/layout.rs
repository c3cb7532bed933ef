//! Vertical page layout
//!
//! Sections are stacked top to bottom on a virtual page taller than the
//! terminal; the viewport is a window onto it at the current scroll offset.

use gwanak_core::gate::VerticalSpan;

/// Page sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Stats,
    News,
    Research,
    Events,
    QuickLinks,
    Campus,
    Footer,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Hero,
        Section::Stats,
        Section::News,
        Section::Research,
        Section::Events,
        Section::QuickLinks,
        Section::Campus,
        Section::Footer,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Stats => "Numbers",
            Section::News => "News",
            Section::Research => "Research",
            Section::Events => "Events",
            Section::QuickLinks => "Quick Links",
            Section::Campus => "Campus",
            Section::Footer => "Contact",
        }
    }

    /// Fixed height in rows; the hero fills the first screen
    fn height(self, viewport_height: u16) -> u16 {
        match self {
            Section::Hero => viewport_height.max(14),
            Section::Stats => 12,
            Section::News => 14,
            Section::Research => 13,
            Section::Events => 15,
            Section::QuickLinks => 11,
            Section::Campus => 19,
            Section::Footer => 12,
        }
    }
}

/// Position of one section on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub section: Section,
    pub top: u16,
    pub height: u16,
}

impl Placement {
    pub fn span(&self) -> VerticalSpan {
        VerticalSpan::new(u32::from(self.top), u32::from(self.height))
    }
}

#[derive(Debug, Clone)]
pub struct PageLayout {
    placements: Vec<Placement>,
    viewport_height: u16,
}

impl PageLayout {
    pub fn new(viewport_height: u16) -> Self {
        let mut top = 0u16;
        let placements = Section::ALL
            .iter()
            .map(|&section| {
                let height = section.height(viewport_height);
                let placement = Placement {
                    section,
                    top,
                    height,
                };
                top = top.saturating_add(height);
                placement
            })
            .collect();
        Self {
            placements,
            viewport_height,
        }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn placement(&self, section: Section) -> Placement {
        self.placements[section.index()]
    }

    pub fn page_height(&self) -> u16 {
        self.placements
            .last()
            .map(|p| p.top.saturating_add(p.height))
            .unwrap_or(0)
    }

    pub fn max_scroll(&self) -> u16 {
        self.page_height().saturating_sub(self.viewport_height)
    }

    pub fn viewport(&self, scroll: u16) -> VerticalSpan {
        VerticalSpan::new(u32::from(scroll), u32::from(self.viewport_height))
    }

    /// Section containing the top row of the viewport
    pub fn section_at(&self, scroll: u16) -> Section {
        self.placements
            .iter()
            .rev()
            .find(|p| p.top <= scroll)
            .map(|p| p.section)
            .unwrap_or(Section::Hero)
    }

    /// First section starting below `scroll`
    pub fn next_anchor(&self, scroll: u16) -> Option<Placement> {
        self.placements.iter().copied().find(|p| p.top > scroll)
    }

    /// Last section starting above `scroll`
    pub fn previous_anchor(&self, scroll: u16) -> Option<Placement> {
        self.placements.iter().rev().copied().find(|p| p.top < scroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_contiguous() {
        let layout = PageLayout::new(30);
        let mut expected_top = 0;
        for placement in layout.placements() {
            assert_eq!(placement.top, expected_top);
            expected_top += placement.height;
        }
        assert_eq!(layout.page_height(), expected_top);
    }

    #[test]
    fn test_hero_fills_viewport() {
        let layout = PageLayout::new(40);
        assert_eq!(layout.placement(Section::Hero).height, 40);
        assert_eq!(layout.placement(Section::Stats).top, 40);
    }

    #[test]
    fn test_section_index_matches_order() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn test_anchors() {
        let layout = PageLayout::new(30);
        let stats_top = layout.placement(Section::Stats).top;

        assert_eq!(layout.next_anchor(0).map(|p| p.section), Some(Section::Stats));
        assert_eq!(layout.previous_anchor(0), None);
        assert_eq!(
            layout.previous_anchor(stats_top + 1).map(|p| p.section),
            Some(Section::Stats)
        );
        assert_eq!(layout.section_at(stats_top), Section::Stats);
        assert_eq!(layout.section_at(stats_top - 1), Section::Hero);
    }

    #[test]
    fn test_campus_starts_off_screen() {
        let layout = PageLayout::new(30);
        let campus = layout.placement(Section::Campus);
        assert!(campus.top > 30);
        assert_eq!(
            gwanak_core::gate::intersection_ratio(campus.span(), layout.viewport(0)),
            0.0
        );
    }
}
