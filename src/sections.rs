//! Scroll spy for the navigation bar.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Read-only view of the rendered page.
pub trait DocumentLayout {
    /// Top offset of the anchor with this id, if it is in the document.
    fn top_offset_of(&self, id: &str) -> Option<f64>;
    fn scroll_offset(&self) -> f64;
    fn viewport_height(&self) -> f64;
}

/// Picks the last section whose top is at or above a third of the way down
/// the viewport. Sections with no known top are skipped, and the first
/// section wins when nothing qualifies.
///
/// `sections` must not be empty.
pub fn active_section<'a>(
    sections: &'a [Section],
    tops: &[Option<f64>],
    scroll_offset: f64,
    viewport_height: f64,
) -> &'a str {
    let threshold = scroll_offset + viewport_height / 3.0;
    sections
        .iter()
        .zip(tops)
        .filter_map(|(section, top)| top.map(|top| (section, top)))
        .filter(|(_, top)| *top <= threshold)
        .map(|(section, _)| section.id.as_str())
        .last()
        .unwrap_or(sections[0].id.as_str())
}

#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    sections: Vec<Section>,
    active: usize,
}

impl ActiveSectionTracker {
    pub fn new(sections: Vec<Section>) -> Result<Self> {
        if sections.is_empty() {
            return Err(Error::NoSections);
        }
        Ok(Self {
            sections,
            active: 0,
        })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn active_id(&self) -> &str {
        &self.sections[self.active].id
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == id
    }

    /// Re-reads the layout and returns whether the active section changed.
    pub fn recompute(&mut self, layout: &impl DocumentLayout) -> bool {
        let tops = self
            .sections
            .iter()
            .map(|s| layout.top_offset_of(&s.id))
            .collect::<Vec<_>>();
        let id = active_section(
            &self.sections,
            &tops,
            layout.scroll_offset(),
            layout.viewport_height(),
        );
        let active = self
            .sections
            .iter()
            .position(|s| s.id == id)
            .unwrap_or_default();
        if active == self.active {
            return false;
        }
        log::debug!("active section is now {id}");
        self.active = active;
        true
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct FakeLayout {
        tops: HashMap<String, f64>,
        scroll: f64,
        viewport: f64,
    }

    impl FakeLayout {
        fn new(tops: &[(&str, f64)], viewport: f64) -> Self {
            Self {
                tops: tops.iter().map(|(id, t)| (id.to_string(), *t)).collect(),
                scroll: 0.0,
                viewport,
            }
        }
    }

    impl DocumentLayout for FakeLayout {
        fn top_offset_of(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }

        fn scroll_offset(&self) -> f64 {
            self.scroll
        }

        fn viewport_height(&self) -> f64 {
            self.viewport
        }
    }

    fn three_sections() -> Vec<Section> {
        vec![
            Section::new("home", "Home"),
            Section::new("about", "About"),
            Section::new("contact", "Contact"),
        ]
    }

    #[test]
    fn test_active_section_threshold() {
        let sections = three_sections();
        let tops = [Some(0.0), Some(800.0), Some(1600.0)];
        // 750 + 300 / 3 = 850
        assert_eq!(active_section(&sections, &tops, 750.0, 300.0), "about");
        assert_eq!(active_section(&sections, &tops, 0.0, 300.0), "home");
        assert_eq!(active_section(&sections, &tops, 1500.0, 300.0), "contact");
        // exactly on the threshold counts
        assert_eq!(active_section(&sections, &tops, 700.0, 300.0), "about");
        assert_eq!(active_section(&sections, &tops, 699.0, 300.0), "home");
    }

    #[test]
    fn test_active_section_defaults_to_first() {
        let sections = three_sections();
        let tops = [Some(200.0), Some(800.0), Some(1600.0)];
        assert_eq!(active_section(&sections, &tops, 0.0, 300.0), "home");
        assert_eq!(active_section(&sections, &[None, None, None], 5000.0, 300.0), "home");
    }

    #[test]
    fn test_missing_anchor_is_skipped() {
        let sections = three_sections();
        let tops = [Some(0.0), None, Some(1600.0)];
        assert_eq!(active_section(&sections, &tops, 900.0, 300.0), "home");
        assert_eq!(active_section(&sections, &tops, 1600.0, 300.0), "contact");
    }

    #[test]
    fn test_last_match_wins() {
        // out-of-order tops still resolve by declared order
        let sections = three_sections();
        let tops = [Some(0.0), Some(900.0), Some(100.0)];
        assert_eq!(active_section(&sections, &tops, 0.0, 600.0), "contact");
    }

    #[test]
    fn test_tracker_requires_sections() {
        assert_eq!(
            ActiveSectionTracker::new(Vec::new()).unwrap_err(),
            Error::NoSections
        );
    }

    #[test]
    fn test_tracker_recompute() {
        let mut tracker = ActiveSectionTracker::new(three_sections()).unwrap();
        let mut layout = FakeLayout::new(
            &[("home", 0.0), ("about", 800.0), ("contact", 1600.0)],
            300.0,
        );
        assert_eq!(tracker.active_id(), "home");
        assert!(!tracker.recompute(&layout));

        layout.scroll = 750.0;
        assert!(tracker.recompute(&layout));
        assert!(tracker.is_active("about"));

        layout.scroll = 760.0;
        assert!(!tracker.recompute(&layout));

        layout.scroll = 0.0;
        assert!(tracker.recompute(&layout));
        assert_eq!(tracker.active_id(), "home");
    }

    #[test]
    fn test_tracker_without_anchors() {
        let mut tracker = ActiveSectionTracker::new(three_sections()).unwrap();
        let mut layout = FakeLayout::new(&[], 900.0);
        layout.scroll = 2000.0;
        assert!(!tracker.recompute(&layout));
        assert_eq!(tracker.active_id(), "home");
    }
}
