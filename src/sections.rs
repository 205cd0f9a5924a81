/// Page sections reachable from the navbar, in page order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink::new("about", "About Me"),
    NavLink::new("skills", "Skills"),
    NavLink::new("achievements", "Achievements"),
    NavLink::new("certificates", "Certificates"),
    NavLink::new("projects", "Projects"),
    NavLink::new("contact", "Contact"),
];

/// Added to the scroll position before hit testing, so a section counts as
/// active slightly before its top reaches the viewport edge.
pub const PROBE_OFFSET: f64 = 100.0;
/// Height of the fixed navbar, kept clear when scrolling to a section.
pub const NAV_HEIGHT: f64 = 80.0;
pub const SCROLLED_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

pub fn probe_position(scroll_y: f64) -> f64 {
    scroll_y + PROBE_OFFSET
}

/// Last section whose bounds contain `probe`. See [`probe_position`].
pub fn active_section(probe: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.contains(probe))
        .map(|s| s.id.as_str())
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

pub fn scroll_target(offset_top: f64) -> f64 {
    (offset_top - NAV_HEIGHT).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        [("hero", 0.0, 800.0), ("about", 800.0, 600.0), ("skills", 1400.0, 900.0)]
            .into_iter()
            .map(|(id, top, height)| SectionBounds {
                id: id.to_string(),
                top,
                height,
            })
            .collect()
    }

    #[test]
    fn test_active_section() {
        let sections = layout();
        assert_eq!(active_section(100.0, &sections), Some("hero"));
        assert_eq!(active_section(799.0, &sections), Some("hero"));
        assert_eq!(active_section(800.0, &sections), Some("about"));
        assert_eq!(active_section(1400.0, &sections), Some("skills"));
        assert_eq!(active_section(2300.0, &sections), None);
    }

    #[test]
    fn test_probe_sits_below_scroll_position() {
        let sections = layout();
        assert_eq!(probe_position(0.0), 100.0);
        // about starts at 800, so it is active from a scroll of 700
        assert_eq!(active_section(probe_position(699.0), &sections), Some("hero"));
        assert_eq!(active_section(probe_position(700.0), &sections), Some("about"));
    }

    #[test]
    fn test_active_section_prefers_later_overlap() {
        let mut sections = layout();
        sections.push(SectionBounds {
            id: "overlay".to_string(),
            top: 700.0,
            height: 400.0,
        });
        assert_eq!(active_section(850.0, &sections), Some("overlay"));
    }

    #[test]
    fn test_nothing_above_first_section() {
        let sections = vec![SectionBounds {
            id: "about".to_string(),
            top: 900.0,
            height: 300.0,
        }];
        assert_eq!(active_section(probe_position(0.0), &sections), None);
        assert_eq!(active_section(900.0, &sections), Some("about"));
    }

    #[test]
    fn test_scroll_helpers() {
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert_eq!(scroll_target(880.0), 800.0);
        assert_eq!(scroll_target(20.0), 0.0);
    }

    #[test]
    fn test_nav_links_unique() {
        let mut ids = NAV_LINKS.iter().map(|l| l.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), NAV_LINKS.len());
        assert_eq!(NAV_LINKS.last().map(|l| l.id), Some("contact"));
    }
}
