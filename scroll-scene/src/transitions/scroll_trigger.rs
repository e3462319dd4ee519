use crate::page::layout::PageLayout;

/// A position along an element or the viewport, as a fraction of its height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
    Fraction(f32),
}

impl Edge {
    pub fn fraction(self) -> f32 {
        match self {
            Self::Top => 0.0,
            Self::Center => 0.5,
            Self::Bottom => 1.0,
            Self::Fraction(f) => f,
        }
    }
}

/// Scroll position at which an element edge meets a viewport edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub element: Edge,
    pub viewport: Edge,
}

impl Marker {
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }
}

/// Scroll region over a named section.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrigger {
    pub section: String,
    pub start: Marker,
    pub end: Marker,
}

impl ScrollTrigger {
    pub fn new(section: impl Into<String>, start: Marker, end: Marker) -> Self {
        Self {
            section: section.into(),
            start,
            end,
        }
    }

    /// From the section entering the bottom of the viewport until its top
    /// reaches the top of the viewport.
    pub fn entering(section: impl Into<String>) -> Self {
        Self::new(
            section,
            Marker::new(Edge::Top, Edge::Bottom),
            Marker::new(Edge::Top, Edge::Top),
        )
    }

    /// Scroll offsets of the start and end markers, or `None` when the
    /// section is not on the page.
    pub fn scroll_range(&self, layout: &PageLayout) -> Option<(f32, f32)> {
        let section = layout.section(&self.section)?;
        let offset = |marker: Marker| {
            section.top + marker.element.fraction() * section.height
                - marker.viewport.fraction() * layout.viewport_height
        };
        Some((offset(self.start), offset(self.end)))
    }

    /// Progress through the region in `[0, 1]`. An empty or inverted region
    /// steps from 0 to 1 at its start. A non-finite region is inert.
    pub fn progress(&self, layout: &PageLayout) -> Option<f32> {
        let (start, end) = self.scroll_range(layout)?;
        if !start.is_finite() || !end.is_finite() || !layout.scroll_y.is_finite() {
            return None;
        }
        if end <= start {
            return Some(if layout.scroll_y >= start { 1.0 } else { 0.0 });
        }
        Some(((layout.scroll_y - start) / (end - start)).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::layout::SectionRect;

    fn layout(scroll_y: f32) -> PageLayout {
        let mut layout = PageLayout::new(scroll_y, 800.0);
        layout.set_section(
            "section-two",
            SectionRect {
                top: 1000.0,
                height: 600.0,
            },
        );
        layout
    }

    #[test]
    fn entering_region_spans_one_viewport() {
        let trigger = ScrollTrigger::entering("section-two");
        assert_eq!(trigger.scroll_range(&layout(0.0)), Some((200.0, 1000.0)));
        assert_eq!(trigger.progress(&layout(0.0)), Some(0.0));
        assert_eq!(trigger.progress(&layout(200.0)), Some(0.0));
        assert_eq!(trigger.progress(&layout(600.0)), Some(0.5));
        assert_eq!(trigger.progress(&layout(1000.0)), Some(1.0));
        assert_eq!(trigger.progress(&layout(5000.0)), Some(1.0));
    }

    #[test]
    fn custom_markers_use_element_and_viewport_fractions() {
        let trigger = ScrollTrigger::new(
            "section-two",
            Marker::new(Edge::Center, Edge::Center),
            Marker::new(Edge::Bottom, Edge::Fraction(0.25)),
        );
        // start: 1000 + 300 - 400, end: 1000 + 600 - 200
        assert_eq!(trigger.scroll_range(&layout(0.0)), Some((900.0, 1400.0)));
    }

    #[test]
    fn missing_section_is_inert() {
        let trigger = ScrollTrigger::entering("section-five");
        assert_eq!(trigger.progress(&layout(1000.0)), None);
    }

    #[test]
    fn non_finite_sections_are_inert() {
        let mut layout = layout(500.0);
        layout.set_section(
            "section-two",
            SectionRect {
                top: 1000.0,
                height: f32::INFINITY,
            },
        );
        let trigger = ScrollTrigger::new(
            "section-two",
            Marker::new(Edge::Top, Edge::Bottom),
            Marker::new(Edge::Bottom, Edge::Top),
        );
        assert_eq!(trigger.progress(&layout), None);

        layout.set_section(
            "section-two",
            SectionRect {
                top: f32::NAN,
                height: 600.0,
            },
        );
        assert_eq!(ScrollTrigger::entering("section-two").progress(&layout), None);
    }

    #[test]
    fn empty_region_steps_at_start() {
        let marker = Marker::new(Edge::Top, Edge::Top);
        let trigger = ScrollTrigger::new("section-two", marker, marker);
        assert_eq!(trigger.progress(&layout(999.0)), Some(0.0));
        assert_eq!(trigger.progress(&layout(1000.0)), Some(1.0));
    }

    #[test]
    fn progress_is_monotonic_in_scroll() {
        let trigger = ScrollTrigger::entering("section-two");
        let mut previous = 0.0;
        for step in 0..=120 {
            let progress = trigger.progress(&layout(step as f32 * 10.0)).unwrap();
            assert!(progress >= previous);
            previous = progress;
        }
    }
}
