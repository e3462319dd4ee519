use std::collections::HashMap;

use bevy::prelude::*;

/// A page section in page pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f32,
    pub height: f32,
}

impl SectionRect {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub scroll_y: f32,
    pub viewport_height: f32,
    sections: HashMap<String, SectionRect>,
    /// Set once the host page pushed a layout over RPC; local sampling
    /// stops overwriting it from then on.
    pub host_driven: bool,
}

impl PageLayout {
    pub fn new(scroll_y: f32, viewport_height: f32) -> Self {
        Self {
            scroll_y,
            viewport_height,
            ..default()
        }
    }

    pub fn section(&self, name: &str) -> Option<SectionRect> {
        self.sections.get(name).copied()
    }

    pub fn set_section(&mut self, name: impl Into<String>, rect: SectionRect) {
        self.sections.insert(name.into(), rect);
    }

    pub fn clear_sections(&mut self) {
        self.sections.clear();
    }

    /// Bottom of the lowest section, or the viewport when there are none.
    pub fn page_height(&self) -> f32 {
        self.sections
            .values()
            .map(SectionRect::bottom)
            .fold(self.viewport_height, f32::max)
    }

    pub fn max_scroll(&self) -> f32 {
        (self.page_height() - self.viewport_height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_height_covers_the_lowest_section() {
        let mut layout = PageLayout::new(0.0, 800.0);
        assert_eq!(layout.page_height(), 800.0);
        assert_eq!(layout.max_scroll(), 0.0);

        layout.set_section("section-two", SectionRect { top: 800.0, height: 800.0 });
        layout.set_section("section-four", SectionRect { top: 2400.0, height: 800.0 });
        assert_eq!(layout.page_height(), 3200.0);
        assert_eq!(layout.max_scroll(), 2400.0);
        assert_eq!(layout.section("section-three"), None);
    }
}
