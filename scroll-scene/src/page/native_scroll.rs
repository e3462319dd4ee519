use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::constants::render_settings::WHEEL_LINE_PIXELS;
use crate::engine::assets::scene_manifest::PageSection;
use crate::engine::scene::viewport::ViewportState;
use crate::page::layout::{PageLayout, SectionRect};

/// Simulated page for native builds; sections are in viewport heights.
#[derive(Resource, Debug, Clone)]
pub struct VirtualPage {
    sections: Vec<PageSection>,
}

impl VirtualPage {
    pub fn new(sections: Vec<PageSection>) -> Self {
        Self { sections }
    }

    /// Rebuild section rectangles for a viewport height, keeping the
    /// scroll offset inside the new page.
    pub fn layout_into(&self, layout: &mut PageLayout, viewport_height: f32) {
        layout.viewport_height = viewport_height;
        layout.clear_sections();
        for section in &self.sections {
            layout.set_section(
                section.name.clone(),
                SectionRect {
                    top: section.top * viewport_height,
                    height: section.height * viewport_height,
                },
            );
        }
        layout.scroll_y = layout.scroll_y.clamp(0.0, layout.max_scroll());
    }
}

/// Scroll by `delta` page pixels, clamped to the page.
pub fn scroll_by(layout: &mut PageLayout, delta: f32) {
    layout.scroll_y = (layout.scroll_y + delta).clamp(0.0, layout.max_scroll());
}

pub fn scroll_virtual_page(
    mut scroll_events: EventReader<MouseWheel>,
    page: Option<Res<VirtualPage>>,
    viewport: Res<ViewportState>,
    mut layout: ResMut<PageLayout>,
) {
    let Some(page) = page else {
        scroll_events.clear();
        return;
    };

    if layout.host_driven {
        scroll_events.clear();
        return;
    }

    let viewport_height = viewport.renderer.canvas_size.y;
    if page.is_added() || layout.viewport_height != viewport_height {
        page.layout_into(&mut layout, viewport_height);
    }

    // Wheel down reports negative y; the page scrolls down.
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => -ev.y * WHEEL_LINE_PIXELS,
            MouseScrollUnit::Pixel => -ev.y,
        };
    }

    if scroll_accum != 0.0 {
        scroll_by(&mut layout, scroll_accum);
    }
}
