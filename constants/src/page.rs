/// CSS selector of the canvas the renderer binds to on web builds
pub const CANVAS_SELECTOR: &str = "#scene-canvas";

/// Cover shown while the model is loading
pub const LOADER_CLASS: &str = "loader";

/// Page background that fades out to reveal the scene
pub const BACKGROUND_CLASS: &str = "background";

/// Caption revealed while scrolling through the second section
pub const STICKY_TEXT_CLASS: &str = "sticky-text";

/// Caption revealed while scrolling through the third section
pub const STICKY_TEXT2_CLASS: &str = "sticky-text2";

pub const SECTION_TWO: &str = "section-two";
pub const SECTION_THREE: &str = "section-three";
pub const SECTION_FOUR: &str = "section-four";

/// Sections used as scroll trigger anchors, in page order
pub const TRIGGER_SECTIONS: &[&str] = &[SECTION_TWO, SECTION_THREE, SECTION_FOUR];

/// Every element class whose style is driven from the engine
pub const STYLED_ELEMENTS: &[&str] = &[
    LOADER_CLASS,
    BACKGROUND_CLASS,
    STICKY_TEXT_CLASS,
    STICKY_TEXT2_CLASS,
];

/// Attribute set on the loader element when the model failed to load
pub const LOAD_STATE_ATTRIBUTE: &str = "data-load-state";

pub struct SectionSpan {
    pub name: &'static str,
    /// Offset of the section top, in viewport heights
    pub top: f32,
    /// Section height, in viewport heights
    pub height: f32,
}

/// Fallback page layout for native builds when the manifest has none.
/// The first viewport is the hero section without a trigger.
pub const DEFAULT_SECTION_SPANS: &[SectionSpan] = &[
    SectionSpan {
        name: SECTION_TWO,
        top: 1.0,
        height: 1.0,
    },
    SectionSpan {
        name: SECTION_THREE,
        top: 2.0,
        height: 1.0,
    },
    SectionSpan {
        name: SECTION_FOUR,
        top: 3.0,
        height: 1.0,
    },
];
