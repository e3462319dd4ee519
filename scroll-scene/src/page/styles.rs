use std::collections::HashMap;

use bevy::prelude::*;
use constants::page::{BACKGROUND_CLASS, LOADER_CLASS, STICKY_TEXT_CLASS, STICKY_TEXT2_CLASS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementStyle {
    pub opacity: f32,
    /// Vertical translation in percent of the element height
    pub translate_y: f32,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0.0,
        }
    }
}

/// Styles of the page elements driven by the engine, keyed by class.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PageStyles {
    elements: HashMap<String, ElementStyle>,
}

impl Default for PageStyles {
    fn default() -> Self {
        let hidden = ElementStyle {
            opacity: 0.0,
            ..default()
        };

        let elements = [
            (LOADER_CLASS, ElementStyle::default()),
            (BACKGROUND_CLASS, ElementStyle::default()),
            (STICKY_TEXT_CLASS, hidden),
            (STICKY_TEXT2_CLASS, hidden),
        ]
        .into_iter()
        .map(|(class, style)| (class.to_string(), style))
        .collect();

        Self { elements }
    }
}

impl PageStyles {
    pub fn get(&self, class: &str) -> ElementStyle {
        self.elements.get(class).copied().unwrap_or_default()
    }

    pub fn set_opacity(&mut self, class: &str, opacity: f32) {
        self.elements.entry(class.to_string()).or_default().opacity = opacity;
    }

    pub fn set_translate_y(&mut self, class: &str, translate_y: f32) {
        self.elements.entry(class.to_string()).or_default().translate_y = translate_y;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ElementStyle)> {
        self.elements.iter().map(|(class, style)| (class.as_str(), style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captions_start_hidden_and_covers_visible() {
        let styles = PageStyles::default();
        assert_eq!(styles.get(LOADER_CLASS).opacity, 1.0);
        assert_eq!(styles.get(BACKGROUND_CLASS).opacity, 1.0);
        assert_eq!(styles.get(STICKY_TEXT_CLASS).opacity, 0.0);
        assert_eq!(styles.get(STICKY_TEXT2_CLASS).opacity, 0.0);
    }

    #[test]
    fn every_styled_element_has_a_default() {
        let styles = PageStyles::default();
        for class in constants::page::STYLED_ELEMENTS {
            assert!(styles.iter().any(|(c, _)| c == *class), "{class} missing");
        }
    }

    #[test]
    fn unknown_elements_are_created_on_write() {
        let mut styles = PageStyles::default();
        assert_eq!(styles.get("hero"), ElementStyle::default());
        styles.set_translate_y("hero", -50.0);
        assert_eq!(styles.get("hero").translate_y, -50.0);
        assert_eq!(styles.get("hero").opacity, 1.0);
    }
}
