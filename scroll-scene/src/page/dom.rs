use bevy::prelude::*;
use constants::page::{LOAD_STATE_ATTRIBUTE, LOADER_CLASS, TRIGGER_SECTIONS};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, window};

use crate::page::layout::{PageLayout, SectionRect};
use crate::page::styles::{ElementStyle, PageStyles};

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

fn elements_with_class(document: &Document, class: &str) -> Vec<Element> {
    let collection = document.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|index| collection.item(index))
        .collect()
}

/// Read scroll offset, viewport height and section rectangles from the DOM.
/// A missing section is simply left out of the layout.
pub fn sample_dom_layout(mut layout: ResMut<PageLayout>) {
    if layout.host_driven {
        return;
    }

    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0) as f32;

    let mut sampled = PageLayout::new(scroll_y, viewport_height);
    for name in TRIGGER_SECTIONS {
        let Some(element) = elements_with_class(&document, name).into_iter().next() else {
            continue;
        };
        let rect = element.get_bounding_client_rect();
        sampled.set_section(
            *name,
            SectionRect {
                top: rect.top() as f32 + scroll_y,
                height: rect.height() as f32,
            },
        );
    }

    layout.set_if_neq(sampled);
}

/// Push changed element styles to the inline style of matching elements.
pub fn apply_dom_styles(styles: Res<PageStyles>) {
    if !styles.is_changed() {
        return;
    }

    let Some(document) = document() else {
        return;
    };

    for (class, style) in styles.iter() {
        for element in elements_with_class(&document, class) {
            let Ok(element) = element.dyn_into::<HtmlElement>() else {
                continue;
            };
            if let Err(e) = write_style(&element, style) {
                warn!("Failed to style .{}: {:?}", class, e);
            }
        }
    }
}

fn write_style(element: &HtmlElement, style: &ElementStyle) -> Result<(), wasm_bindgen::JsValue> {
    let css = element.style();
    css.set_property("opacity", &style.opacity.to_string())?;
    css.set_property("transform", &format!("translateY({}%)", style.translate_y))
}

/// Flag the loader so the page stylesheet can show the failure.
pub fn mark_load_failed(message: &str) {
    let Some(document) = document() else {
        return;
    };

    for loader in elements_with_class(&document, LOADER_CLASS) {
        if let Err(e) = loader
            .set_attribute(LOAD_STATE_ATTRIBUTE, "failed")
            .and_then(|_| loader.set_attribute("title", message))
        {
            error!("Failed to mark loader as failed: {:?}", e);
        }
    }
}
