use bevy::color::Alpha;
use bevy::prelude::*;
use constants::page::{BACKGROUND_CLASS, LOADER_CLASS, STICKY_TEXT_CLASS, STICKY_TEXT2_CLASS};

use crate::engine::loading::progress::LoadProgress;
use crate::page::styles::PageStyles;

/// UI node standing in for the page element with the given class.
#[derive(Component, Debug, Clone)]
pub struct PageElement {
    pub class: String,
    /// Resting top offset in percent; the style translation is added to it.
    pub base_top: f32,
}

#[derive(Component)]
pub struct LoaderCaption;

pub fn create_native_overlays(commands: &mut Commands) {
    commands.spawn((
        full_screen_node(),
        BackgroundColor(Color::srgb(0.93, 0.91, 0.87)),
        GlobalZIndex(0),
        PageElement {
            class: BACKGROUND_CLASS.to_string(),
            base_top: 0.0,
        },
    ));

    spawn_caption(commands, STICKY_TEXT_CLASS, "Every frame, scroll-bound", 35.0);
    spawn_caption(commands, STICKY_TEXT2_CLASS, "Keep scrolling", 55.0);

    commands
        .spawn((
            Node {
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..full_screen_node()
            },
            BackgroundColor(Color::srgb(0.05, 0.05, 0.07)),
            GlobalZIndex(2),
            PageElement {
                class: LOADER_CLASS.to_string(),
                base_top: 0.0,
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Loading 0%"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                LoaderCaption,
            ));
        });
}

fn full_screen_node() -> Node {
    Node {
        position_type: PositionType::Absolute,
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        top: Val::Percent(0.0),
        left: Val::Percent(0.0),
        ..default()
    }
}

fn spawn_caption(commands: &mut Commands, class: &str, caption: &str, top: f32) {
    commands.spawn((
        Text::new(caption),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        TextColor(Color::WHITE.with_alpha(0.0)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(top),
            left: Val::Percent(8.0),
            ..default()
        },
        GlobalZIndex(1),
        PageElement {
            class: class.to_string(),
            base_top: top,
        },
    ));
}

pub fn sync_overlay_styles(
    styles: Res<PageStyles>,
    mut elements: Query<(
        &PageElement,
        &mut Node,
        Option<&mut BackgroundColor>,
        Option<&mut TextColor>,
    )>,
) {
    if !styles.is_changed() {
        return;
    }

    for (element, mut node, background, text_colour) in &mut elements {
        let style = styles.get(&element.class);
        node.top = Val::Percent(element.base_top + style.translate_y);
        if let Some(mut background) = background {
            background.0.set_alpha(style.opacity);
        }
        if let Some(mut text_colour) = text_colour {
            text_colour.0.set_alpha(style.opacity);
        }
    }
}

pub fn update_loader_caption(
    loading_progress: Res<LoadProgress>,
    mut captions: Query<&mut Text, With<LoaderCaption>>,
) {
    if !loading_progress.is_changed() || loading_progress.failure().is_some() {
        return;
    }

    for mut text in &mut captions {
        text.0 = format!("Loading {:.0}%", loading_progress.fraction() * 100.0);
    }
}

pub fn show_load_failure(
    loading_progress: Res<LoadProgress>,
    mut captions: Query<(&mut Text, &mut TextColor), With<LoaderCaption>>,
) {
    let message = loading_progress.failure().unwrap_or("unknown error");
    for (mut text, mut colour) in &mut captions {
        text.0 = format!("Failed to load scene: {message}");
        colour.0 = Color::srgb(1.0, 0.35, 0.35);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_follow_page_styles() {
        let mut app = App::new();
        app.init_resource::<PageStyles>()
            .add_systems(Update, sync_overlay_styles);

        let loader = app
            .world_mut()
            .spawn((
                PageElement {
                    class: LOADER_CLASS.to_string(),
                    base_top: 0.0,
                },
                Node::default(),
                BackgroundColor(Color::BLACK),
            ))
            .id();
        let caption = app
            .world_mut()
            .spawn((
                PageElement {
                    class: STICKY_TEXT_CLASS.to_string(),
                    base_top: 35.0,
                },
                Node::default(),
                TextColor(Color::WHITE),
            ))
            .id();

        {
            let mut styles = app.world_mut().resource_mut::<PageStyles>();
            styles.set_translate_y(LOADER_CLASS, -100.0);
            styles.set_opacity(STICKY_TEXT_CLASS, 0.5);
        }
        app.update();

        let world = app.world();
        assert_eq!(world.get::<Node>(loader).unwrap().top, Val::Percent(-100.0));
        assert_eq!(world.get::<Node>(caption).unwrap().top, Val::Percent(35.0));
        assert_eq!(world.get::<TextColor>(caption).unwrap().0.alpha(), 0.5);
    }

    #[test]
    fn loader_caption_shows_progress() {
        let mut app = App::new();
        app.init_resource::<LoadProgress>()
            .add_systems(Update, update_loader_caption);
        let caption = app
            .world_mut()
            .spawn((Text::new("Loading 0%"), LoaderCaption))
            .id();

        app.world_mut().resource_mut::<LoadProgress>().report(0.6);
        app.update();
        assert_eq!(app.world().get::<Text>(caption).unwrap().0, "Loading 60%");
    }
}
