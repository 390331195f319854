//! Full-scene render pass.
//!
//! Draw order matches the scene's layering: background, soundboard panel,
//! panel texts, buttons (label + play/pause or lock icon), animal sprites
//! scaled by the pop animation, and the verdict banner on top.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::soundbutton::SoundButton;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::feedback::FeedbackBanner;
use crate::resources::roster::Roster;
use crate::resources::texturestore::TextureStore;

/// Golden fill of the sound buttons.
const BUTTON_COLOR: Color = Color {
    r: 231,
    g: 188,
    b: 94,
    a: 255,
};
/// Fraction of the window width covered by the soundboard panel.
const PANEL_WIDTH_FRACTION: f32 = 0.25;
const LABEL_FONT_SIZE: i32 = 18;
const BANNER_FONT_SIZE: i32 = 28;

/// Exclusive system: takes the raylib handle out of the world for the
/// duration of the frame's draw calls.
pub fn render_system(world: &mut World) {
    let thread = world
        .remove_non_send_resource::<raylib::RaylibThread>()
        .expect("raylib thread missing");
    let mut rl = world
        .remove_non_send_resource::<raylib::RaylibHandle>()
        .expect("raylib handle missing");

    let screen_w = rl.get_screen_width() as f32;
    let screen_h = rl.get_screen_height() as f32;
    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);
        draw_scene(world, &mut d, screen_w, screen_h);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

fn draw_full_texture(
    d: &mut RaylibDrawHandle,
    texture: &Texture2D,
    dest: Rectangle,
    origin: Vector2,
) {
    let src = Rectangle {
        x: 0.0,
        y: 0.0,
        width: texture.width as f32,
        height: texture.height as f32,
    };
    d.draw_texture_pro(texture, src, dest, origin, 0.0, Color::WHITE);
}

fn draw_scene(world: &mut World, d: &mut RaylibDrawHandle, screen_w: f32, screen_h: f32) {
    // Backdrop and panel art.
    {
        let textures = world.resource::<TextureStore>();
        if let Some(texture) = textures.get("background") {
            let dest = Rectangle {
                x: 0.0,
                y: 0.0,
                width: screen_w,
                height: screen_h,
            };
            draw_full_texture(d, texture, dest, Vector2 { x: 0.0, y: 0.0 });
        }
        if let Some(texture) = textures.get("soundboard") {
            let dest = Rectangle {
                x: 0.0,
                y: 0.0,
                width: screen_w * PANEL_WIDTH_FRACTION,
                height: screen_h,
            };
            draw_full_texture(d, texture, dest, Vector2 { x: 0.0, y: 0.0 });
        }
    }

    // Sound buttons: golden rounded rect, label and play/pause toggle when
    // unlocked, centered lock icon otherwise.
    let buttons: Vec<(SoundButton, Vector2)> = {
        let mut query = world.query::<(&SoundButton, &ScreenPosition)>();
        query
            .iter(world)
            .map(|(button, position)| (button.clone(), position.pos))
            .collect()
    };
    {
        let roster = world.resource::<Roster>();
        let textures = world.resource::<TextureStore>();
        for (button, position) in &buttons {
            let rect = Rectangle {
                x: position.x,
                y: position.y,
                width: button.width,
                height: button.height,
            };
            d.draw_rectangle_rounded(rect, 0.25, 10, BUTTON_COLOR);

            let Some(record) = roster.get(button.animal) else {
                continue;
            };
            let locked = !record.unlocked();
            let icon_key = if locked {
                "lock"
            } else if button.playing {
                "pause"
            } else {
                "play"
            };
            if let Some(texture) = textures.get(icon_key) {
                let offset = button.icon_offset(locked);
                let dest = Rectangle {
                    x: position.x + offset.x,
                    y: position.y + offset.y,
                    width: button.icon_size,
                    height: button.icon_size,
                };
                draw_full_texture(d, texture, dest, Vector2 { x: 0.0, y: 0.0 });
            }
            if !locked {
                d.draw_text(
                    &record.display_name,
                    (position.x + 12.0) as i32,
                    (position.y + (button.height - LABEL_FONT_SIZE as f32) * 0.5) as i32,
                    LABEL_FONT_SIZE,
                    Color::BLACK,
                );
            }
        }
    }

    // Panel texts.
    let texts: Vec<(DynamicText, Vector2)> = {
        let mut query = world.query::<(&DynamicText, &ScreenPosition)>();
        query
            .iter(world)
            .map(|(text, position)| (text.clone(), position.pos))
            .collect()
    };
    for (text, position) in &texts {
        d.draw_text(
            &text.content,
            position.x as i32,
            position.y as i32,
            text.font_size as i32,
            text.color,
        );
    }

    // Animal sprites, scaled about their pivot by the pop animation.
    let mut sprites: Vec<(Sprite, Vector2, f32, ZIndex)> = {
        let mut query = world.query::<(&Sprite, &ScreenPosition, &Scale, &ZIndex)>();
        query
            .iter(world)
            .map(|(sprite, position, scale, z)| (sprite.clone(), position.pos, scale.factor, *z))
            .collect()
    };
    sprites.sort_by_key(|(_, _, _, z)| *z);
    {
        let textures = world.resource::<TextureStore>();
        for (sprite, position, factor, _z) in &sprites {
            if let Some(texture) = textures.get(&sprite.tex_key) {
                let dest = Rectangle {
                    x: position.x,
                    y: position.y,
                    width: sprite.width * factor,
                    height: sprite.height * factor,
                };
                let origin = Vector2 {
                    x: sprite.origin.x * factor,
                    y: sprite.origin.y * factor,
                };
                draw_full_texture(d, texture, dest, origin);
            }
        }
    }

    // Verdict banner on top of everything.
    let banner = world.resource::<FeedbackBanner>();
    if banner.is_visible() {
        d.draw_text(
            &banner.text,
            (screen_w * 0.5) as i32,
            (screen_h * 0.075) as i32,
            BANNER_FONT_SIZE,
            banner.color,
        );
    }
}
