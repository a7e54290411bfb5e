use raylib::prelude::*;
use crate::constants::*;

/// A loaded photo, drawn cropped to fill a square frame.
pub struct Slide {
    image: Texture2D,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self { image }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, frame: Rectangle, alpha: f32) {
        let source_rec = cover_source_rect(self.image.width() as f32, self.image.height() as f32, frame);
        d.draw_texture_pro(
            &self.image,
            source_rec,
            frame,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, (alpha.clamp(0.0, 1.0) * 255.0) as u8),
        );
    }
}

/// Centered crop of the texture with the frame's aspect ratio.
pub fn cover_source_rect(tex_width: f32, tex_height: f32, frame: Rectangle) -> Rectangle {
    if tex_width <= 0.0 || tex_height <= 0.0 || frame.width <= 0.0 || frame.height <= 0.0 {
        return Rectangle::new(0.0, 0.0, tex_width.max(0.0), tex_height.max(0.0));
    }
    let frame_ratio = frame.width / frame.height;
    let (width, height) = if tex_width / tex_height > frame_ratio {
        (tex_height * frame_ratio, tex_height)
    } else {
        (tex_width, tex_width / frame_ratio)
    };
    Rectangle::new((tex_width - width) * 0.5, (tex_height - height) * 0.5, width, height)
}

/// Opacity ramp restarted whenever the shown photo changes.
#[derive(Debug, Clone, Default)]
pub struct Fade {
    shown: Option<usize>,
    animation_timer: f32,
}

impl Fade {
    pub fn update(&mut self, dt: f32, index: Option<usize>) {
        if index != self.shown {
            self.shown = index;
            self.animation_timer = 0.0;
        } else {
            self.animation_timer = (self.animation_timer + dt).min(FADE_DURATION);
        }
    }

    pub fn alpha(&self) -> f32 {
        (self.animation_timer / FADE_DURATION).min(1.0)
    }
}
