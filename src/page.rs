// Layout and hit testing live in the fixed render space, window positions are mapped into it.

use std::f32::consts::PI;
use raylib::prelude::*;
use crate::carousel::CarouselView;
use crate::confetti::Confetti;
use crate::constants::*;
use crate::slide::{Fade, Slide};

const TITLE: &str = "Happy Birthday!";
const TITLE_SIZE: i32 = 96;
const MESSAGE_SIZE: i32 = 26;
const HEADING_SIZE: i32 = 34;
const BUTTON_TEXT_SIZE: i32 = 32;
const FOOTER_SIZE: i32 = 22;

const LEFT_COLUMN_X: f32 = 520.0; // Center of the greeting column
const BOUNCE_HEIGHT: f32 = 24.0;
const BOUNCE_PERIOD: f32 = 1.0;
const PULSE_PERIOD: f32 = 2.0;

/// Something the user asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleAutoplay,
    Next,
    Previous,
    OpenDonation,
}

#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub photo_frame: Rectangle,
    pub toggle_button: Rectangle,
    pub donation_button: Rectangle,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            photo_frame: Rectangle::new(1020.0, 100.0, 720.0, 720.0),
            toggle_button: Rectangle::new(1270.0, 860.0, 220.0, 72.0),
            donation_button: Rectangle::new(LEFT_COLUMN_X - 280.0, 720.0, 560.0, 84.0),
        }
    }
}

impl Layout {
    /// Clickable element under `point` (render space).
    pub fn hit(&self, point: Vector2) -> Option<Action> {
        if contains(self.toggle_button, point) {
            Some(Action::ToggleAutoplay)
        } else if contains(self.donation_button, point) {
            Some(Action::OpenDonation)
        } else {
            None
        }
    }
}

fn contains(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

/// Maps a window position to render space, the framebuffer is stretched over the whole window.
pub fn to_render_space(point: Vector2, screen_width: f32, screen_height: f32) -> Vector2 {
    if screen_width <= 0.0 || screen_height <= 0.0 {
        return point;
    }
    Vector2::new(
        point.x * RENDER_WIDTH as f32 / screen_width,
        point.y * RENDER_HEIGHT as f32 / screen_height,
    )
}

/// Keyboard and mouse input of the current frame.
pub fn poll_actions(rl: &RaylibHandle, layout: &Layout) -> Vec<Action> {
    let mut actions = Vec::new();
    if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        actions.push(Action::ToggleAutoplay);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        actions.push(Action::Next);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        actions.push(Action::Previous);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_D) {
        actions.push(Action::OpenDonation);
    }
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let mouse = to_render_space(
            rl.get_mouse_position(),
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
        );
        actions.extend(layout.hit(mouse));
    }
    actions
}

pub struct Page {
    pub layout: Layout,
    name: String,
    message: String,
    elapsed: f32,
    fade: Fade,
}

impl Page {
    pub fn new(name: String, message: String) -> Self {
        Self {
            layout: Layout::default(),
            name,
            message,
            elapsed: 0.0,
            fade: Fade::default(),
        }
    }

    pub fn update(&mut self, dt: f32, view: Option<&CarouselView<'_>>) {
        self.elapsed += dt;
        let shown = view.and_then(|v| v.photo.map(|_| v.index));
        self.fade.update(dt, shown);
    }

    pub fn draw(
        &self,
        d: &mut RaylibDrawHandle,
        view: Option<&CarouselView<'_>>,
        slides: &[Slide],
        confetti: &Confetti,
        donation_label: &str,
    ) {
        draw_background(d);

        // Placeholder until the carousel is live
        let Some(view) = view else {
            return;
        };

        let bounce = bounce_offset(self.elapsed);
        draw_centered(d, TITLE, LEFT_COLUMN_X, 150.0 + bounce, TITLE_SIZE, Color::WHITE);
        draw_centered(d, &self.name, LEFT_COLUMN_X, 270.0 + bounce, TITLE_SIZE, Color::WHITE);
        draw_centered(d, &self.message, LEFT_COLUMN_X, 430.0, MESSAGE_SIZE, Color::WHITE);

        self.draw_photo(d, view, slides);
        self.draw_toggle(d, view);

        let heading = format!("Want to buy {} a birthday cake?", self.name);
        let pulse = pulse_alpha(self.elapsed);
        draw_centered(d, &heading, LEFT_COLUMN_X, 640.0, HEADING_SIZE, with_alpha(Color::WHITE, pulse));

        let button = self.layout.donation_button;
        let lift = bounce * 0.5;
        d.draw_rectangle_rounded(
            Rectangle::new(button.x, button.y + lift, button.width, button.height),
            0.3,
            8,
            DONATION_BLUE,
        );
        draw_centered(
            d,
            donation_label,
            button.x + button.width * 0.5,
            button.y + lift + (button.height - BUTTON_TEXT_SIZE as f32) * 0.5,
            BUTTON_TEXT_SIZE,
            Color::WHITE,
        );

        draw_centered(d, FOOTER_TEXT, LEFT_COLUMN_X, 1000.0, FOOTER_SIZE, with_alpha(Color::WHITE, 0.8));

        // Confetti goes over everything else
        if view.celebrating {
            confetti.draw(d);
        }
    }

    fn draw_photo(&self, d: &mut RaylibDrawHandle, view: &CarouselView<'_>, slides: &[Slide]) {
        let frame = self.layout.photo_frame;
        d.draw_rectangle_rounded(frame, 0.06, 8, with_alpha(Color::BLACK, 0.25));
        match slides.get(view.index).filter(|_| view.photo.is_some()) {
            Some(slide) => slide.draw(d, frame, self.fade.alpha()),
            None => draw_centered(
                d,
                "No photos",
                frame.x + frame.width * 0.5,
                frame.y + frame.height * 0.5 - 20.0,
                40,
                Color::WHITE,
            ),
        }
        if let Some(photo) = view.photo {
            draw_centered(
                d,
                &photo.label,
                frame.x + frame.width * 0.5,
                frame.y + frame.height - 40.0,
                24,
                with_alpha(Color::WHITE, 0.9),
            );
        }
    }

    fn draw_toggle(&self, d: &mut RaylibDrawHandle, view: &CarouselView<'_>) {
        let button = self.layout.toggle_button;
        let color = if view.autoplay { PLAYING_RED } else { PAUSED_GREEN };
        d.draw_rectangle_rounded(button, 0.3, 8, color);
        draw_centered(
            d,
            view.toggle_label,
            button.x + button.width * 0.5,
            button.y + (button.height - BUTTON_TEXT_SIZE as f32) * 0.5,
            BUTTON_TEXT_SIZE,
            Color::WHITE,
        );
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (alpha.clamp(0.0, 1.0) * 255.0) as u8)
}

fn draw_background(d: &mut RaylibDrawHandle) {
    let half = RENDER_WIDTH / 2;
    d.draw_rectangle_gradient_h(0, 0, half, RENDER_HEIGHT, GRADIENT_PINK, GRADIENT_PURPLE);
    d.draw_rectangle_gradient_h(half, 0, RENDER_WIDTH - half, RENDER_HEIGHT, GRADIENT_PURPLE, GRADIENT_YELLOW);
}

fn draw_centered(d: &mut RaylibDrawHandle, text: &str, center_x: f32, y: f32, size: i32, color: Color) {
    let width = measure_text(text, size);
    d.draw_text(text, center_x as i32 - width / 2, y as i32, size, color);
}

/// Upward bounce, 0 at rest and `-BOUNCE_HEIGHT` at the top.
fn bounce_offset(elapsed: f32) -> f32 {
    -(elapsed * PI / BOUNCE_PERIOD).sin().abs() * BOUNCE_HEIGHT
}

fn pulse_alpha(elapsed: f32) -> f32 {
    0.75 + 0.25 * (elapsed * 2.0 * PI / PULSE_PERIOD).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_are_hit() {
        let layout = Layout::default();
        let toggle = layout.toggle_button;
        let donation = layout.donation_button;

        let center = |r: Rectangle| Vector2::new(r.x + r.width * 0.5, r.y + r.height * 0.5);
        assert_eq!(layout.hit(center(toggle)), Some(Action::ToggleAutoplay));
        assert_eq!(layout.hit(center(donation)), Some(Action::OpenDonation));
        assert_eq!(layout.hit(Vector2::new(5.0, 5.0)), None);
    }

    #[test]
    fn photo_frame_is_not_clickable() {
        let layout = Layout::default();
        let frame = layout.photo_frame;
        assert_eq!(layout.hit(Vector2::new(frame.x + 10.0, frame.y + 10.0)), None);
    }

    #[test]
    fn window_coordinates_scale_to_render_space() {
        let mapped = to_render_space(Vector2::new(480.0, 270.0), 960.0, 540.0);
        assert_eq!((mapped.x, mapped.y), (960.0, 540.0));

        let untouched = to_render_space(Vector2::new(3.0, 4.0), 0.0, 0.0);
        assert_eq!((untouched.x, untouched.y), (3.0, 4.0));
    }

    #[test]
    fn bounce_stays_above_rest() {
        for step in 0..200 {
            let offset = bounce_offset(step as f32 * 0.01);
            assert!(offset <= 0.0 && offset >= -BOUNCE_HEIGHT);
        }
        assert_eq!(bounce_offset(0.0), 0.0);
    }

    #[test]
    fn pulse_stays_visible() {
        for step in 0..200 {
            let alpha = pulse_alpha(step as f32 * 0.02);
            assert!((0.5..=1.0).contains(&alpha));
        }
    }
}
