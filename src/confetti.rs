use rand::Rng;
use raylib::prelude::*;
use crate::constants::*;

const PALETTE: [Color; 6] = [
    Color::new(244, 67, 54, 255),
    Color::new(33, 150, 243, 255),
    Color::new(76, 175, 80, 255),
    Color::new(255, 235, 59, 255),
    Color::new(255, 152, 0, 255),
    Color::new(156, 39, 176, 255),
];

const GRAVITY: f32 = 60.0; // px/s^2 added to the fall speed

struct Piece {
    position: Vector2,
    velocity: Vector2,
    size: Vector2,
    rotation: f32,
    spin: f32,
    color: Color,
}

impl Piece {
    fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            position: Vector2::new(
                rng.random_range(0.0..RENDER_WIDTH as f32),
                rng.random_range(-120.0..-10.0),
            ),
            velocity: Vector2::new(rng.random_range(-80.0..80.0), rng.random_range(120.0..300.0)),
            size: Vector2::new(rng.random_range(8.0..16.0), rng.random_range(4.0..10.0)),
            rotation: rng.random_range(0.0..360.0),
            spin: rng.random_range(-360.0..360.0),
            color: PALETTE[rng.random_range(0..PALETTE.len())],
        }
    }

    fn update(&mut self, dt: f32) {
        self.velocity.y += GRAVITY * dt;
        self.position.x += self.velocity.x * dt;
        self.position.y += self.velocity.y * dt;
        self.rotation += self.spin * dt;
    }

    fn is_gone(&self) -> bool {
        self.position.y - self.size.x > RENDER_HEIGHT as f32
    }
}

/// Falling paper pieces, only alive while the celebration is on.
#[derive(Default)]
pub struct Confetti {
    pieces: Vec<Piece>,
    spawn_budget: f32,
}

impl Confetti {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, dt: f32, active: bool) {
        if !active {
            if !self.pieces.is_empty() {
                tracing::debug!(pieces = self.pieces.len(), "confetti cleared");
            }
            self.pieces.clear();
            self.spawn_budget = 0.0;
            return;
        }

        let mut rng = rand::rng();
        for piece in self.pieces.iter_mut() {
            piece.update(dt);
            if piece.is_gone() {
                *piece = Piece::spawn(&mut rng);
            }
        }

        self.spawn_budget += CONFETTI_SPAWN_RATE * dt;
        while self.spawn_budget >= 1.0 && self.pieces.len() < MAX_CONFETTI {
            self.pieces.push(Piece::spawn(&mut rng));
            self.spawn_budget -= 1.0;
        }
        if self.pieces.len() >= MAX_CONFETTI {
            self.spawn_budget = 0.0;
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for piece in self.pieces.iter() {
            d.draw_rectangle_pro(
                Rectangle::new(piece.position.x, piece.position.y, piece.size.x, piece.size.y),
                Vector2::new(piece.size.x * 0.5, piece.size.y * 0.5),
                piece.rotation,
                piece.color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_while_active() {
        let mut confetti = Confetti::new();
        confetti.update(0.5, true);
        assert_eq!(confetti.len(), (CONFETTI_SPAWN_RATE * 0.5) as usize);
    }

    #[test]
    fn never_exceeds_cap() {
        let mut confetti = Confetti::new();
        for _ in 0..(60 * 20) {
            confetti.update(FRAME_TIME, true);
            assert!(confetti.len() <= MAX_CONFETTI);
        }
        assert_eq!(confetti.len(), MAX_CONFETTI);
    }

    #[test]
    fn inactive_holds_nothing() {
        let mut confetti = Confetti::new();
        confetti.update(1.0, false);
        assert!(confetti.is_empty());

        confetti.update(1.0, true);
        assert!(!confetti.is_empty());
        confetti.update(FRAME_TIME, false);
        assert!(confetti.is_empty());
    }
}
