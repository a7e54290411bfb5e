// Index, autoplay flag and the two deferred actions of the photo carousel.

use crate::constants::{AUTOPLAY_PERIOD, CELEBRATION_DURATION};
use crate::photo::PhotoDescriptor;
use crate::state::Phase;
use crate::timer::{Interval, Timeout};

/// Delays used by the controller, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselTiming {
    pub celebration: f32,
    pub autoplay_period: f32,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            celebration: CELEBRATION_DURATION,
            autoplay_period: AUTOPLAY_PERIOD,
        }
    }
}

/// What the presentation layer may show for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselView<'a> {
    /// `None` when the photo sequence is empty.
    pub photo: Option<&'a PhotoDescriptor>,
    pub index: usize,
    pub celebrating: bool,
    pub autoplay: bool,
    pub toggle_label: &'static str,
}

#[derive(Debug)]
pub struct CarouselController {
    photos: Vec<PhotoDescriptor>,
    timing: CarouselTiming,

    phase: Phase,
    current_index: usize,
    autoplay: bool,
    celebrating: bool,

    celebration_timeout: Option<Timeout>,
    autoplay_interval: Option<Interval>,
}

impl CarouselController {
    pub fn new(photos: Vec<PhotoDescriptor>, timing: CarouselTiming) -> Self {
        Self {
            photos,
            timing,
            phase: Phase::Uninitialized,
            current_index: 0,
            autoplay: false,
            celebrating: false,
            celebration_timeout: None,
            autoplay_interval: None,
        }
    }

    /// First activation. Turns the celebration and autoplay on and arms both timers.
    /// Only the first call on a fresh controller has any effect.
    pub fn initialize(&mut self) {
        if self.phase != Phase::Uninitialized {
            tracing::debug!(phase = ?self.phase, "ignoring repeated initialize");
            return;
        }
        self.phase = Phase::Initialized;
        self.celebrating = true;
        self.autoplay = true;
        self.celebration_timeout = Some(Timeout::new(self.timing.celebration));
        self.sync_autoplay();
        tracing::info!(
            photos = self.photos.len(),
            celebration = self.timing.celebration,
            autoplay_period = self.timing.autoplay_period,
            "carousel initialized"
        );
    }

    pub fn toggle_autoplay(&mut self) {
        if self.phase != Phase::Initialized {
            return;
        }
        self.autoplay = !self.autoplay;
        self.sync_autoplay();
        tracing::info!(autoplay = self.autoplay, "autoplay toggled");
    }

    /// Moves to the next photo, wrapping after the last one.
    pub fn advance(&mut self) {
        let len = self.photos.len();
        if len == 0 || self.phase == Phase::TornDown {
            return;
        }
        self.current_index = (self.current_index + 1) % len;
        tracing::debug!(index = self.current_index, "advanced");
    }

    /// Moves to the previous photo, wrapping before the first one.
    pub fn previous(&mut self) {
        let len = self.photos.len();
        if len == 0 || self.phase == Phase::TornDown {
            return;
        }
        self.current_index = (self.current_index + len - 1) % len;
        tracing::debug!(index = self.current_index, "went back");
    }

    /// Feeds `dt` seconds to the outstanding timers and applies what fired.
    pub fn update(&mut self, dt: f32) {
        if self.phase != Phase::Initialized {
            return;
        }

        if let Some(timeout) = self.celebration_timeout.as_mut() {
            if timeout.tick(dt) {
                self.celebrating = false;
                self.celebration_timeout = None;
                tracing::info!("celebration over");
            }
        }

        let fired = self
            .autoplay_interval
            .as_mut()
            .map_or(0, |interval| interval.tick(dt));
        for _ in 0..fired {
            self.advance();
        }
    }

    /// Cancels every outstanding timer. Nothing is observable afterwards.
    pub fn teardown(&mut self) {
        if self.phase == Phase::TornDown {
            return;
        }
        let cancelled = usize::from(self.celebration_timeout.take().is_some())
            + usize::from(self.autoplay_interval.take().is_some());
        self.phase = Phase::TornDown;
        tracing::info!(cancelled, "carousel torn down");
    }

    /// `None` until initialized and again after teardown.
    pub fn view(&self) -> Option<CarouselView<'_>> {
        if self.phase != Phase::Initialized {
            return None;
        }
        Some(CarouselView {
            photo: self.photos.get(self.current_index),
            index: self.current_index,
            celebrating: self.celebrating,
            autoplay: self.autoplay,
            toggle_label: if self.autoplay { "Pause" } else { "Play" },
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[cfg(test)]
    pub fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    #[cfg(test)]
    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    pub fn photos(&self) -> &[PhotoDescriptor] {
        &self.photos
    }

    #[cfg(test)]
    pub fn has_celebration_timer(&self) -> bool {
        self.celebration_timeout.is_some()
    }

    #[cfg(test)]
    pub fn has_autoplay_timer(&self) -> bool {
        self.autoplay_interval.is_some()
    }

    // At most one interval: an existing one is kept, a stale one is dropped.
    fn sync_autoplay(&mut self) {
        let wanted = self.phase == Phase::Initialized && self.autoplay;
        match (wanted, self.autoplay_interval.is_some()) {
            (true, false) => {
                self.autoplay_interval = Some(Interval::new(self.timing.autoplay_period));
            }
            (false, true) => {
                self.autoplay_interval = None;
            }
            _ => {}
        }
    }
}

impl Drop for CarouselController {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn photos(n: usize) -> Vec<PhotoDescriptor> {
        PhotoDescriptor::from_paths(
            (0..n).map(|i| format!("ruben/photo{}.jpg", i).into()),
            "Rúben",
        )
    }

    fn controller(n: usize) -> CarouselController {
        CarouselController::new(photos(n), CarouselTiming::default())
    }

    #[test]
    fn nothing_is_observable_before_initialize() {
        let mut carousel = controller(9);
        assert_eq!(carousel.phase(), Phase::Uninitialized);
        assert!(carousel.view().is_none());
        assert!(!carousel.is_celebrating());
        assert!(!carousel.is_autoplay());

        carousel.update(100.0);
        carousel.toggle_autoplay();
        assert!(!carousel.is_celebrating());
        assert!(!carousel.is_autoplay());
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.has_celebration_timer());
        assert!(!carousel.has_autoplay_timer());
    }

    #[test]
    fn initialize_turns_everything_on() {
        let mut carousel = controller(9);
        carousel.initialize();

        let view = carousel.view().unwrap();
        assert!(view.celebrating);
        assert!(view.autoplay);
        assert_eq!(view.toggle_label, "Pause");
        assert_eq!(view.index, 0);
        assert_eq!(view.photo.unwrap().label, "Rúben 0");
        assert!(carousel.has_celebration_timer());
        assert!(carousel.has_autoplay_timer());
    }

    #[test]
    fn nine_advances_wrap_back_to_start() {
        let mut carousel = controller(9);
        let mut seen = Vec::new();
        for _ in 0..9 {
            carousel.advance();
            seen.push(carousel.current_index());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7, 8, 0]);

        for _ in 0..8 {
            carousel.advance();
        }
        assert_eq!(carousel.current_index(), 8);
        carousel.advance();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut carousel = controller(9);
        carousel.previous();
        assert_eq!(carousel.current_index(), 8);
        carousel.previous();
        assert_eq!(carousel.current_index(), 7);
    }

    #[test]
    fn celebration_ends_after_delay() {
        let mut carousel = controller(9);
        carousel.initialize();

        carousel.update(7.9);
        assert!(carousel.is_celebrating());

        carousel.update(0.1 + 1.0e-3);
        assert!(!carousel.is_celebrating());
        assert!(!carousel.has_celebration_timer());

        carousel.update(1000.0);
        assert!(!carousel.is_celebrating());
    }

    #[test]
    fn second_initialize_does_not_replay_celebration() {
        let mut carousel = controller(9);
        carousel.initialize();
        carousel.update(9.0);
        carousel.initialize();
        assert!(!carousel.is_celebrating());
        assert!(!carousel.has_celebration_timer());
    }

    #[test]
    fn autoplay_advances_every_period() {
        let mut carousel = controller(9);
        carousel.initialize();

        carousel.update(2.5);
        assert_eq!(carousel.current_index(), 0);
        carousel.update(0.5);
        assert_eq!(carousel.current_index(), 1);
        carousel.update(6.0);
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn paused_carousel_stays_put() {
        let mut carousel = controller(9);
        carousel.initialize();
        carousel.toggle_autoplay();

        assert!(!carousel.has_autoplay_timer());
        assert_eq!(carousel.view().unwrap().toggle_label, "Play");
        carousel.update(30.0);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn double_toggle_keeps_a_single_interval() {
        let mut carousel = controller(9);
        carousel.initialize();
        carousel.update(2.0);

        carousel.toggle_autoplay();
        carousel.toggle_autoplay();
        assert!(carousel.is_autoplay());
        assert!(carousel.has_autoplay_timer());

        // The fresh interval restarts its period and only one of them runs
        carousel.update(2.0);
        assert_eq!(carousel.current_index(), 0);
        carousel.update(1.0);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn toggle_leaves_index_alone() {
        let mut carousel = controller(9);
        carousel.initialize();
        carousel.advance();
        carousel.advance();
        carousel.toggle_autoplay();
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn teardown_cancels_everything() {
        let mut carousel = controller(9);
        carousel.initialize();
        carousel.update(1.0);
        carousel.teardown();

        assert!(!carousel.has_celebration_timer());
        assert!(!carousel.has_autoplay_timer());
        assert!(carousel.view().is_none());

        let index = carousel.current_index();
        let celebrating = carousel.is_celebrating();
        carousel.update(100.0);
        carousel.toggle_autoplay();
        carousel.initialize();
        carousel.advance();
        carousel.previous();
        carousel.previous();
        assert_eq!(carousel.current_index(), index);
        assert_eq!(carousel.is_celebrating(), celebrating);
        assert_eq!(carousel.phase(), Phase::TornDown);
    }

    #[test]
    fn empty_sequence_is_a_no_op() {
        let mut carousel = controller(0);
        carousel.initialize();
        carousel.advance();
        carousel.previous();
        carousel.update(10.0);

        let view = carousel.view().unwrap();
        assert_eq!(view.index, 0);
        assert!(view.photo.is_none());
    }

    proptest! {
        /// Property: the index stays in range and N advances return to the start
        #[test]
        fn index_is_cyclic(n in 1usize..32, start in 0usize..64, steps in 0usize..200) {
            let mut carousel = controller(n);
            for _ in 0..start % n {
                carousel.advance();
            }
            let origin = carousel.current_index();

            for _ in 0..steps {
                carousel.advance();
                prop_assert!(carousel.current_index() < n);
            }
            prop_assert_eq!(carousel.current_index(), (origin + steps) % n);

            for _ in 0..n {
                carousel.advance();
            }
            prop_assert_eq!(carousel.current_index(), (origin + steps) % n);
        }

        /// Property: toggling twice is invisible to flags and outstanding timers
        #[test]
        fn double_toggle_is_identity(initial_toggles in 0usize..5) {
            let mut carousel = controller(9);
            carousel.initialize();
            for _ in 0..initial_toggles {
                carousel.toggle_autoplay();
            }
            let autoplay = carousel.is_autoplay();
            let timer = carousel.has_autoplay_timer();

            carousel.toggle_autoplay();
            carousel.toggle_autoplay();

            prop_assert_eq!(carousel.is_autoplay(), autoplay);
            prop_assert_eq!(carousel.has_autoplay_timer(), timer);
            prop_assert_eq!(timer, autoplay);
        }
    }
}
