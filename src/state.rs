#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Phase {
    #[default]
    Uninitialized, // Constructed, nothing observable yet
    Initialized,   // Interactive, timers may run
    TornDown,      // Timers cancelled, nothing observable anymore
}
