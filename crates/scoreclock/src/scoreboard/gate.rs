/// Capability the score counter consults before accepting a change.
pub trait TimekeepingGate {
    fn is_active(&self) -> bool;
}

/// Gate used when scoring is not tied to the clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOpen;

impl TimekeepingGate for AlwaysOpen {
    fn is_active(&self) -> bool {
        true
    }
}
