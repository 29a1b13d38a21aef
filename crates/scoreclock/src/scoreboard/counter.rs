use super::gate::TimekeepingGate;

/// Non-negative score. Changes are dropped silently while the gate is closed.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    value: u32,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns whether the score changed.
    pub fn increment(&mut self, gate: &dyn TimekeepingGate) -> bool {
        if !gate.is_active() || self.value == u32::MAX {
            return false;
        }
        self.value += 1;
        true
    }

    /// Returns whether the score changed. Never goes below zero.
    pub fn decrement(&mut self, gate: &dyn TimekeepingGate) -> bool {
        if !gate.is_active() || self.value == 0 {
            return false;
        }
        self.value -= 1;
        true
    }
}
