/// Per-frame control signals derived from raw key events.
///
/// `horizontal` is a symmetric accumulator: a left-key press subtracts one
/// and its release adds it back (mirrored for right keys), so simultaneous
/// opposite keys cancel and overlapping key aliases stack beyond ±1.
/// `jump` is edge-triggered on key press and cleared by the scene once it
/// has been consumed for a step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlSignals {
    pub horizontal: i32,
    pub jump: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_signals_are_neutral() {
        let signals = ControlSignals::default();
        assert_eq!(signals.horizontal, 0);
        assert_eq!(signals.jump, 0);
    }
}
