use super::core::{SlotId, SLOT_COUNT};

/// Host facility that shows or hides the render target behind each slot.
///
/// The rig calls this when it initializes and when a transition completes.
/// It never reads target state back.
pub trait RenderTargets {
    /// Enable or disable the render target of `slot`.
    fn set_enabled(&mut self, slot: SlotId, enabled: bool);
}

/// Make `slot` the only enabled target: disable all four, then enable one.
///
/// There is a brief window with zero targets enabled between the two steps.
pub(crate) fn activate(targets: &mut dyn RenderTargets, slot: SlotId) {
    for other in SlotId::ALL {
        targets.set_enabled(other, false);
    }
    targets.set_enabled(slot, true);
    log::debug!("render target switched to {} camera", slot.name());
}

/// In-memory render target flags, for headless hosts and simulations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderTargetSet {
    enabled: [bool; SLOT_COUNT],
}

impl RenderTargetSet {
    /// Whether `slot`'s target is enabled.
    #[must_use]
    pub fn is_enabled(&self, slot: SlotId) -> bool {
        self.enabled[slot.index()]
    }

    /// Number of enabled targets.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.enabled.iter().filter(|on| **on).count()
    }

    /// The single enabled slot, if exactly one is enabled.
    #[must_use]
    pub fn sole_enabled(&self) -> Option<SlotId> {
        let mut enabled = SlotId::ALL.into_iter().filter(|s| self.is_enabled(*s));
        match (enabled.next(), enabled.next()) {
            (Some(slot), None) => Some(slot),
            _ => None,
        }
    }
}

impl RenderTargets for RenderTargetSet {
    fn set_enabled(&mut self, slot: SlotId, enabled: bool) {
        self.enabled[slot.index()] = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_leaves_exactly_one_enabled() {
        let mut targets = RenderTargetSet::default();
        targets.set_enabled(SlotId::Orbital, true);
        targets.set_enabled(SlotId::MidShot, true);

        activate(&mut targets, SlotId::PathFollower);

        assert_eq!(targets.enabled_count(), 1);
        assert_eq!(targets.sole_enabled(), Some(SlotId::PathFollower));
    }

    #[test]
    fn sole_enabled_requires_exactly_one() {
        let mut targets = RenderTargetSet::default();
        assert_eq!(targets.sole_enabled(), None);
        targets.set_enabled(SlotId::Orbital, true);
        targets.set_enabled(SlotId::FirstPerson, true);
        assert_eq!(targets.sole_enabled(), None);
    }
}
