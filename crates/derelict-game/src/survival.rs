//! Survival timers: the suit oxygen leak and the headlight battery drain.

use derelict_core::GameState;

/// Actions in the dark maintenance corridor before the headlight dies.
pub const HEADLIGHT_BATTERY_BUDGET: u32 = 15;

/// Dark searches of the mess hall before the replacement batteries turn up.
pub const MESS_HALL_SEARCHES_NEEDED: u32 = 3;

/// Result of advancing the oxygen clock by one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OxygenTick {
    /// The suit is intact or already patched.
    Sealed,
    /// The leak is active; this many commands remain.
    Leaking {
        /// Commands left before suffocation.
        remaining: u32,
    },
    /// The oxygen ran out.
    Depleted,
}

/// Burns one command's worth of oxygen if the suit is leaking.
pub fn tick_oxygen(state: &mut GameState) -> OxygenTick {
    if !state.suit_damaged || state.suit_repaired {
        return OxygenTick::Sealed;
    }
    state.oxygen_remaining = state.oxygen_remaining.saturating_sub(1);
    if state.oxygen_remaining == 0 {
        OxygenTick::Depleted
    } else {
        OxygenTick::Leaking {
            remaining: state.oxygen_remaining,
        }
    }
}

/// Counts one action against the headlight battery while in the corridor.
///
/// Returns true on the action that kills the headlight.
pub fn tick_headlight(state: &mut GameState) -> bool {
    if !state.in_maintenance || state.headlight_dead {
        return false;
    }
    state.maintenance_actions += 1;
    if state.maintenance_actions >= HEADLIGHT_BATTERY_BUDGET {
        state.headlight_on = false;
        state.headlight_dead = true;
        return true;
    }
    false
}

/// Counts one dark search of the mess hall.
///
/// Returns true on the search that turns up the batteries.
pub fn record_mess_hall_search(state: &mut GameState) -> bool {
    state.mess_hall_searches += 1;
    state.mess_hall_searches == MESS_HALL_SEARCHES_NEEDED
}

#[cfg(test)]
mod tests {
    use super::*;
    use derelict_core::{OXYGEN_BUDGET, RoomId};

    #[test]
    fn oxygen_does_not_drain_while_sealed() {
        let mut state = GameState::new();
        assert_eq!(tick_oxygen(&mut state), OxygenTick::Sealed);
        assert_eq!(state.oxygen_remaining, OXYGEN_BUDGET);
    }

    #[test]
    fn oxygen_drains_once_the_suit_tears() {
        let mut state = GameState::new();
        state.suit_damaged = true;
        assert_eq!(
            tick_oxygen(&mut state),
            OxygenTick::Leaking {
                remaining: OXYGEN_BUDGET - 1
            }
        );
    }

    #[test]
    fn repair_stops_the_drain() {
        let mut state = GameState::new();
        state.suit_damaged = true;
        tick_oxygen(&mut state);
        state.suit_repaired = true;
        assert_eq!(tick_oxygen(&mut state), OxygenTick::Sealed);
        assert_eq!(state.oxygen_remaining, OXYGEN_BUDGET - 1);
    }

    #[test]
    fn oxygen_runs_out_after_the_budget() {
        let mut state = GameState::new();
        state.suit_damaged = true;
        for _ in 0..OXYGEN_BUDGET - 1 {
            assert_ne!(tick_oxygen(&mut state), OxygenTick::Depleted);
        }
        assert_eq!(tick_oxygen(&mut state), OxygenTick::Depleted);
        // Further ticks stay depleted rather than wrapping.
        assert_eq!(tick_oxygen(&mut state), OxygenTick::Depleted);
    }

    #[test]
    fn headlight_dies_on_the_budget_action() {
        let mut state = GameState::new();
        state.enter(RoomId::MaintenanceCorridor);
        for _ in 0..HEADLIGHT_BATTERY_BUDGET - 1 {
            assert!(!tick_headlight(&mut state));
        }
        assert!(tick_headlight(&mut state));
        assert!(state.headlight_dead);
        assert!(!state.headlight_on);
        // A dead headlight stops counting.
        assert!(!tick_headlight(&mut state));
    }

    #[test]
    fn headlight_only_drains_after_the_corridor() {
        let mut state = GameState::new();
        assert!(!tick_headlight(&mut state));
        assert_eq!(state.maintenance_actions, 0);
    }

    #[test]
    fn third_mess_hall_search_finds_batteries() {
        let mut state = GameState::new();
        assert!(!record_mess_hall_search(&mut state));
        assert!(!record_mess_hall_search(&mut state));
        assert!(record_mess_hall_search(&mut state));
    }
}
