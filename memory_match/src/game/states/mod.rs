//! Session phase definitions for the memory game FSM.
//!
//! `Idle → Running → Resolving → (Running | Ended)`, with `Ended`
//! terminal until an explicit restart.

use enum_dispatch::enum_dispatch;

use crate::game::entities::CardIndex;

/// Fresh session - deck dealt, timer not yet started.
#[derive(Debug, Default)]
pub struct Idle {}

/// Timer running, selections accepted.
#[derive(Debug)]
pub struct Running {}

/// Two cards are face up and a scheduled resolution is pending. Input
/// stays locked for the duration.
#[derive(Debug)]
pub struct Resolving {
    pub(crate) pending: PendingResolution,
}

/// Terminal outcome. No further mutations until restart.
#[derive(Debug)]
pub struct Ended {
    pub(crate) won: bool,
}

/// The pair awaiting its delayed resolution.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PendingResolution {
    pub(crate) first: CardIndex,
    pub(crate) second: CardIndex,
    pub(crate) is_match: bool,
}

/// Phase queries used by the session's event guards.
#[enum_dispatch]
pub trait PhaseBehavior {
    /// Whether card selections are accepted in this phase.
    fn accepts_selection(&self) -> bool;
    /// Whether the session has reached a terminal outcome.
    fn is_terminal(&self) -> bool;
}

impl PhaseBehavior for Idle {
    fn accepts_selection(&self) -> bool {
        true
    }

    fn is_terminal(&self) -> bool {
        false
    }
}

impl PhaseBehavior for Running {
    fn accepts_selection(&self) -> bool {
        true
    }

    fn is_terminal(&self) -> bool {
        false
    }
}

impl PhaseBehavior for Resolving {
    fn accepts_selection(&self) -> bool {
        false
    }

    fn is_terminal(&self) -> bool {
        false
    }
}

impl PhaseBehavior for Ended {
    fn accepts_selection(&self) -> bool {
        false
    }

    fn is_terminal(&self) -> bool {
        true
    }
}

/// Dispatch enum over the session phases.
#[enum_dispatch(PhaseBehavior)]
#[derive(Debug)]
pub enum Phase {
    Idle,
    Running,
    Resolving,
    Ended,
}
