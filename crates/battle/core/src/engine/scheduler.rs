//! FIFO queue of battlers waiting for their action to resolve.

use std::collections::VecDeque;

use crate::action::ActionAlgorithm;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{BattlerArena, BattlerId};

/// Errors raised when the scheduler contract is broken.
///
/// These cannot happen when actions are assigned through
/// [`BattleContext::assign_action`](crate::state::BattleContext::assign_action);
/// they indicate a caller enqueuing by hand.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SchedulerError {
    #[error("battler {0} does not exist")]
    UnknownBattler(BattlerId),

    #[error("battler {0} has no assigned action to enqueue")]
    NotAssigned(BattlerId),

    #[error("battler {0} is already queued")]
    AlreadyQueued(BattlerId),
}

impl GameError for SchedulerError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownBattler(_) => "SCHEDULER_UNKNOWN_BATTLER",
            Self::NotAssigned(_) => "SCHEDULER_NOT_ASSIGNED",
            Self::AlreadyQueued(_) => "SCHEDULER_ALREADY_QUEUED",
        }
    }
}

/// An algorithm detached from its battler, ready for the effect resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetachedAction {
    pub actor: BattlerId,
    pub algorithm: ActionAlgorithm,
}

/// Pending actions in the order they were assigned.
///
/// The queue holds handles only; each battler keeps ownership of its
/// algorithm until [`resolve_next`](Self::resolve_next) detaches it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnScheduler {
    queue: VecDeque<BattlerId>,
}

impl TurnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn contains(&self, id: BattlerId) -> bool {
        self.queue.contains(&id)
    }

    /// The battler whose action resolves next.
    pub fn front(&self) -> Option<BattlerId> {
        self.queue.front().copied()
    }

    /// Queue contents, front first.
    pub fn iter(&self) -> impl Iterator<Item = BattlerId> + '_ {
        self.queue.iter().copied()
    }

    /// Appends a battler that currently holds an assigned algorithm.
    pub fn enqueue(&mut self, battlers: &BattlerArena, id: BattlerId) -> Result<(), SchedulerError> {
        let battler = battlers.get(id).ok_or(SchedulerError::UnknownBattler(id))?;
        if !battler.has_algorithm() {
            return Err(SchedulerError::NotAssigned(id));
        }
        if self.contains(id) {
            return Err(SchedulerError::AlreadyQueued(id));
        }

        self.queue.push_back(id);
        tracing::debug!(battler = %id, queued = self.queue.len(), "action enqueued");
        Ok(())
    }

    /// Removes the front entry and detaches its battler's algorithm.
    ///
    /// Does nothing and returns `None` on an empty queue. The caller decides
    /// what to do with actions of battlers that fell while waiting.
    pub fn resolve_next(&mut self, battlers: &mut BattlerArena) -> Option<DetachedAction> {
        while let Some(actor) = self.queue.pop_front() {
            match battlers.get_mut(actor).and_then(|battler| battler.take_algorithm()) {
                Some(algorithm) => return Some(DetachedAction { actor, algorithm }),
                None => {
                    tracing::warn!(battler = %actor, "queued battler had no action; entry dropped");
                }
            }
        }
        None
    }
}
