//! Per-encounter battle state.
//!
//! [`BattleContext`] replaces process-wide battle globals: it is created by
//! [`BattleScene::start`](crate::scene::BattleScene::start), passed by
//! reference to the decision engine and to external resolvers, and dropped
//! together with the scene.
mod arena;
mod battler;
mod ids;
mod party;

pub use arena::BattlerArena;
pub use battler::{Battler, BattlerOrigin, HitPoints, Side};
pub use ids::{ActorId, BattlerId, EnemyId, SkillId, TerrainId, TroopId};
pub use party::Party;

use crate::action::ActionAlgorithm;
use crate::engine::{Assignment, DetachedAction, SchedulerError, TurnScheduler};
use crate::env::compute_seed;

/// Everything that exists only for the duration of one battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleContext {
    troop_id: TroopId,
    battlers: BattlerArena,
    party: Party,
    troop: Party,
    scheduler: TurnScheduler,
    /// Completed turn count; advanced by `BattleScene::next_turn`.
    turn: u32,
    /// Background requested by battle events. Empty means "keep current".
    background_name: String,
    seed: u64,
    nonce: u64,
}

impl BattleContext {
    pub fn new(troop_id: TroopId, seed: u64) -> Self {
        Self {
            troop_id,
            battlers: BattlerArena::new(),
            party: Party::new(Side::Party),
            troop: Party::new(Side::Troop),
            scheduler: TurnScheduler::new(),
            turn: 0,
            background_name: String::new(),
            seed,
            nonce: 0,
        }
    }

    pub fn troop_id(&self) -> TroopId {
        self.troop_id
    }

    // ===== battlers and parties =====

    /// Spawns a battler and appends it to the party for its side.
    ///
    /// Returns `None` when that side is already full; the battler is still
    /// created in the arena but takes no part in the battle.
    pub fn spawn(
        &mut self,
        name: impl Into<String>,
        origin: BattlerOrigin,
        max_hp: u32,
    ) -> Option<BattlerId> {
        let id = self.battlers.spawn(name, origin, max_hp);
        let party = match origin.side() {
            Side::Party => &mut self.party,
            Side::Troop => &mut self.troop,
        };
        party.push(id).ok().map(|()| id)
    }

    pub fn battlers(&self) -> &BattlerArena {
        &self.battlers
    }

    pub fn battler(&self, id: BattlerId) -> Option<&Battler> {
        self.battlers.get(id)
    }

    pub fn battler_mut(&mut self, id: BattlerId) -> Option<&mut Battler> {
        self.battlers.get_mut(id)
    }

    /// The player's party.
    pub fn party(&self) -> &Party {
        &self.party
    }

    /// The enemy troop.
    pub fn troop(&self) -> &Party {
        &self.troop
    }

    pub fn side(&self, side: Side) -> &Party {
        match side {
            Side::Party => &self.party,
            Side::Troop => &self.troop,
        }
    }

    // ===== scheduling =====

    pub fn scheduler(&self) -> &TurnScheduler {
        &self.scheduler
    }

    /// Assigns an action to a battler and keeps the scheduler in step.
    ///
    /// A battler without a queue entry is enqueued at the back. A battler
    /// that is already queued has its algorithm replaced in place and keeps
    /// its position.
    pub fn assign_action(
        &mut self,
        id: BattlerId,
        algorithm: ActionAlgorithm,
    ) -> Result<Assignment, SchedulerError> {
        let battler = self
            .battlers
            .get_mut(id)
            .ok_or(SchedulerError::UnknownBattler(id))?;
        battler.set_algorithm(algorithm);

        if self.scheduler.contains(id) {
            return Ok(Assignment::Replaced);
        }
        self.scheduler.enqueue(&self.battlers, id)?;
        Ok(Assignment::Enqueued)
    }

    /// Detaches the front queue entry for resolution.
    pub fn resolve_next(&mut self) -> Option<DetachedAction> {
        self.scheduler.resolve_next(&mut self.battlers)
    }

    // ===== turn bookkeeping =====

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub(crate) fn advance_turn(&mut self) -> u32 {
        self.turn += 1;
        self.turn
    }

    pub fn background_name(&self) -> &str {
        &self.background_name
    }

    /// Requests a background change; picked up on the next scene update.
    pub fn set_background_name(&mut self, name: impl Into<String>) {
        self.background_name = name.into();
    }

    /// Returns a fresh seed for one random draw made on behalf of `actor`.
    pub fn next_seed(&mut self, actor: BattlerId, context: u32) -> u64 {
        let seed = compute_seed(self.seed, self.nonce, actor.0, context);
        self.nonce += 1;
        seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_with_goblin() -> (BattleContext, BattlerId) {
        let mut ctx = BattleContext::new(TroopId(1), 42);
        let goblin = ctx
            .spawn("Goblin", BattlerOrigin::Enemy(EnemyId(1)), 15)
            .unwrap();
        (ctx, goblin)
    }

    #[test]
    fn spawn_routes_by_origin() {
        let mut ctx = BattleContext::new(TroopId(1), 0);
        let hero = ctx.spawn("Alex", BattlerOrigin::Actor(ActorId(1)), 30).unwrap();
        let slime = ctx.spawn("Slime", BattlerOrigin::Enemy(EnemyId(2)), 8).unwrap();

        assert_eq!(ctx.party().members(), &[hero]);
        assert_eq!(ctx.troop().members(), &[slime]);
    }

    #[test]
    fn reassignment_keeps_single_queue_entry() {
        let (mut ctx, goblin) = context_with_goblin();

        let first = ctx.assign_action(goblin, ActionAlgorithm::Defend).unwrap();
        let second = ctx.assign_action(goblin, ActionAlgorithm::Observe).unwrap();

        assert_eq!(first, Assignment::Enqueued);
        assert_eq!(second, Assignment::Replaced);
        assert_eq!(ctx.scheduler().iter().collect::<Vec<_>>(), vec![goblin]);
        assert_eq!(
            ctx.battler(goblin).and_then(Battler::algorithm),
            Some(&ActionAlgorithm::Observe)
        );
    }

    #[test]
    fn assigning_to_unknown_battler_fails() {
        let (mut ctx, _) = context_with_goblin();
        let result = ctx.assign_action(BattlerId(9), ActionAlgorithm::Defend);
        assert_eq!(result, Err(SchedulerError::UnknownBattler(BattlerId(9))));
    }

    #[test]
    fn seeds_advance_with_each_draw() {
        let (mut ctx, goblin) = context_with_goblin();
        let first = ctx.next_seed(goblin, 0);
        let second = ctx.next_seed(goblin, 0);
        assert_ne!(first, second);
    }
}
