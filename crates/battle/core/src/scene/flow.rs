//! Resolution and input steps of a tick.

use crate::action::ActionAlgorithm;
use crate::state::{BattleContext, BattlerId};

use super::{BattlePhase, BattleScene, PartyOption, SceneError};

/// Draw purpose for targets picked on behalf of the party in auto-battle.
const AUTO_TARGET_DRAW: u32 = 1;

impl BattleScene<'_> {
    /// Resolution step. Skipped while a modal message is visible.
    pub(super) fn process_actions(&mut self, ctx: &mut BattleContext) -> Result<(), SceneError> {
        match self.phase {
            BattlePhase::Start => self.set_phase(BattlePhase::SelectOption),
            BattlePhase::Battle => self.resolve_one(ctx),
            _ => {}
        }
        Ok(())
    }

    /// Input step. Skipped while a message is pending.
    pub(super) fn process_input(&mut self, ctx: &mut BattleContext) -> Result<(), SceneError> {
        match self.phase {
            BattlePhase::SelectOption => self.select_option(ctx)?,
            BattlePhase::SelectActor => self.select_next_actor(ctx),
            BattlePhase::SelectCommand => self.select_command(ctx)?,
            BattlePhase::AutoBattle => self.assign_auto_attacks(ctx)?,
            _ => {}
        }
        Ok(())
    }

    fn resolve_one(&mut self, ctx: &mut BattleContext) {
        let Some(action) = ctx.resolve_next() else {
            self.finish_round(ctx);
            return;
        };

        if !ctx.battler(action.actor).is_some_and(|b| b.is_alive()) {
            tracing::debug!(
                actor = %action.actor,
                kind = %action.algorithm.kind(),
                "discarding action of fallen battler"
            );
            return;
        }

        tracing::debug!(
            actor = %action.actor,
            kind = %action.algorithm.kind(),
            "resolving action"
        );
        if let Some(result) = self.services.resolver.resolve(action, ctx, &self.env) {
            self.set_phase(result.into());
        }
    }

    fn finish_round(&mut self, ctx: &mut BattleContext) {
        if ctx.troop().is_defeated(ctx.battlers()) {
            self.set_phase(BattlePhase::Victory);
        } else if ctx.party().is_defeated(ctx.battlers()) {
            self.set_phase(BattlePhase::Defeat);
        } else {
            self.advance_turn(ctx);
            self.set_phase(BattlePhase::SelectOption);
        }
    }

    fn select_option(&mut self, ctx: &mut BattleContext) -> Result<(), SceneError> {
        let Some(option) = self.services.commands.select_option(ctx) else {
            return Ok(());
        };
        tracing::debug!(%option, "party option selected");

        match option {
            PartyOption::Fight => {
                self.decide_enemy_actions(ctx)?;
                self.set_phase(BattlePhase::SelectActor);
            }
            PartyOption::AutoBattle => {
                self.auto_battle = true;
                self.decide_enemy_actions(ctx)?;
                self.set_phase(BattlePhase::AutoBattle);
            }
            PartyOption::Escape => self.set_phase(BattlePhase::Escape),
        }
        Ok(())
    }

    fn select_next_actor(&mut self, ctx: &BattleContext) {
        self.active_actor = awaiting_command(ctx).next();
        match self.active_actor {
            Some(actor) => {
                tracing::debug!(%actor, "awaiting command");
                self.set_phase(BattlePhase::SelectCommand);
            }
            None => self.set_phase(BattlePhase::Battle),
        }
    }

    fn select_command(&mut self, ctx: &mut BattleContext) -> Result<(), SceneError> {
        let Some(actor) = self.active_actor else {
            self.set_phase(BattlePhase::SelectActor);
            return Ok(());
        };
        let Some(command) = self.services.commands.select_command(actor, ctx) else {
            return Ok(());
        };

        ctx.assign_action(actor, command.into_algorithm())?;
        self.active_actor = None;
        self.set_phase(BattlePhase::SelectActor);
        Ok(())
    }

    fn assign_auto_attacks(&mut self, ctx: &mut BattleContext) -> Result<(), SceneError> {
        let rng = self.env.rng()?;
        let pending: Vec<BattlerId> = awaiting_command(ctx).collect();
        for actor in pending {
            let seed = ctx.next_seed(actor, AUTO_TARGET_DRAW);
            let Some(target) = ctx.troop().random_living(ctx.battlers(), rng, seed) else {
                break;
            };
            ctx.assign_action(
                actor,
                ActionAlgorithm::Normal {
                    target: Some(target),
                },
            )?;
        }
        self.set_phase(BattlePhase::Battle);
        Ok(())
    }
}

/// Living party members that have no action for this round yet.
fn awaiting_command(ctx: &BattleContext) -> impl Iterator<Item = BattlerId> + '_ {
    ctx.party()
        .living(ctx.battlers())
        .filter(move |&id| ctx.battler(id).is_some_and(|b| !b.has_algorithm()))
}
