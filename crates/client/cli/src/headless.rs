//! Headless collaborators: the battle runs without windows, audio or a
//! renderer, and everything the player would see goes to the log.

use std::collections::HashSet;

use battle_core::{
    ActionAlgorithm, Background, BattleContext, BattleEnv, BattlePhase, BattleResult, BattleUi,
    BattlerId, BattlerOrigin, CommandSource, DetachedAction, EffectResolver, EncounterEvents,
    PartyOption, PlayerCommand, Presentation, Side, SkillId,
};

/// Message window that shows a line for a fixed number of ticks.
///
/// Phase changes worth announcing queue a message; the next update puts it
/// on screen.
#[derive(Debug)]
pub struct HeadlessUi {
    message_ticks: u32,
    visible_for: u32,
    pending: Option<String>,
}

impl HeadlessUi {
    pub fn new(message_ticks: u32) -> Self {
        Self {
            message_ticks,
            visible_for: 0,
            pending: None,
        }
    }
}

impl BattleUi for HeadlessUi {
    fn open(&mut self, ctx: &BattleContext) {
        let enemies: Vec<&str> = ctx
            .troop()
            .members()
            .iter()
            .filter_map(|&id| ctx.battler(id))
            .map(|b| b.name.as_str())
            .collect();
        tracing::info!(enemies = ?enemies, "windows opened");
    }

    fn update(&mut self) {
        if let Some(text) = self.pending.take() {
            tracing::info!(target: "battle::message", "{text}");
            self.visible_for = self.message_ticks;
        } else {
            self.visible_for = self.visible_for.saturating_sub(1);
        }
    }

    fn is_message_visible(&self) -> bool {
        self.visible_for > 0
    }

    fn is_message_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn selected_skill(&self) -> Option<SkillId> {
        None
    }

    fn on_phase_changed(&mut self, phase: BattlePhase) {
        let text = match phase {
            BattlePhase::Start => "Enemies appear!",
            BattlePhase::Victory => "Victory!",
            BattlePhase::Defeat => "The party has fallen...",
            BattlePhase::Escape => "Got away safely.",
            _ => return,
        };
        self.pending = Some(text.to_owned());
    }
}

/// Presentation that only logs what would be played or shown.
#[derive(Debug, Default)]
pub struct LogPresentation {
    frames: u64,
}

impl LogPresentation {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Presentation for LogPresentation {
    fn reset_map_bgm(&mut self) {
        tracing::debug!("map music forgotten");
    }

    fn play_bgm(&mut self, name: &str) {
        tracing::info!(bgm = name, "playing music");
    }

    fn play_se(&mut self, name: &str) {
        tracing::info!(se = name, "playing sound");
    }

    fn show_background(&mut self, background: &Background) {
        match background {
            Background::Named(name) => tracing::info!(background = %name, "background"),
            Background::Terrain(terrain) => tracing::info!(%terrain, "terrain background"),
        }
    }

    fn update_screen(&mut self) {
        self.frames += 1;
    }
}

/// Flat-number combat rules for demonstrations.
///
/// Attacks deal `attack` damage (twice for dual attacks, doubled after a
/// charge). Skills hit opponents for `skill` damage or heal allies by the
/// same amount. Self-destruct hits every opponent for twice the skill power
/// and fells the performer.
#[derive(Debug)]
pub struct DemoResolver {
    attack: u32,
    skill: u32,
    charged: HashSet<BattlerId>,
}

impl DemoResolver {
    pub fn new(attack: u32, skill: u32) -> Self {
        Self {
            attack,
            skill,
            charged: HashSet::new(),
        }
    }

    fn strike(
        &mut self,
        ctx: &mut BattleContext,
        actor: BattlerId,
        target: Option<BattlerId>,
        hits: u32,
    ) {
        let power = if self.charged.remove(&actor) {
            self.attack * 2
        } else {
            self.attack
        };
        let Some(battler) = target
            .and_then(|target| ctx.battler_mut(target))
            .filter(|b| b.is_alive())
        else {
            tracing::info!(%actor, ?target, "attack finds no target");
            return;
        };
        let dealt: u32 = (0..hits).map(|_| battler.take_damage(power)).sum();
        tracing::info!(
            %actor,
            target = %battler.name,
            dealt,
            hp = battler.hp.current,
            "attack"
        );
    }
}

impl Default for DemoResolver {
    fn default() -> Self {
        Self::new(6, 8)
    }
}

impl EffectResolver for DemoResolver {
    fn resolve(
        &mut self,
        action: DetachedAction,
        ctx: &mut BattleContext,
        env: &BattleEnv<'_>,
    ) -> Option<BattleResult> {
        let DetachedAction { actor, algorithm } = action;
        let side = ctx.battler(actor)?.side();

        match algorithm {
            ActionAlgorithm::Normal { target } => self.strike(ctx, actor, target, 1),
            ActionAlgorithm::NormalDual { target } => self.strike(ctx, actor, target, 2),
            ActionAlgorithm::Defend => tracing::info!(%actor, "defends"),
            ActionAlgorithm::Observe => tracing::info!(%actor, "watches carefully"),
            ActionAlgorithm::Charge => {
                self.charged.insert(actor);
                tracing::info!(%actor, "charges up");
            }
            ActionAlgorithm::SelfDestruct => {
                for target in algorithm.targets(actor, ctx) {
                    if let Some(battler) = ctx.battler_mut(target) {
                        battler.take_damage(self.skill * 2);
                    }
                }
                if let Some(battler) = ctx.battler_mut(actor) {
                    let remaining = battler.hp.current;
                    battler.take_damage(remaining);
                }
                tracing::info!(%actor, "self-destructs");
            }
            ActionAlgorithm::Escape => {
                if side == Side::Party {
                    return Some(BattleResult::Escape);
                }
                // A fleeing enemy leaves the fight.
                if let Some(battler) = ctx.battler_mut(actor) {
                    let remaining = battler.hp.current;
                    battler.take_damage(remaining);
                    tracing::info!(name = %battler.name, "runs away");
                }
            }
            ActionAlgorithm::Skill { skill, .. } => {
                let name = env
                    .skill(skill)
                    .map(|def| def.name.as_str())
                    .unwrap_or("???");
                for target in algorithm.targets(actor, ctx) {
                    let Some(battler) = ctx.battler_mut(target) else {
                        continue;
                    };
                    if battler.side() == side {
                        battler.restore(self.skill);
                    } else {
                        battler.take_damage(self.skill);
                    }
                }
                tracing::info!(%actor, skill = name, "casts");
            }
            ActionAlgorithm::Transform { into } => {
                let template = env.enemies().ok().and_then(|enemies| enemies.enemy(into));
                if let (Some(template), Some(battler)) = (template, ctx.battler_mut(actor)) {
                    tracing::info!(from = %battler.name, to = %template.name, "transforms");
                    battler.origin = BattlerOrigin::Enemy(into);
                    battler.name = template.name.clone();
                    battler.hp.maximum = template.max_hp;
                    battler.hp.current = template.max_hp;
                }
            }
        }
        None
    }
}

/// Party input that always fights and attacks the first standing enemy.
#[derive(Debug, Default)]
pub struct AutoCommands {
    /// Pick auto-battle instead of entering commands.
    auto_battle: bool,
}

impl AutoCommands {
    pub fn new(auto_battle: bool) -> Self {
        Self { auto_battle }
    }
}

impl CommandSource for AutoCommands {
    fn select_option(&mut self, _ctx: &BattleContext) -> Option<PartyOption> {
        Some(if self.auto_battle {
            PartyOption::AutoBattle
        } else {
            PartyOption::Fight
        })
    }

    fn select_command(&mut self, _actor: BattlerId, ctx: &BattleContext) -> Option<PlayerCommand> {
        let command = match ctx.troop().living(ctx.battlers()).next() {
            Some(target) => PlayerCommand::Attack { target },
            None => PlayerCommand::Defend,
        };
        Some(command)
    }
}

/// Event layer without troop pages; only reports turn boundaries.
#[derive(Debug, Default)]
pub struct TurnLogEvents;

impl EncounterEvents for TurnLogEvents {
    fn process_turn(&mut self, turn: u32, ctx: &mut BattleContext) {
        let standing = |side: Side| ctx.side(side).living(ctx.battlers()).count();
        tracing::info!(
            turn,
            party = standing(Side::Party),
            enemies = standing(Side::Troop),
            "turn ended"
        );
    }

    fn update(&mut self, _ctx: &mut BattleContext) {}
}
