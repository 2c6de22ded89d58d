#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use battle_core::{
    ActorId, ActorTemplate, BasicAction, Background, BattleContext, BattleEnv, BattlePhase,
    BattleResult, BattleServices, BattleTestSetup, BattleUi, BattlerId, CommandSource,
    DataSnapshot, DetachedAction, EffectResolver, EnemyActionDefinition, EnemyId, EnemyTemplate,
    EncounterEvents, PartyOption, PlayerCommand, Presentation, Side, SkillDefinition, SkillId,
    SkillScope, SkillType, SystemData, TerrainId, TroopDefinition, TroopId,
};
use battle_core::{ActionAlgorithm, BattlerOrigin};

/// What the fake collaborators saw and what they will answer.
#[derive(Debug, Default)]
pub struct Probe {
    pub message_visible: bool,
    pub message_pending: bool,
    pub selected_skill: Option<SkillId>,
    pub options: VecDeque<PartyOption>,
    pub commands: VecDeque<PlayerCommand>,
    /// Damage dealt by every resolved attack.
    pub damage: u32,

    pub calls: Vec<String>,
    pub phases: Vec<BattlePhase>,
    pub resolved: Vec<DetachedAction>,
    pub turns: Vec<u32>,
    pub event_ticks: u32,
    pub screen_ticks: u32,
}

#[derive(Clone, Debug, Default)]
pub struct SharedProbe(Arc<Mutex<Probe>>);

impl SharedProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> MutexGuard<'_, Probe> {
        self.0.lock().unwrap()
    }

    pub fn services(&self) -> BattleServices {
        BattleServices::new(
            Box::new(FakeUi(self.clone())),
            Box::new(FakePresentation(self.clone())),
            Box::new(FakeResolver(self.clone())),
            Box::new(FakeEvents(self.clone())),
            Box::new(FakeCommands(self.clone())),
        )
    }
}

struct FakeUi(SharedProbe);

impl BattleUi for FakeUi {
    fn open(&mut self, _ctx: &BattleContext) {
        self.0.lock().calls.push("open".into());
    }

    fn update(&mut self) {
        self.0.lock().calls.push("ui_update".into());
    }

    fn is_message_visible(&self) -> bool {
        self.0.lock().message_visible
    }

    fn is_message_pending(&self) -> bool {
        self.0.lock().message_pending
    }

    fn selected_skill(&self) -> Option<SkillId> {
        self.0.lock().selected_skill
    }

    fn on_phase_changed(&mut self, phase: BattlePhase) {
        self.0.lock().phases.push(phase);
    }
}

struct FakePresentation(SharedProbe);

impl Presentation for FakePresentation {
    fn reset_map_bgm(&mut self) {
        self.0.lock().calls.push("reset_map_bgm".into());
    }

    fn play_bgm(&mut self, name: &str) {
        self.0.lock().calls.push(format!("bgm:{name}"));
    }

    fn play_se(&mut self, name: &str) {
        self.0.lock().calls.push(format!("se:{name}"));
    }

    fn show_background(&mut self, background: &Background) {
        self.0.lock().calls.push(format!("background:{background:?}"));
    }

    fn update_screen(&mut self) {
        let mut probe = self.0.lock();
        probe.screen_ticks += 1;
        probe.calls.push("screen".into());
    }
}

/// Attacks deal `Probe::damage`; a party escape ends the battle.
struct FakeResolver(SharedProbe);

impl EffectResolver for FakeResolver {
    fn resolve(
        &mut self,
        action: DetachedAction,
        ctx: &mut BattleContext,
        _env: &BattleEnv<'_>,
    ) -> Option<BattleResult> {
        let mut probe = self.0.lock();
        probe.resolved.push(action.clone());
        probe.calls.push("resolve".into());

        match action.algorithm {
            ActionAlgorithm::Normal {
                target: Some(target),
            }
            | ActionAlgorithm::NormalDual {
                target: Some(target),
            } => {
                if let Some(battler) = ctx.battler_mut(target) {
                    battler.take_damage(probe.damage);
                }
                None
            }
            ActionAlgorithm::Escape
                if ctx
                    .battler(action.actor)
                    .is_some_and(|b| b.side() == Side::Party) =>
            {
                Some(BattleResult::Escape)
            }
            _ => None,
        }
    }
}

struct FakeEvents(SharedProbe);

impl EncounterEvents for FakeEvents {
    fn process_turn(&mut self, turn: u32, _ctx: &mut BattleContext) {
        self.0.lock().turns.push(turn);
    }

    fn update(&mut self, _ctx: &mut BattleContext) {
        let mut probe = self.0.lock();
        probe.event_ticks += 1;
        probe.calls.push("events".into());
    }
}

struct FakeCommands(SharedProbe);

impl CommandSource for FakeCommands {
    fn select_option(&mut self, _ctx: &BattleContext) -> Option<PartyOption> {
        let mut probe = self.0.lock();
        probe.calls.push("input".into());
        probe.options.pop_front()
    }

    fn select_command(&mut self, _actor: BattlerId, _ctx: &BattleContext) -> Option<PlayerCommand> {
        let mut probe = self.0.lock();
        probe.calls.push("input".into());
        probe.commands.pop_front()
    }
}

pub const HARDEN: SkillId = SkillId(7);
pub const BLAZE: SkillId = SkillId(8);
pub const RALLY: SkillId = SkillId(9);
pub const BLINK: SkillId = SkillId(10);

pub const SLIME: EnemyId = EnemyId(1);
pub const GOBLIN: EnemyId = EnemyId(2);
pub const OGRE: EnemyId = EnemyId(3);

pub const ALEX: ActorId = ActorId(1);
pub const BRIAN: ActorId = ActorId(2);

/// Five troops; troop 3 fields a Goblin and a Slime.
pub fn five_troops() -> DataSnapshot {
    let mut skills = vec![
        SkillDefinition::new("Strike", SkillType::Normal, SkillScope::SingleEnemy);
        6
    ];
    skills.push(SkillDefinition::new("Harden", SkillType::Normal, SkillScope::SelfOnly));
    skills.push(SkillDefinition::new("Blaze", SkillType::Normal, SkillScope::AllEnemies));
    skills.push(SkillDefinition::new("Rally", SkillType::Normal, SkillScope::AllAllies));
    skills.push(SkillDefinition::new("Blink", SkillType::Teleport, SkillScope::SelfOnly));

    DataSnapshot::new(
        vec![
            TroopDefinition::new("Lone Slime", vec![SLIME]),
            TroopDefinition::new("Goblin Pack", vec![GOBLIN, GOBLIN]),
            TroopDefinition::new("Mixed", vec![GOBLIN, SLIME]),
            TroopDefinition::new("Ogre", vec![OGRE]),
            TroopDefinition::new("Empty Cave", vec![]),
        ],
        vec![
            EnemyTemplate {
                name: "Slime".into(),
                max_hp: 8,
                actions: vec![EnemyActionDefinition::skill(HARDEN)],
            },
            EnemyTemplate {
                name: "Goblin".into(),
                max_hp: 15,
                actions: vec![EnemyActionDefinition::basic(BasicAction::Defend)],
            },
            EnemyTemplate {
                name: "Ogre".into(),
                max_hp: 40,
                actions: vec![EnemyActionDefinition::basic(BasicAction::Attack)],
            },
        ],
        skills,
        vec![ActorTemplate::new("Alex", 30), ActorTemplate::new("Brian", 24)],
        SystemData {
            battle_music: "Battle1".into(),
            battle_se: "Begin".into(),
            default_terrain: TerrainId(2),
            battle_test: BattleTestSetup {
                troop: TroopId(2),
                background: "Castle".into(),
                members: vec![BRIAN],
            },
        },
    )
}

/// Troop members whose template is `species`, in troop order.
pub fn enemies_of(ctx: &BattleContext, species: EnemyId) -> Vec<BattlerId> {
    ctx.troop()
        .members()
        .iter()
        .copied()
        .filter(|&id| {
            ctx.battler(id)
                .is_some_and(|b| b.origin == BattlerOrigin::Enemy(species))
        })
        .collect()
}

pub fn queue(ctx: &BattleContext) -> Vec<BattlerId> {
    ctx.scheduler().iter().collect()
}
