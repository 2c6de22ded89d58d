//! Collaborators the battle scene drives but does not implement.
//!
//! Frontends plug in windows, audio, combat formulas and player input
//! through these traits. `battle-cli` ships headless versions of each.
use crate::action::{ActionAlgorithm, SkillTarget};
use crate::engine::DetachedAction;
use crate::env::BattleEnv;
use crate::state::{BattleContext, BattlerId, SkillId, TerrainId};

use super::{BattlePhase, BattleResult};

/// Image shown behind the battlers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Background {
    /// A named background image.
    Named(String),
    /// The default background for a terrain type.
    Terrain(TerrainId),
}

/// Battle windows: option, command, target, skill, status and message.
pub trait BattleUi: Send {
    /// Creates the windows for a freshly started battle.
    fn open(&mut self, ctx: &BattleContext);

    /// Advances every window by one tick.
    fn update(&mut self);

    /// A modal message is on screen; blocks action resolution.
    fn is_message_visible(&self) -> bool;

    /// A message is queued but not shown yet; blocks player input.
    fn is_message_pending(&self) -> bool;

    /// Skill currently highlighted in the skill window.
    fn selected_skill(&self) -> Option<SkillId>;

    fn on_phase_changed(&mut self, _phase: BattlePhase) {}
}

/// Audio, background and screen-effect output.
pub trait Presentation: Send {
    /// Forgets the remembered map music so it restarts after the battle.
    fn reset_map_bgm(&mut self);

    fn play_bgm(&mut self, name: &str);

    fn play_se(&mut self, name: &str);

    fn show_background(&mut self, background: &Background);

    /// Advances screen effects (flash, shake, tint) by one tick.
    fn update_screen(&mut self);
}

/// Applies a detached action to the battle: damage, state changes,
/// animations.
///
/// Ownership of the algorithm moves into the resolver. Returning a result
/// ends the battle immediately (a successful party escape, for example).
pub trait EffectResolver: Send {
    fn resolve(
        &mut self,
        action: DetachedAction,
        ctx: &mut BattleContext,
        env: &BattleEnv<'_>,
    ) -> Option<BattleResult>;
}

/// Map/event layer hooks: troop pages and global animation state.
pub trait EncounterEvents: Send {
    /// Runs turn-boundary events after the turn counter advanced.
    fn process_turn(&mut self, turn: u32, ctx: &mut BattleContext);

    /// Per-tick event update.
    fn update(&mut self, ctx: &mut BattleContext);
}

/// Choices offered by the party option window.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PartyOption {
    Fight,
    AutoBattle,
    Escape,
}

/// A command entered for one party member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerCommand {
    Attack { target: BattlerId },
    Defend,
    Skill { skill: SkillId, target: SkillTarget },
    Escape,
}

impl PlayerCommand {
    pub fn into_algorithm(self) -> ActionAlgorithm {
        match self {
            Self::Attack { target } => ActionAlgorithm::Normal {
                target: Some(target),
            },
            Self::Defend => ActionAlgorithm::Defend,
            Self::Skill { skill, target } => ActionAlgorithm::Skill { skill, target },
            Self::Escape => ActionAlgorithm::Escape,
        }
    }
}

/// Player input. `None` means the player has not decided yet.
pub trait CommandSource: Send {
    fn select_option(&mut self, ctx: &BattleContext) -> Option<PartyOption>;

    fn select_command(&mut self, actor: BattlerId, ctx: &BattleContext) -> Option<PlayerCommand>;
}

/// Every collaborator the scene talks to.
pub struct BattleServices {
    pub ui: Box<dyn BattleUi>,
    pub presentation: Box<dyn Presentation>,
    pub resolver: Box<dyn EffectResolver>,
    pub events: Box<dyn EncounterEvents>,
    pub commands: Box<dyn CommandSource>,
}

impl BattleServices {
    pub fn new(
        ui: Box<dyn BattleUi>,
        presentation: Box<dyn Presentation>,
        resolver: Box<dyn EffectResolver>,
        events: Box<dyn EncounterEvents>,
        commands: Box<dyn CommandSource>,
    ) -> Self {
        Self {
            ui,
            presentation,
            resolver,
            events,
            commands,
        }
    }
}

impl std::fmt::Debug for BattleServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleServices").finish_non_exhaustive()
    }
}
