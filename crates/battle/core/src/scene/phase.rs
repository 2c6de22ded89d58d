/// Phase of the battle state machine.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BattlePhase {
    /// Battle announcement; entered by `start`.
    #[default]
    Start,
    /// Party chooses between fighting, auto-battle and escape.
    SelectOption,
    /// Picks the next party member that still needs a command.
    SelectActor,
    /// Every party member gets a default attack.
    AutoBattle,
    /// Waits for the active actor's command.
    SelectCommand,
    /// Queued actions resolve one per tick.
    Battle,
    Victory,
    Defeat,
    Escape,
}

impl BattlePhase {
    /// Terminal phases record a result and end the scene.
    pub fn result(self) -> Option<BattleResult> {
        match self {
            Self::Victory => Some(BattleResult::Victory),
            Self::Defeat => Some(BattleResult::Defeat),
            Self::Escape => Some(BattleResult::Escape),
            _ => None,
        }
    }
}

/// Outcome reported to whoever opened the battle.
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
pub enum BattleResult {
    Victory,
    Defeat,
    Escape,
}

impl From<BattleResult> for BattlePhase {
    fn from(result: BattleResult) -> Self {
        match result {
            BattleResult::Victory => Self::Victory,
            BattleResult::Defeat => Self::Defeat,
            BattleResult::Escape => Self::Escape,
        }
    }
}
