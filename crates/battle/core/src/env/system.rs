//! System-wide battle settings.

use crate::state::{ActorId, TerrainId, TroopId};

/// Oracle exposing the system table.
pub trait SystemOracle: Send + Sync {
    fn system(&self) -> &SystemData;
}

/// Battle audio, terrain default and battle-test setup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemData {
    pub battle_music: String,
    /// Sound effect played when a battle begins.
    pub battle_se: String,
    /// Terrain used for the background when the encounter names none.
    pub default_terrain: TerrainId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub battle_test: BattleTestSetup,
}

impl Default for SystemData {
    fn default() -> Self {
        Self {
            battle_music: String::new(),
            battle_se: String::new(),
            default_terrain: TerrainId(1),
            battle_test: BattleTestSetup::default(),
        }
    }
}

/// Scripted encounter used by battle-test mode.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleTestSetup {
    pub troop: TroopId,
    pub background: String,
    /// Party members fielded instead of the regular roster.
    pub members: Vec<ActorId>,
}

impl Default for BattleTestSetup {
    fn default() -> Self {
        Self {
            troop: TroopId(1),
            background: String::new(),
            members: Vec::new(),
        }
    }
}
