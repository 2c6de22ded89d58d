/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Base seed for every random draw made during a battle.
    ///
    /// Combined with the context nonce so that replays of the same encounter
    /// with the same inputs pick the same targets and actions.
    pub seed: u64,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of battlers on one side (player party or troop).
    pub const MAX_SIDE_MEMBERS: usize = 8;

    // ===== data defaults =====
    /// Rating given to enemy actions that do not declare one.
    pub const DEFAULT_ACTION_RATING: u8 = 5;
    /// Highest rating an enemy action may carry.
    pub const MAX_ACTION_RATING: u8 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEED: u64 = 0x5EED_BA77_1E00_0001;

    pub fn new() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
