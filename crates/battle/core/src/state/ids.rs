use std::fmt;

/// Stable handle to a battler inside the [`BattlerArena`](super::BattlerArena).
///
/// Handles are allocated sequentially when a battle starts and are never
/// reused within that battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattlerId(pub u32);

impl fmt::Display for BattlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Declares a 1-based identifier into one of the static data tables.
macro_rules! data_id {
    ($(#[$meta:meta])* $name:ident => $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub u32);

        impl $name {
            /// Table index for this id (ids are 1-based, tables 0-based).
            ///
            /// Returns `None` for id 0, which never names a table row.
            #[inline]
            pub const fn index(self) -> Option<usize> {
                match self.0 {
                    0 => None,
                    n => Some(n as usize - 1),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }
    };
}

data_id!(
    /// Troop (monster party) table id.
    TroopId => "troop"
);
data_id!(
    /// Enemy species table id.
    EnemyId => "enemy"
);
data_id!(
    /// Skill table id.
    SkillId => "skill"
);
data_id!(
    /// Party member (hero) table id.
    ActorId => "actor"
);
data_id!(
    /// Terrain id used to pick a default battle background.
    TerrainId => "terrain"
);
