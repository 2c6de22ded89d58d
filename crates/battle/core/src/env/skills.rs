use crate::state::SkillId;

/// Oracle providing the skill table.
pub trait SkillOracle: Send + Sync {
    fn skill(&self, id: SkillId) -> Option<&SkillDefinition>;
}

/// How a skill is used. Only `Normal` skills are resolved in battle by the
/// decision engine; the rest go through the field "begin skill" path.
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
pub enum SkillType {
    #[default]
    Normal,
    Teleport,
    Escape,
    Switch,
}

/// Targets a skill applies to, relative to the caster.
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
pub enum SkillScope {
    SingleEnemy,
    SingleAlly,
    AllEnemies,
    /// The caster itself.
    SelfOnly,
    AllAllies,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skill_type: SkillType,
    pub scope: SkillScope,
}

impl SkillDefinition {
    pub fn new(name: impl Into<String>, skill_type: SkillType, scope: SkillScope) -> Self {
        Self {
            name: name.into(),
            skill_type,
            scope,
        }
    }
}
