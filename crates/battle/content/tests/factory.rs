use std::fs;
use std::path::Path;

use battle_content::{ContentFactory, bundled_snapshot};
use battle_core::{
    ActorId, BattleContext, BattleEnv, BattlerOrigin, EnemyDecisionEngine, EnemyId, PcgRng,
    TroopId, TroopOracle,
};
use tempfile::TempDir;

const TROOPS: &str = r#"(troops: [(name: "Pair", members: [1, 2])])"#;
const ENEMIES: &str = r#"(
    enemies: [
        (name: "Slime", max_hp: 8, actions: [(kind: Skill(1))]),
        (name: "Goblin", max_hp: 15, actions: [(kind: Basic(Defend), rating: 10)]),
    ],
)"#;
const SKILLS: &str = r#"(skills: [(name: "Harden", scope: SelfOnly)])"#;
const ACTORS: &str = r#"(actors: [(name: "Alex", max_hp: 30)])"#;
const SYSTEM: &str = r#"
battle_music = "Battle1"
battle_se = "Battle Start"
default_terrain = 2

[battle_test]
troop = 1
background = ""
members = [1]
"#;

fn write_data(dir: &Path, troops: &str) {
    fs::write(dir.join("troops.ron"), troops).unwrap();
    fs::write(dir.join("enemies.ron"), ENEMIES).unwrap();
    fs::write(dir.join("skills.ron"), SKILLS).unwrap();
    fs::write(dir.join("actors.ron"), ACTORS).unwrap();
    fs::write(dir.join("system.toml"), SYSTEM).unwrap();
}

#[test]
fn loads_a_data_directory() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), TROOPS);

    let snapshot = ContentFactory::new(temp.path()).load_snapshot().unwrap();

    assert_eq!(snapshot.troop_count(), 1);
    assert_eq!(
        snapshot.troop(TroopId(1)).map(|t| t.members.clone()),
        Some(vec![EnemyId(1), EnemyId(2)])
    );
    assert_eq!(snapshot.enemies[1].actions[0].rating, 10);
    assert_eq!(snapshot.system.battle_test.members, [ActorId(1)]);
}

#[test]
fn missing_file_names_the_path() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), TROOPS);
    fs::remove_file(temp.path().join("skills.ron")).unwrap();

    let err = ContentFactory::new(temp.path())
        .load_snapshot()
        .unwrap_err();

    assert!(err.to_string().contains("skills.ron"), "{err}");
}

#[test]
fn dangling_troop_member_is_rejected() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), r#"(troops: [(name: "Ghosts", members: [9])])"#);

    let err = ContentFactory::new(temp.path())
        .load_snapshot()
        .unwrap_err();

    assert!(err.to_string().contains("enemy 9"), "{err}");
}

#[test]
fn malformed_ron_is_reported() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), "(troops: [(name: \"Broken\"");

    let err = ContentFactory::new(temp.path())
        .load_snapshot()
        .unwrap_err();

    assert!(err.to_string().contains("troop catalog"), "{err}");
}

#[test]
fn bundled_content_is_consistent() {
    let snapshot = bundled_snapshot().unwrap();

    assert!(snapshot.troop_count() >= 5);
    assert!(snapshot.troop(snapshot.system.battle_test.troop).is_some());
}

#[test]
fn every_bundled_enemy_action_decides_without_error() {
    let snapshot = bundled_snapshot().unwrap();
    let engine = EnemyDecisionEngine::new(BattleEnv::from_snapshot(&snapshot, &PcgRng));

    for (index, template) in snapshot.enemies.iter().enumerate() {
        let species = EnemyId(index as u32 + 1);
        for def in &template.actions {
            let mut ctx = BattleContext::new(TroopId(1), 11);
            ctx.spawn("Alex", BattlerOrigin::Actor(ActorId(1)), 48)
                .unwrap();
            let enemy = ctx
                .spawn(template.name.clone(), BattlerOrigin::Enemy(species), template.max_hp)
                .unwrap();

            let result = engine.create_enemy_action(&mut ctx, enemy, def, None);
            assert!(result.is_ok(), "{}: {def:?} -> {result:?}", template.name);
        }
    }
}
