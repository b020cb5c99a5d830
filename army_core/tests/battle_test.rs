//! Integration test: Load catalog -> Build armies -> Evaluate -> Compare
//!
//! Exercises the public API the way a form-driven caller would.

use army_core::{
    battle::{compare, simulate_battle},
    calculator::{evaluate, evaluate_detailed, Stage},
    config::{parse_army, parse_army_json},
    ArmyComposition, HeroBonuses, ShrineKind, Side, StatKind, UnitCatalog, WallLevel,
};

const EPS: f64 = 1e-9;

fn catalog() -> UnitCatalog {
    UnitCatalog::reference().expect("reference catalog should parse")
}

#[test]
fn test_full_battle_flow() {
    let catalog = catalog();

    let attacker = ArmyComposition::new("Angreifer")
        .with_unit("Hauptmann", 1)
        .with_unit("Werwölfe", 20)
        .with_unit("Vampirlords", 10)
        .with_blood_level(2.0)
        .with_shrine(ShrineKind::Earth)
        .with_hero(HeroBonuses::new().with_attack_pct(10.0).with_level(2));

    let defender = ArmyComposition::new("Verteidiger")
        .with_unit("General", 1)
        .with_unit("Ritter", 30)
        .with_shrine(ShrineKind::Fire)
        .as_defender(WallLevel::new(2).unwrap());

    let a = evaluate(&attacker, &catalog);
    let d = evaluate(&defender, &catalog);

    // Attacker: 31 units
    // atk = (20 + 600 + 600 + 3*31 + 2*31) * 1.2 = 1375 * 1.2
    assert!((a.total_attack - 1650.0).abs() < EPS);
    // def = 60 + 800 + 440
    assert!((a.total_defense - 1300.0).abs() < EPS);
    // hp = 400 + 6000 + 3800
    assert!((a.total_hp - 10200.0).abs() < EPS);

    // Defender: 31 units
    assert!((d.total_attack - 320.0).abs() < EPS);
    // def = 60 + 1050 + 5*31 + 3*31
    assert!((d.total_defense - 1358.0).abs() < EPS);
    // hp = (400 + 4500) * 0.4
    assert!((d.total_hp - 1960.0).abs() < EPS);

    let battle = simulate_battle(&attacker, &defender, &catalog);
    assert_eq!(battle.attacker, a);
    assert_eq!(battle.defender, d);
    // 1650 - 1358 = 292 vs 320 - 1300 = -980
    assert_eq!(battle.outcome.winner, Side::Attacker);
    assert_eq!(battle.winner_name(), "Angreifer");
}

#[test]
fn test_wall_three_leaves_ten_percent() {
    let catalog = catalog();
    // 1 Heiler = 1000 hp
    let defender = ArmyComposition::new("")
        .with_unit("Heiler", 1)
        .as_defender(WallLevel::new(3).unwrap());

    let result = evaluate(&defender, &catalog);
    assert!((result.total_hp - 100.0).abs() < EPS);
    // Attack and defense untouched
    assert!((result.total_attack - 5.0).abs() < EPS);
    assert!((result.total_defense - 15.0).abs() < EPS);
}

#[test]
fn test_hero_bonus_applies_to_running_total() {
    let catalog = catalog();
    // 20 Ritter = 200 attack
    let army = ArmyComposition::new("")
        .with_unit("Ritter", 20)
        .with_hero(HeroBonuses::new().with_attack_pct(50.0));

    let report = evaluate_detailed(&army, &catalog);
    assert!((report.after(Stage::Shrines).unwrap().total_attack - 200.0).abs() < EPS);
    assert!((report.result.total_attack - 300.0).abs() < EPS);
    assert!((report.stage_delta(Stage::Hero, StatKind::Attack) - 100.0).abs() < EPS);
}

#[test]
fn test_symmetric_armies_favor_defender() {
    let catalog = catalog();
    let army = ArmyComposition::new("").with_unit("Söldner", 25);

    let a = evaluate(&army, &catalog);
    let d = evaluate(&army, &catalog);
    let outcome = compare(&a, &d);

    assert!(outcome.is_tie());
    assert_eq!(outcome.winner, Side::Defender);
}

#[test]
fn test_unknown_units_are_ignored() {
    let catalog = catalog();
    let army = ArmyComposition::new("")
        .with_unit("Ritter", 1)
        .with_unit("Einhorn", 1000)
        .with_shrine(ShrineKind::Shadow);

    let report = evaluate_detailed(&army, &catalog);
    assert_eq!(report.skipped_units, vec!["Einhorn".to_string()]);
    // 150 hp + 15 for the one known unit
    assert!((report.result.total_hp - 165.0).abs() < EPS);
}

#[test]
fn test_toml_and_json_armies_agree() {
    let catalog = catalog();

    let from_toml = parse_army(
        r#"
name = "Angreifer"
blood_level = 1.5

[units]
Vampirmagier = 12
Feldkoch = 2

[[shrines]]
kind = "shadow"
"#,
    )
    .unwrap();

    let from_json = parse_army_json(
        r#"{
            "name": "Angreifer",
            "blood_level": 1.5,
            "units": { "Vampirmagier": 12, "Feldkoch": 2 },
            "shrines": [{ "kind": "shadow" }]
        }"#,
    )
    .unwrap();

    assert_eq!(from_toml, from_json);
    assert_eq!(evaluate(&from_toml, &catalog), evaluate(&from_json, &catalog));
}

#[test]
fn test_results_serialize() {
    let catalog = catalog();
    let attacker = ArmyComposition::new("A").with_unit("Skelette", 3);
    let defender = ArmyComposition::new("B").with_unit("Diebinnen", 3);
    let battle = simulate_battle(&attacker, &defender, &catalog);

    let json = serde_json::to_string(&battle).unwrap();
    assert!(json.contains("\"winner\":\"attacker\"") || json.contains("\"winner\":\"defender\""));
    let back: army_core::Battle = serde_json::from_str(&json).unwrap();
    assert_eq!(back, battle);
}
