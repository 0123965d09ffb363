use fieldgate::{ActionKind, MatchMode, Operator, RuleSet};
use serde_json::json;

#[test]
fn parse_and_evaluate_canonical_json() {
    let rules = RuleSet::from_json(
        r#"[
            {
                "id": "npc-alignment",
                "name": "Hide alignment for non-NPCs",
                "match_mode": "none",
                "conditions": [
                    {"field": "type", "operator": "equals", "values": ["npc"]}
                ],
                "actions": [
                    {"target": "alignment", "action": "hide"}
                ],
                "priority": 0
            }
        ]"#,
    )
    .unwrap();

    let eval = rules.evaluate(&json!({"type": "location"}));
    assert!(eval.is_hidden("alignment", true));

    let eval = rules.evaluate(&json!({"type": "npc"}));
    assert!(!eval.is_hidden("alignment", true));
}

#[test]
fn mixed_alias_generations_normalize_to_one_shape() {
    // Three authoring generations of the same rule concept.
    let rules = RuleSet::from_json(
        r#"[
            {
                "criteria": [{"source": "kind", "op": "eq", "value": "npc"}],
                "effects": [{"field": "faction", "effect": "show"}]
            },
            {
                "when": [{"property": "kind", "comparator": "not_equals", "expected": "npc"}],
                "then": [{"key": "faction", "kind": "hidden"}]
            },
            {
                "predicates": [{"path": "stats.level", "operator": "gte", "values": [5]}],
                "target": "veteran_perks",
                "action": "show"
            }
        ]"#,
    )
    .unwrap();
    assert_eq!(rules.len(), 3);

    let eval = rules.evaluate(&json!({"kind": "npc", "stats": {"level": 7}}));
    assert_eq!(eval.action_for("faction"), Some(ActionKind::Show));
    assert_eq!(eval.action_for("veteran_perks"), Some(ActionKind::Show));

    let eval = rules.evaluate(&json!({"kind": "item"}));
    assert_eq!(eval.action_for("faction"), Some(ActionKind::Hide));
    assert!(eval.is_hidden("faction", true));
}

#[test]
fn malformed_rules_are_dropped_not_surfaced() {
    let rules = RuleSet::from_json(
        r#"[
            "not even an object",
            {"name": "no conditions at all", "actions": [{"target": "x", "action": "hide"}]},
            {"conditions": [{"operator": "equals", "values": [1]}], "actions": [{"target": "x", "action": "hide"}]},
            {"conditions": [{"field": "a", "values": [1]}], "actions": [{"target": "x", "action": "explode"}]},
            {"conditions": [{"field": "type", "values": ["npc"]}], "actions": [{"target": "ok", "action": "hide"}]}
        ]"#,
    )
    .unwrap();

    // Only the last rule survives normalization.
    assert_eq!(rules.len(), 1);
    let eval = rules.evaluate(&json!({"type": "npc", "a": 1}));
    assert_eq!(eval.action_for("ok"), Some(ActionKind::Hide));
    assert_eq!(eval.action_for("x"), None);
}

#[test]
fn unknown_tokens_fall_back_where_specified() {
    let rules = RuleSet::from_json(
        r#"[{
            "match_mode": "sideways",
            "conditions": [{"field": "type", "operator": "resembles", "values": ["npc"]}],
            "actions": [{"target": "x", "action": "hide"}]
        }]"#,
    )
    .unwrap();

    let rule = &rules.rules()[0];
    assert_eq!(rule.match_mode, MatchMode::All);
    assert_eq!(rule.conditions[0].operator, Operator::Equals);

    // The fallback operator still evaluates as equals.
    assert!(!rules.evaluate(&json!({"type": "npc"})).is_empty());
    assert!(rules.evaluate(&json!({"type": "pc"})).is_empty());
}

#[test]
fn canonical_rules_round_trip_through_serde() {
    let rules = RuleSet::from_json(
        r#"[{
            "id": "r1",
            "conditions": [{"field": "type", "operator": "in", "values": ["npc", "monster"]}],
            "targets": ["alignment", "hoard"],
            "action": "show",
            "priority": 2.5
        }]"#,
    )
    .unwrap();

    let serialized = serde_json::to_string(rules.rules()).unwrap();
    let raw: Vec<serde_json::Value> = serde_json::from_str(&serialized).unwrap();
    let reloaded = RuleSet::normalize(&raw);
    assert_eq!(reloaded.rules(), rules.rules());

    let record = json!({"type": "monster"});
    assert_eq!(
        reloaded.evaluate(&record).actions_by_field(),
        rules.evaluate(&record).actions_by_field(),
    );
}

#[test]
fn top_level_must_be_an_array() {
    assert!(RuleSet::from_json("{}").is_err());
    assert!(RuleSet::from_json("\"rules\"").is_err());
    assert!(RuleSet::from_json("[").is_err());
    assert!(RuleSet::from_json("[]").unwrap().is_empty());
}

#[test]
fn from_file_reads_rule_definitions() {
    let dir = std::env::temp_dir().join("fieldgate-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("rules.json");
    std::fs::write(
        &path,
        r#"[{
            "conditions": [{"field": "type", "values": ["npc"]}],
            "actions": [{"target": "alignment", "action": "hide"}]
        }]"#,
    )
    .unwrap();

    let rules = RuleSet::from_file(&path).unwrap();
    assert_eq!(rules.len(), 1);
    assert!(RuleSet::from_file(dir.join("missing.json")).is_err());
}
