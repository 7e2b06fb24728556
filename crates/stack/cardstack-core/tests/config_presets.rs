use cardstack_core::{Engine, InputEvent, Placement, StackConfig, Vec2};
use cardstack_test_fixtures::configs;

/// it should parse and validate every preset in the fixtures manifest
#[test]
fn all_presets_parse_and_validate() {
    let keys = configs::keys();
    assert!(!keys.is_empty());
    for name in keys {
        let raw = configs::json(&name).expect("fixture readable");
        let cfg: StackConfig = serde_json::from_str(&raw).expect("fixture parses");
        cfg.validate().expect("fixture validates");
    }
}

/// it should run a full drag cycle under the counter-clockwise preset
#[test]
fn counter_clockwise_preset_drag_cycle() {
    let raw = configs::json("counter-clockwise").unwrap();
    let cfg: StackConfig = serde_json::from_str(&raw).unwrap();
    assert_eq!(cfg.placement, Placement::CounterClockwise);
    let threshold = cfg.drag_threshold;

    let mut eng = Engine::new(cfg).unwrap();
    eng.set_cards(4);
    eng.apply(InputEvent::DragBegin);
    eng.apply(InputEvent::DragUpdate {
        translation: Vec2::new(-threshold, 0.0),
    });
    eng.apply(InputEvent::DragEnd {
        translation: Vec2::new(-(threshold + 2.0), 0.0),
    });
    let ids: Vec<u32> = eng.order().iter().map(|c| c.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 0]);
}

/// it should honor the shallow-deck visible limit end to end
#[test]
fn shallow_deck_visible_limit() {
    let raw = configs::json("shallow-deck").unwrap();
    let cfg: StackConfig = serde_json::from_str(&raw).unwrap();
    assert_eq!(cfg.visible_limit, Some(3));

    let mut eng = Engine::new(cfg).unwrap();
    eng.set_cards(6);
    let out = eng.relayout();
    assert_eq!(out.transforms.len(), 3);
}
