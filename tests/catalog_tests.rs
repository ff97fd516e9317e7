pub mod mock;

use nekoapi::{
    get_action_cat, get_all_cats_by_type, get_big_cat, get_cat_by_mood, get_cat_face, get_cat_parade,
    get_cat_with_message, get_kitten, get_random_cat, get_sleeping_cat, list_actions, list_cat_types,
    list_moods, Catalog, CatalogError, Category, KeyKind, ACTIONS, CAT_TYPES, MOODS,
};
use std::collections::HashSet;

use mock::TestCatData;

#[test]
fn test_every_listed_key_resolves() {
    for mood in list_moods() {
        assert!(get_cat_by_mood(Some(&mood)).is_ok(), "mood {}", mood);
    }
    for action in list_actions() {
        assert!(get_action_cat(Some(&action)).is_ok(), "action {}", action);
    }
    for cat_type in list_cat_types() {
        assert!(get_all_cats_by_type(&cat_type).is_ok(), "type {}", cat_type);
    }
    for key in Catalog::global().keys(Category::Face) {
        assert!(get_cat_face(Some(*key)).is_ok());
    }
    for key in Catalog::global().keys(Category::Kitten) {
        assert!(get_kitten(Some(*key)).is_ok());
    }
    for key in Catalog::global().keys(Category::BigCat) {
        assert!(get_big_cat(Some(*key)).is_ok());
    }
}

#[test]
fn test_exported_constants_match_listings() {
    assert_eq!(list_moods(), MOODS);
    assert_eq!(list_actions(), ACTIONS);
    assert_eq!(list_cat_types(), CAT_TYPES);
}

#[test]
fn test_mood_lookup_is_case_insensitive() {
    assert_eq!(get_cat_by_mood(Some("HAPPY")).unwrap(), get_cat_by_mood(Some("happy")).unwrap());

    for (mixed, lower) in TestCatData::mixed_case_moods() {
        assert_eq!(get_cat_by_mood(Some(mixed)).unwrap(), get_cat_by_mood(Some(lower)).unwrap());
    }
}

#[test]
fn test_unknown_mood_lists_all_moods() {
    let error = get_cat_by_mood(Some("nonexistent")).unwrap_err();
    let message = error.to_string();

    assert!(message.contains("nonexistent"));
    for mood in MOODS {
        assert!(message.contains(mood), "missing {} in {}", mood, message);
    }
    assert_eq!(
        error,
        CatalogError::UnknownKey {
            kind: KeyKind::Mood,
            input: "nonexistent".to_string(),
            valid: MOODS.iter().map(|m| m.to_string()).collect(),
        }
    );
}

#[test]
fn test_unknown_keys_are_not_trimmed() {
    for key in TestCatData::unknown_keys() {
        assert!(get_cat_by_mood(Some(key)).is_err(), "{:?} should not resolve", key);
    }
}

#[test]
fn test_error_kind_per_accessor() {
    assert_eq!(get_cat_face(Some("x")).unwrap_err().kind(), KeyKind::FaceType);
    assert_eq!(get_kitten(Some("x")).unwrap_err().kind(), KeyKind::KittenType);
    assert_eq!(get_big_cat(Some("x")).unwrap_err().kind(), KeyKind::Pose);
    assert_eq!(get_action_cat(Some("x")).unwrap_err().kind(), KeyKind::Action);
    assert_eq!(get_all_cats_by_type("x").unwrap_err().kind(), KeyKind::CatType);
}

#[test]
fn test_defaults() {
    assert_eq!(get_cat_by_mood(None).unwrap(), get_cat_by_mood(Some("standard")).unwrap());
    assert_eq!(get_cat_face(None).unwrap(), get_cat_face(Some("standard")).unwrap());
    assert_eq!(get_kitten(None).unwrap(), get_kitten(Some("standard")).unwrap());
    assert_eq!(get_big_cat(None).unwrap(), get_big_cat(Some("sitting")).unwrap());
    assert_eq!(get_action_cat(None).unwrap(), get_action_cat(Some("sleeping")).unwrap());
    assert_eq!(get_sleeping_cat(), get_action_cat(Some("sleeping")).unwrap());
    assert_eq!(get_cat_parade(None).split("  ").count(), 3);
}

#[test]
fn test_speech_bubble_short_message() {
    let output = get_cat_with_message("Hi", Some("happy")).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert!(output.starts_with(".----------.\n"));
    assert_eq!(lines[0].len(), ".".len() + 10 + ".".len());
    assert_eq!(lines[1], format!("| {:<10}|", "Hi"));
    assert_eq!(lines[2], "'----------'");
    assert_eq!(lines[3], "  \\");
    assert!(output.ends_with(get_cat_by_mood(Some("happy")).unwrap()));
}

#[test]
fn test_speech_bubble_unknown_mood() {
    assert!(get_cat_with_message("Hi", Some("grumpy")).is_err());
}

#[test]
fn test_parade_counts() {
    assert_eq!(get_cat_parade(Some(0)), "");
    assert_eq!(get_cat_parade(Some(-3)), "");

    let faces: HashSet<String> = get_all_cats_by_type("face").unwrap().into_values().collect();
    let parade = get_cat_parade(Some(5));
    let pieces: Vec<&str> = parade.split("  ").collect();

    assert_eq!(pieces.len(), 5);
    for piece in pieces {
        assert!(!piece.is_empty());
        assert!(faces.contains(piece), "{} is not a face", piece);
    }
}

#[test]
fn test_all_cats_by_type_face() {
    let mut faces = get_all_cats_by_type("face").unwrap();
    let declared: HashSet<String> = Catalog::global()
        .keys(Category::Face)
        .iter()
        .map(|k| k.to_string())
        .collect();
    let returned: HashSet<String> = faces.keys().cloned().collect();
    assert_eq!(returned, declared);

    faces.clear();
    assert_eq!(get_all_cats_by_type("FACE").unwrap().len(), declared.len());
}

#[test]
fn test_random_cat_never_returns_face_art() {
    let faces: HashSet<String> = get_all_cats_by_type("face").unwrap().into_values().collect();
    let mut pool: HashSet<String> = HashSet::new();
    for name in ["standard", "kitten", "big", "action"] {
        pool.extend(get_all_cats_by_type(name).unwrap().into_values());
    }

    for _ in 0..1000 {
        let cat = get_random_cat();
        assert!(pool.contains(cat));
        assert!(!faces.contains(cat));
    }
}
