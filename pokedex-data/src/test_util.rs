use core::fmt::Debug;

use pretty_assertions::assert_eq;
use serde::{
    Serialize,
    de::DeserializeOwned,
};
use serde_json::{
    Value,
    json,
};

use crate::RawRecord;

/// Asserts that the value serializes to the given JSON string.
#[track_caller]
pub fn test_string_serialization<T: Serialize>(value: T, expected: &str) {
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        format!("\"{expected}\"")
    );
}

/// Asserts that the given string deserializes into the expected value.
#[track_caller]
pub fn test_string_deserialization<T>(value: &str, expected: T)
where
    T: DeserializeOwned + Debug + PartialEq,
{
    assert_eq!(
        serde_json::from_str::<T>(&format!("\"{value}\"")).unwrap(),
        expected
    );
}

/// Asserts that the given JSON value deserializes into the expected value.
#[track_caller]
pub fn test_deserialization<T>(value: Value, expected: T)
where
    T: DeserializeOwned + Debug + PartialEq,
{
    assert_eq!(serde_json::from_value::<T>(value).unwrap(), expected);
}

/// Converts a JSON object literal into a [`RawRecord`].
pub fn record(value: Value) -> RawRecord {
    match value {
        Value::Object(map) => map,
        _ => panic!("record literal must be an object"),
    }
}

/// A complete raw species record for Bulbasaur.
pub fn bulbasaur() -> RawRecord {
    record(json!({
        "id": 1,
        "name": "bulbasaur",
        "is_legendary": false,
        "is_mythical": false,
        "appear_rate": 45,
        "capture_rate": 45,
        "gender_rate": 1,
        "growth_rate": "medium-slow",
        "evolves_from": null,
        "evolves_to": { "id": 2, "name": "ivysaur", "min_level": 16 },
        "types": ["grass", "poison"],
        "base_stats": {
            "health_points": { "red-blue": 45 },
            "attack": { "red-blue": 49 },
            "defense": { "red-blue": 49 },
            "special_attack": { "red-blue": 65 },
            "special_defense": { "red-blue": 65 },
            "speed": { "red-blue": 45 }
        },
        "ev_yields": { "special-attack": 1 },
        "sprites": {
            "normal": "https://sprites.example/1.png",
            "shiny": "https://sprites.example/shiny/1.png"
        },
        "regions": ["kanto"],
        "learnable_moves": {
            "level-up": [
                { "id": 33, "name": "tackle", "min_level": 1, "version": "red-blue" },
                { "id": 22, "name": "vine-whip", "min_level": 13, "version": "red-blue" }
            ],
            "machine": [
                { "id": 14, "name": "swords-dance", "min_level": 0, "version": "red-blue" }
            ],
            "egg": [
                { "id": 80, "name": "petal-dance", "min_level": 0, "version": "gold-silver" }
            ],
            "tutor": [
                { "id": 38, "name": "double-edge", "min_level": 0, "version": "emerald" }
            ]
        }
    }))
}

/// A complete raw move record for Tackle.
pub fn tackle() -> RawRecord {
    record(json!({
        "id": 33,
        "name": "tackle",
        "power": 40,
        "accuracy": 100,
        "type": "normal",
        "damage_class": "physical"
    }))
}
