use std::{
    fs,
    path::Path,
};

use pokedex_data::{
    RawRecord,
    RawRecordStore,
};
use serde_json::{
    Value,
    json,
};
use tempfile::TempDir;

fn record(value: Value) -> RawRecord {
    match value {
        Value::Object(map) => map,
        _ => panic!("record literal must be an object"),
    }
}

/// A valid raw species record with the given identity, types, and regions.
///
/// Every other field holds a plausible default. Tests override fields with
/// [`RawRecord::insert`].
pub fn species(id: u32, name: &str, types: &[&str], regions: &[&str]) -> RawRecord {
    record(json!({
        "id": id,
        "name": name,
        "is_legendary": false,
        "is_mythical": false,
        "appear_rate": 45,
        "capture_rate": 45,
        "gender_rate": 1,
        "growth_rate": "medium-slow",
        "evolves_from": null,
        "evolves_to": null,
        "types": types,
        "base_stats": {
            "health_points": { "red-blue": 45 },
            "attack": { "red-blue": 49 },
            "defense": { "red-blue": 49 },
            "special_attack": { "red-blue": 65 },
            "special_defense": { "red-blue": 65 },
            "speed": { "red-blue": 45 }
        },
        "ev_yields": {},
        "sprites": {
            "normal": format!("https://sprites.example/{id}.png"),
            "shiny": format!("https://sprites.example/shiny/{id}.png")
        },
        "regions": regions,
        "learnable_moves": {
            "level-up": [
                { "id": 33, "name": "tackle", "min_level": 1, "version": "red-blue" }
            ]
        }
    }))
}

pub fn bulbasaur() -> RawRecord {
    let mut record = species(1, "bulbasaur", &["grass", "poison"], &["kanto"]);
    record.insert(
        "evolves_to".to_owned(),
        json!({ "id": 2, "name": "ivysaur", "min_level": 16 }),
    );
    record.insert("ev_yields".to_owned(), json!({ "special-attack": 1 }));
    record.insert(
        "learnable_moves".to_owned(),
        json!({
            "level-up": [
                { "id": 33, "name": "tackle", "min_level": 1, "version": "red-blue" },
                { "id": 22, "name": "vine-whip", "min_level": 13, "version": "red-blue" }
            ],
            "machine": [
                { "id": 14, "name": "swords-dance", "min_level": 0, "version": "red-blue" }
            ],
            "tutor": [
                { "id": 38, "name": "double-edge", "min_level": 0, "version": "emerald" }
            ]
        }),
    );
    record
}

pub fn ivysaur() -> RawRecord {
    let mut record = species(2, "ivysaur", &["grass", "poison"], &["kanto"]);
    record.insert("evolves_from".to_owned(), json!(1));
    record.insert(
        "evolves_to".to_owned(),
        json!({ "id": 3, "name": "venusaur", "min_level": 32 }),
    );
    record
}

pub fn venusaur() -> RawRecord {
    let mut record = species(3, "venusaur", &["grass", "poison"], &["kanto"]);
    record.insert("evolves_from".to_owned(), json!(2));
    record
}

pub fn charmander() -> RawRecord {
    species(4, "charmander", &["fire"], &["kanto", "johto"])
}

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

pub fn vine_whip() -> RawRecord {
    record(json!({
        "id": 22,
        "name": "vine-whip",
        "power": 45,
        "accuracy": 100,
        "type": "grass",
        "damage_class": "physical"
    }))
}

fn growl() -> RawRecord {
    record(json!({
        "id": 45,
        "name": "growl",
        "power": null,
        "accuracy": 100,
        "type": "normal",
        "damage_class": "status"
    }))
}

fn swift() -> RawRecord {
    record(json!({
        "id": 129,
        "name": "swift",
        "power": 60,
        "accuracy": null,
        "type": "normal",
        "damage_class": "special"
    }))
}

/// Bulbasaur, Ivysaur, Venusaur, and Charmander, in that order.
pub fn standard_pokemon() -> Vec<RawRecord> {
    vec![bulbasaur(), ivysaur(), venusaur(), charmander()]
}

/// Vine Whip, Tackle, Growl, and Swift, in that order.
pub fn standard_moves() -> Vec<RawRecord> {
    vec![vine_whip(), tackle(), growl(), swift()]
}

/// A store holding the standard `pokemon` and `moves` categories.
pub fn standard_store() -> RawRecordStore {
    RawRecordStore::from_iter([
        ("pokemon".to_owned(), standard_pokemon()),
        ("moves".to_owned(), standard_moves()),
    ])
}

/// A temporary reference data directory, deleted on drop.
pub struct TestDataDir {
    dir: TempDir,
}

impl TestDataDir {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Creates a directory holding the standard `pokemon` and `moves` categories.
    pub fn standard() -> Self {
        let dir = Self::new();
        dir.write("pokemon", &standard_pokemon());
        dir.write("moves", &standard_moves());
        dir
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes (or overwrites) the file for a category.
    pub fn write(&self, category: &str, records: &[RawRecord]) {
        self.write_raw(
            &format!("{category}.json"),
            &serde_json::to_string_pretty(records).unwrap(),
        );
    }

    /// Writes a file with arbitrary contents.
    pub fn write_raw(&self, file_name: &str, contents: &str) {
        fs::write(self.dir.path().join(file_name), contents).unwrap();
    }

    /// Deletes the file for a category.
    pub fn remove(&self, category: &str) {
        fs::remove_file(self.dir.path().join(format!("{category}.json"))).unwrap();
    }
}

impl Default for TestDataDir {
    fn default() -> Self {
        Self::new()
    }
}
