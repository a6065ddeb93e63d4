//! Shared catalog fixture for integration tests

#![allow(dead_code)]

use persona_core::CatalogSnapshot;

/// Trimmed Data Dragon `champion.json` with a mix of override and
/// computed-only champions
pub const CHAMPION_JSON: &str = r#"{
  "type": "champion",
  "format": "standAloneComplex",
  "version": "14.1.1",
  "data": {
    "Akali": {
      "id": "Akali", "name": "Akali", "tags": ["Assassin"],
      "info": {"attack": 8, "defense": 4, "magic": 6, "difficulty": 8},
      "stats": {"attackrange": 125}
    },
    "Ahri": {
      "id": "Ahri", "name": "Ahri", "tags": ["Mage", "Assassin"],
      "info": {"attack": 3, "defense": 4, "magic": 8, "difficulty": 5},
      "stats": {"attackrange": 550}
    },
    "JarvanIV": {
      "id": "JarvanIV", "name": "Jarvan IV", "tags": ["Tank", "Fighter"],
      "info": {"attack": 6, "defense": 8, "magic": 3, "difficulty": 5},
      "stats": {"attackrange": 175}
    },
    "Kaisa": {
      "id": "Kaisa", "name": "Kai'Sa", "tags": ["Marksman"],
      "info": {"attack": 8, "defense": 5, "magic": 3, "difficulty": 6},
      "stats": {"attackrange": 525}
    },
    "Khazix": {
      "id": "Khazix", "name": "Kha'Zix", "tags": ["Assassin"],
      "info": {"attack": 9, "defense": 4, "magic": 3, "difficulty": 6},
      "stats": {"attackrange": 125}
    },
    "LeeSin": {
      "id": "LeeSin", "name": "Lee Sin", "tags": ["Fighter", "Assassin"],
      "info": {"attack": 8, "defense": 5, "magic": 3, "difficulty": 6},
      "stats": {"attackrange": 125}
    },
    "Naafiri": {
      "id": "Naafiri", "name": "Naafiri", "tags": ["Assassin"],
      "info": {"attack": 8, "defense": 4, "magic": 6, "difficulty": 8},
      "stats": {"attackrange": 125}
    },
    "Qiyana": {
      "id": "Qiyana", "name": "Qiyana", "tags": ["Assassin"],
      "info": {"attack": 8, "defense": 4, "magic": 6, "difficulty": 8},
      "stats": {"attackrange": 125}
    },
    "Thresh": {
      "id": "Thresh", "name": "Thresh", "tags": ["Support", "Tank"],
      "info": {"attack": 5, "defense": 6, "magic": 6, "difficulty": 7},
      "stats": {"attackrange": 450}
    },
    "MonkeyKing": {
      "id": "MonkeyKing", "name": "Wukong", "tags": ["Fighter", "Tank"],
      "info": {"attack": 8, "defense": 5, "magic": 2, "difficulty": 3},
      "stats": {"attackrange": 175}
    },
    "Vi": {
      "id": "Vi", "name": "Vi", "tags": ["Fighter", "Assassin"],
      "info": {"attack": 8, "defense": 5, "magic": 3, "difficulty": 4},
      "stats": {"attackrange": 125}
    },
    "Viktor": {
      "id": "Viktor", "name": "Viktor", "tags": ["Mage"],
      "info": {"attack": 2, "defense": 4, "magic": 10, "difficulty": 9},
      "stats": {"attackrange": 525}
    }
  }
}"#;

pub fn catalog() -> CatalogSnapshot {
    CatalogSnapshot::from_ddragon_json(CHAMPION_JSON).expect("fixture catalog parses")
}
