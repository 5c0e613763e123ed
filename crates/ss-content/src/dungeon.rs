//! The JSON-backed dungeon.

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;
use ss_mechanics::DiceSource;

use crate::error::{ContentError, ContentResult};
use crate::repository::ContentRepository;
use crate::template::{Door, EnemyTemplate, ObjectTemplate, RoomTemplate};

const BUILTIN: &str = include_str!("../data/dungeon.json");

/// A complete, validated set of dungeon content.
#[derive(Debug, Clone, Deserialize)]
pub struct Dungeon {
    starting_room: RoomTemplate,
    rooms: Vec<RoomTemplate>,
    objects: Vec<ObjectTemplate>,
    common_enemies: Vec<EnemyTemplate>,
    #[serde(default)]
    room_enemies: BTreeMap<String, EnemyTemplate>,
}

impl Dungeon {
    /// The dungeon that ships with the game.
    pub fn builtin() -> ContentResult<Self> {
        Self::from_json(BUILTIN)
    }

    /// Parse and validate a dungeon from JSON.
    pub fn from_json(json: &str) -> ContentResult<Self> {
        let dungeon: Self = serde_json::from_str(json)?;
        dungeon.validate()?;
        tracing::debug!(
            rooms = dungeon.rooms.len(),
            objects = dungeon.objects.len(),
            common_enemies = dungeon.common_enemies.len(),
            room_enemies = dungeon.room_enemies.len(),
            "dungeon loaded"
        );
        Ok(dungeon)
    }

    /// The second-layer rooms behind the starting room's doors.
    pub fn rooms(&self) -> &[RoomTemplate] {
        &self.rooms
    }

    /// Every pickable object.
    pub fn objects(&self) -> &[ObjectTemplate] {
        &self.objects
    }

    /// Enemies that can appear in any room.
    pub fn common_enemies(&self) -> &[EnemyTemplate] {
        &self.common_enemies
    }

    /// The room-specific enemy for a room, if it has one.
    pub fn room_enemy(&self, room_id: &str) -> Option<&EnemyTemplate> {
        self.room_enemies.get(room_id)
    }

    fn validate(&self) -> ContentResult<()> {
        if self.rooms.is_empty() {
            return Err(ContentError::EmptyPool("rooms"));
        }
        if self.objects.is_empty() {
            return Err(ContentError::EmptyPool("objects"));
        }
        if self.common_enemies.is_empty() {
            return Err(ContentError::EmptyPool("common enemies"));
        }
        if self.starting_room.objects.is_empty() {
            return Err(ContentError::EmptyPool("starting room objects"));
        }

        let mut room_ids = HashSet::new();
        for room in std::iter::once(&self.starting_room).chain(&self.rooms) {
            if !room_ids.insert(room.id.as_str()) {
                return Err(ContentError::DuplicateId(room.id.clone()));
            }
        }

        let mut object_ids = HashSet::new();
        for object in &self.objects {
            if !object_ids.insert(object.id.as_str()) {
                return Err(ContentError::DuplicateId(object.id.clone()));
            }
        }

        let mut enemy_ids = HashSet::new();
        for enemy in self.common_enemies.iter().chain(self.room_enemies.values()) {
            if !enemy_ids.insert(enemy.id.as_str()) {
                return Err(ContentError::DuplicateId(enemy.id.clone()));
            }
        }

        for (room, enemy) in &self.room_enemies {
            if !room_ids.contains(room.as_str()) {
                return Err(ContentError::UnknownRoom {
                    room: room.clone(),
                    enemy: enemy.id.clone(),
                });
            }
        }

        for room in std::iter::once(&self.starting_room).chain(&self.rooms) {
            if let Some(missing) = room.objects.iter().find(|o| !object_ids.contains(o.as_str())) {
                return Err(ContentError::UnknownObject {
                    room: room.id.clone(),
                    object: missing.clone(),
                });
            }
            if let Some(door) = Door::ALL.into_iter().find(|d| !room.doors.contains(d)) {
                return Err(ContentError::MissingDoor {
                    room: room.id.clone(),
                    door,
                });
            }
        }

        Ok(())
    }
}

impl ContentRepository for Dungeon {
    fn starting_room(&self) -> &RoomTemplate {
        &self.starting_room
    }

    fn room(&self, id: &str) -> Option<&RoomTemplate> {
        std::iter::once(&self.starting_room)
            .chain(&self.rooms)
            .find(|r| r.id == id)
    }

    fn object(&self, id: &str) -> Option<&ObjectTemplate> {
        self.objects.iter().find(|o| o.id == id)
    }

    fn enemy(&self, id: &str) -> Option<&EnemyTemplate> {
        self.common_enemies
            .iter()
            .chain(self.room_enemies.values())
            .find(|e| e.id == id)
    }

    fn random_pickable_object(&self, dice: &mut dyn DiceSource) -> &ObjectTemplate {
        // Validation guarantees a non-empty list of known ids.
        let offered = &self.starting_room.objects;
        let id = &offered[dice.pick(offered.len())];
        self.object(id).unwrap_or(&self.objects[0])
    }

    fn random_door_destination(&self, dice: &mut dyn DiceSource) -> &RoomTemplate {
        &self.rooms[dice.pick(self.rooms.len())]
    }

    fn random_enemy(&self, room_id: &str, dice: &mut dyn DiceSource) -> &EnemyTemplate {
        let special = self.room_enemies.get(room_id);
        if special.is_none() {
            tracing::debug!(room_id, "no room-specific enemy; drawing from the common pool");
        }
        let pool_len = self.common_enemies.len() + usize::from(special.is_some());
        let index = dice.pick(pool_len);
        match self.common_enemies.get(index) {
            Some(enemy) => enemy,
            None => special.unwrap_or(&self.common_enemies[0]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ss_mechanics::{RiggedDice, SeededDice};

    fn dungeon() -> Dungeon {
        Dungeon::builtin().unwrap()
    }

    #[test]
    fn builtin_loads() {
        let d = dungeon();
        assert_eq!(d.rooms().len(), 5);
        assert_eq!(d.objects().len(), 3);
        assert_eq!(d.common_enemies().len(), 3);
        assert_eq!(d.starting_room().objects.len(), 3);
        assert!(d.room_enemy("underground lake").is_some());
    }

    #[test]
    fn lookups_by_id() {
        let d = dungeon();
        assert_eq!(d.room("guard barracks").unwrap().name, "Guard Barracks");
        assert_eq!(d.room("starting room").unwrap().name, "Starting Room");
        assert_eq!(d.object("rusty spoon").unwrap().name, "Rusty Spoon");
        assert_eq!(d.enemy("water horror").unwrap().name, "Water Horror");
        assert_eq!(d.enemy("cave spider").unwrap().name, "Cave Spider");
        assert!(d.room("throne room").is_none());
    }

    #[test]
    fn room_enemy_joins_the_pool_last() {
        let d = dungeon();
        let mut dice = RiggedDice::default().with_picks([3]);
        let enemy = d.random_enemy("torture chamber", &mut dice);
        assert_eq!(enemy.name, "Tortured Spirit");

        let mut dice = RiggedDice::default().with_picks([1]);
        let enemy = d.random_enemy("torture chamber", &mut dice);
        assert_eq!(enemy.name, "Cave Spider");
    }

    #[test]
    fn unknown_room_uses_common_pool_only() {
        let d = dungeon();
        let mut dice = SeededDice::new(11);
        for _ in 0..200 {
            let enemy = d.random_enemy("nowhere", &mut dice);
            assert!(d.common_enemies().iter().any(|e| e.id == enemy.id));
        }
    }

    #[test]
    fn random_draws_cover_their_pools() {
        let d = dungeon();
        let mut dice = SeededDice::new(5);
        let mut rooms = HashSet::new();
        let mut objects = HashSet::new();
        let mut enemies = HashSet::new();
        for _ in 0..500 {
            rooms.insert(d.random_door_destination(&mut dice).id.clone());
            objects.insert(d.random_pickable_object(&mut dice).id.clone());
            enemies.insert(d.random_enemy("crypt of forgotten souls", &mut dice).id.clone());
        }
        assert_eq!(rooms.len(), 5);
        assert_eq!(objects.len(), 3);
        assert_eq!(enemies.len(), 4);
        assert!(enemies.contains("restless wraith"));
        assert!(!rooms.contains("starting room"));
    }

    #[test]
    fn rejects_empty_pools() {
        let json = r#"{
            "starting_room": {"id": "start", "name": "Start", "description": ""},
            "rooms": [],
            "objects": [],
            "common_enemies": []
        }"#;
        assert!(matches!(
            Dungeon::from_json(json),
            Err(ContentError::EmptyPool("rooms"))
        ));
    }

    fn one_room_dungeon(starting_room: &str) -> String {
        format!(
            r#"{{
                "starting_room": {starting_room},
                "rooms": [{{"id": "pit", "name": "Pit", "description": ""}}],
                "objects": [
                    {{"id": "sword", "name": "Sword", "description": ""}},
                    {{"id": "pebble", "name": "Pebble", "description": ""}}
                ],
                "common_enemies": [{{
                    "id": "bat", "name": "Cave Bat", "kind": "beast",
                    "abilities": {{"strength": 2, "dexterity": 4, "constitution": 2,
                                  "intelligence": 1, "wisdom": 2, "charisma": 1}},
                    "weapon": {{"name": "fangs", "description": ""}}
                }}]
            }}"#
        )
    }

    #[test]
    fn pickable_objects_come_from_the_starting_room() {
        let d = Dungeon::from_json(&one_room_dungeon(
            r#"{"id": "cell", "name": "Cell", "description": "", "objects": ["pebble"]}"#,
        ))
        .unwrap();
        for pick in 0..4 {
            let mut dice = RiggedDice::default().with_picks([pick]);
            assert_eq!(d.random_pickable_object(&mut dice).name, "Pebble");
        }
    }

    #[test]
    fn rejects_starting_room_without_objects() {
        let json = one_room_dungeon(r#"{"id": "cell", "name": "Cell", "description": ""}"#);
        assert!(matches!(
            Dungeon::from_json(&json),
            Err(ContentError::EmptyPool("starting room objects"))
        ));
    }

    #[test]
    fn rejects_rooms_missing_a_door() {
        let json = one_room_dungeon(
            r#"{"id": "cell", "name": "Cell", "description": "", "objects": ["pebble"], "doors": []}"#,
        );
        let err = Dungeon::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingDoor { ref room, door: Door::Left } if room == "cell"
        ));

        let json = one_room_dungeon(
            r#"{"id": "cell", "name": "Cell", "description": "", "objects": ["pebble"], "doors": ["left"]}"#,
        );
        let err = Dungeon::from_json(&json).unwrap_err();
        assert_eq!(err.to_string(), "room \"cell\" has no right door");
    }

    #[test]
    fn rejects_dangling_room_enemy() {
        let mut value: serde_json::Value = serde_json::from_str(BUILTIN).unwrap();
        let horror = value["room_enemies"]["underground lake"].take();
        value["room_enemies"]["sunken vault"] = horror;
        value["room_enemies"]
            .as_object_mut()
            .unwrap()
            .remove("underground lake");
        let err = Dungeon::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::UnknownRoom { ref room, .. } if room == "sunken vault"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Dungeon::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }
}
