//! The lookup contract the game core uses to reach content.

use ss_mechanics::DiceSource;

use crate::template::{EnemyTemplate, ObjectTemplate, RoomTemplate};

/// Read access to rooms, enemies, and objects, by id or at random.
///
/// Implementations guarantee that the object pool, the door-destination
/// pool, and the common-enemy pool are never empty, so random draws always
/// succeed.
pub trait ContentRepository {
    /// The room every session starts in.
    fn starting_room(&self) -> &RoomTemplate;

    /// Look up any room by id.
    fn room(&self, id: &str) -> Option<&RoomTemplate>;

    /// Look up a pickable object by id.
    fn object(&self, id: &str) -> Option<&ObjectTemplate>;

    /// Look up an enemy by id, common or room-specific.
    fn enemy(&self, id: &str) -> Option<&EnemyTemplate>;

    /// Draw uniformly from the objects the starting room offers.
    fn random_pickable_object(&self, dice: &mut dyn DiceSource) -> &ObjectTemplate;

    /// Draw a room behind a door, uniformly over the second-layer rooms.
    fn random_door_destination(&self, dice: &mut dyn DiceSource) -> &RoomTemplate;

    /// Draw an enemy for a room: uniformly over the common pool plus the
    /// room's own enemy, if it has one. Unknown room ids fall back to the
    /// common pool alone.
    fn random_enemy(&self, room_id: &str, dice: &mut dyn DiceSource) -> &EnemyTemplate;
}
