//! Mapping between hecs entities and the public `EntityId`.
//!
//! hecs entities carry a generation, so an id taken from a despawned entity
//! never resolves to a later one occupying the same slot.

use hecs::Entity;

use skyguard_core::types::EntityId;

pub fn entity_id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

pub fn resolve(id: EntityId) -> Option<Entity> {
    Entity::from_bits(id.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hecs::World;

    #[test]
    fn test_id_round_trip() {
        let mut world = World::new();
        let e = world.spawn((1u32,));
        assert_eq!(resolve(entity_id(e)), Some(e));
    }

    #[test]
    fn test_stale_id_does_not_alias() {
        let mut world = World::new();
        let old = world.spawn((1u32,));
        let old_id = entity_id(old);
        world.despawn(old).unwrap();
        let new = world.spawn((2u32,));

        let resolved = resolve(old_id).unwrap();
        assert_ne!(resolved, new);
        assert!(world.get::<&u32>(resolved).is_err());
    }

    #[test]
    fn test_zero_is_not_an_entity() {
        assert_eq!(resolve(EntityId(0)), None);
    }
}
