use crate::ir::Entity;
use crate::ir::Location;
use indexmap::IndexMap;

/// Arena of the [`Entity`]s owned by one compilation unit, keyed by
/// [`Location`].
///
/// Entities are created on first use and then always mutated in place, so a
/// `Location` maps to exactly one `Entity` for the lifetime of the unit.
/// Nested entities are referred to by their `Location` rather than by
/// pointer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityStorage {
    entities: IndexMap<Location, Entity>,
}
impl EntityStorage {
    pub(super) fn entity_mut_or_create(&mut self, location: &Location) -> &mut Entity {
        if !self.entities.contains_key(location) {
            log::trace!("Creating entity at {location}.");
            self.entities.insert(location.to_owned(), Entity::new(location.to_owned()));
        }
        &mut self.entities[location]
    }

    pub fn get(&self, location: &Location) -> Option<&Entity> {
        self.entities.get(location)
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Every entity, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }
}
impl std::ops::Index<&Location> for EntityStorage {
    type Output = Entity;

    /// Panics if no entity exists at `location`. Locations handed out by this
    /// crate (root locations and [`EntityField`](crate::ir::EntityField)
    /// handles) always resolve within the storage of the unit they came from.
    fn index(&self, location: &Location) -> &Entity {
        &self.entities[location]
    }
}
impl serde::Serialize for EntityStorage {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entities.values())
    }
}
