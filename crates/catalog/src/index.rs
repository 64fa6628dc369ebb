//! Catalog building, loading and validation.
//!
//! The catalog keeps entities in the order the data source supplied them
//! (discovery results must preserve that order) plus an id index for
//! lookups.

use crate::error::{CatalogError, Result};
use crate::parser::read_json;
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// In-memory, read-only collection of entities
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entities: Vec<Entity>,
    positions: HashMap<EntityId, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from entities, validating each one.
    ///
    /// Steps:
    /// 1. Validate rating range
    /// 2. Reject duplicate ids
    /// 3. Warn (but keep) entities with unusable coordinates
    pub fn from_entities(entities: Vec<Entity>) -> Result<Self> {
        let mut catalog = Self::new();
        for entity in entities {
            catalog.insert(entity)?;
        }
        Ok(catalog)
    }

    /// Load a JSON array of entities from a file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", path);
        let entities: Vec<Entity> = read_json(path)?;
        let catalog = Self::from_entities(entities)?;
        info!("Loaded {} entities", catalog.len());
        Ok(catalog)
    }

    /// Append an entity, keeping input order
    pub fn insert(&mut self, entity: Entity) -> Result<()> {
        validate_entity(&entity)?;
        if self.positions.contains_key(&entity.id) {
            return Err(CatalogError::DuplicateId(entity.id));
        }
        if !entity.location.is_valid() {
            // Data quality issue: distance-based facets will skip this entity
            warn!(
                "Entity {} has an invalid coordinate ({}, {})",
                entity.id, entity.location.lat, entity.location.lng
            );
        }
        self.positions.insert(entity.id, self.entities.len());
        self.entities.push(entity);
        Ok(())
    }

    /// Get an entity by ID
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.positions.get(&id).map(|&pos| &self.entities[pos])
    }

    /// All entities, in input order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Check the invariants a single entity must satisfy
fn validate_entity(entity: &Entity) -> Result<()> {
    if !entity.rating.is_finite() || !(0.0..=5.0).contains(&entity.rating) {
        return Err(CatalogError::InvalidValue {
            id: entity.id,
            field: "rating".to_string(),
            value: entity.rating.to_string(),
        });
    }
    if entity.name.trim().is_empty() {
        return Err(CatalogError::InvalidValue {
            id: entity.id,
            field: "name".to_string(),
            value: entity.name.clone(),
        });
    }
    Ok(())
}

/// Load a JSON array of engagement snapshots from a file
pub fn load_snapshots(path: &Path) -> Result<Vec<EngagementSnapshot>> {
    info!("Loading engagement snapshots from {:?}", path);
    let snapshots: Vec<EngagementSnapshot> = read_json(path)?;
    info!("Loaded {} snapshots", snapshots.len());
    Ok(snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn entity(id: EntityId, name: &str) -> Entity {
        Entity::restaurant(
            id,
            name,
            Category::Korean,
            PriceTier::Moderate,
            Coordinate::new(37.5665, 126.9780),
        )
    }

    #[test]
    fn test_insert_preserves_order() {
        let catalog = Catalog::from_entities(vec![
            entity(3, "Gwangjang Bindaetteok"),
            entity(1, "Myeongdong Kyoja"),
            entity(2, "Tosokchon"),
        ])
        .unwrap();

        let ids: Vec<EntityId> = catalog.entities().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(catalog.get(1).unwrap().name, "Myeongdong Kyoja");
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let result = Catalog::from_entities(vec![entity(1, "A"), entity(1, "B")]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_rating_out_of_range_is_rejected() {
        let result = Catalog::from_entities(vec![entity(1, "A").with_rating(5.5)]);
        assert!(matches!(result, Err(CatalogError::InvalidValue { ref field, .. }) if field == "rating"));

        let result = Catalog::from_entities(vec![entity(1, "A").with_rating(f32::NAN)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_coordinate_is_kept() {
        let mut bad = entity(1, "Nowhere");
        bad.location = Coordinate::new(120.0, 0.0);
        let catalog = Catalog::from_entities(vec![bad]).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let json = r#"[
            {
                "id": 7,
                "name": "Jinmi Pyeongyang Naengmyeon",
                "category": "korean",
                "price": "₩₩",
                "rating": 4.6,
                "location": { "lat": 37.5133, "lng": 127.0357 },
                "hours": [ { "open": "11:00", "close": "21:30" } ],
                "atmosphere": ["traditional"],
                "amenities": ["parking", "reservation"],
                "certifications": ["michelin-bib"],
                "address": "Seoul Gangnam-gu Hakdong-ro 305-3"
            },
            {
                "id": 8,
                "kind": "list",
                "name": "Late night eats",
                "category": "bar",
                "price": 3,
                "rating": 4.1,
                "location": { "lat": 37.5443, "lng": 127.0557 }
            }
        ]"#;
        let path = std::env::temp_dir().join(format!("catalog-load-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = Catalog::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 2);
        let first = catalog.get(7).unwrap();
        assert_eq!(first.price, PriceTier::Moderate);
        assert_eq!(first.hours.shifts.len(), 1);
        assert!(first.amenities.contains(&Amenity::Parking));
        assert_eq!(first.kind, EntityKind::Restaurant);

        let list = catalog.get(8).unwrap();
        assert_eq!(list.kind, EntityKind::List);
        assert!(list.hours.shifts.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load_from_file(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
