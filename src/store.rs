//! In-memory repositories shared by the handlers.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use crate::models::{Comparison, FloorplanAnalysis, Project, Quotation, Requirement, StyleReport};

/// Entities stored by id.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Entity for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

impl_entity!(Project, Requirement, Quotation, Comparison, StyleReport, FloorplanAnalysis);

pub trait Repository<T: Entity>: Send + Sync {
    fn get(&self, id: &str) -> Option<T>;

    /// All entities in insertion order
    fn list(&self) -> Vec<T>;

    fn insert(&self, entity: T);

    /// Replace an existing entity, returning `false` when the id is unknown.
    fn update(&self, entity: T) -> bool;

    fn delete(&self, id: &str) -> Option<T>;

    /// Entities matching `predicate`, in insertion order.
    fn find(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        self.list().into_iter().filter(|e| predicate(e)).collect()
    }
}

/// Concurrent map keyed by id. A sequence number per entry keeps `list` in
/// insertion order.
pub struct InMemoryRepository<T> {
    entries: DashMap<String, (u64, T)>,
    sequence: AtomicU64,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            entries: DashMap::new(),
            sequence: AtomicU64::new(0),
        }
    }
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn get(&self, id: &str) -> Option<T> {
        self.entries.get(id).map(|entry| entry.1.clone())
    }

    fn list(&self) -> Vec<T> {
        let mut entries: Vec<(u64, T)> = self
            .entries
            .iter()
            .map(|entry| (entry.0, entry.1.clone()))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, entity)| entity).collect()
    }

    fn insert(&self, entity: T) {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        self.entries.insert(entity.id().to_string(), (seq, entity));
    }

    fn update(&self, entity: T) -> bool {
        match self.entries.get_mut(entity.id()) {
            Some(mut entry) => {
                entry.1 = entity;
                true
            }
            None => false,
        }
    }

    fn delete(&self, id: &str) -> Option<T> {
        self.entries.remove(id).map(|(_, (_, entity))| entity)
    }
}
