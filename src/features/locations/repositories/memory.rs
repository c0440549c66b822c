use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::locations::models::{Location, NewLocation};
use crate::features::locations::repositories::LocationRepository;

/// In-memory gateway used by service and router tests.
#[derive(Default)]
pub struct InMemoryLocationRepository {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    next_id: i32,
    rows: BTreeMap<i32, Location>,
}

impl InMemoryLocationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn insert(&self, new_location: NewLocation) -> Result<Location> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let location = Location {
            id: state.next_id,
            name: new_location.name,
            category: new_location.category,
            coordinate: new_location.coordinate,
        };
        state.rows.insert(location.id, location.clone());
        Ok(location)
    }

    async fn list_all(&self) -> Result<Vec<Location>> {
        Ok(self.state.lock().unwrap().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Location>> {
        Ok(self.state.lock().unwrap().rows.get(&id).cloned())
    }

    async fn update(&self, location: &Location) -> Result<Option<Location>> {
        let mut state = self.state.lock().unwrap();
        match state.rows.get_mut(&location.id) {
            Some(row) => {
                *row = location.clone();
                Ok(Some(location.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        Ok(self.state.lock().unwrap().rows.remove(&id).is_some())
    }
}
