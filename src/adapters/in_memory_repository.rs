//! In-memory value-function repository for testing.
//!
//! Stores encoded value functions in a shared map, so tests never touch the
//! file system.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{
    Result, error::Error, ports::ValueFunctionRepository, types::TeamName,
    value_function::ValueFunction,
};

/// In-memory repository for testing.
///
/// # Examples
///
/// ```
/// use wild_tictactoe::{
///     adapters::InMemoryRepository,
///     ports::ValueFunctionRepository,
///     types::TeamName,
///     value_function::ValueFunction,
/// };
///
/// let repo = InMemoryRepository::new();
/// let team = TeamName::new("Memes")?;
///
/// repo.save(&ValueFunction::new(), &team)?;
/// let loaded = repo.load(&team)?;
/// assert!(loaded.is_empty());
/// # Ok::<(), wild_tictactoe::Error>(())
/// ```
///
/// # Thread Safety
///
/// Clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<TeamName, Vec<u8>>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<TeamName, Vec<u8>>> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of teams with a stored value function
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    pub fn contains(&self, team: &TeamName) -> bool {
        self.storage().contains_key(team)
    }

    pub fn clear(&self) {
        self.storage().clear();
    }
}

impl ValueFunctionRepository for InMemoryRepository {
    fn save(&self, values: &ValueFunction, team: &TeamName) -> Result<()> {
        let bytes = rmp_serde::to_vec(values).map_err(|e| Error::SerializationContext {
            operation: "serialize value function for in-memory storage".to_string(),
            message: e.to_string(),
        })?;

        self.storage().insert(team.clone(), bytes);
        Ok(())
    }

    fn load(&self, team: &TeamName) -> Result<ValueFunction> {
        let storage = self.storage();
        let bytes = storage
            .get(team)
            .ok_or_else(|| Error::ValueFunctionNotFound {
                team: team.to_string(),
                path: "<memory>".to_string(),
            })?;

        rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
            operation: "deserialize value function from in-memory storage".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Board, Counter, Move};

    fn team(name: &str) -> TeamName {
        TeamName::new(name).unwrap()
    }

    #[test]
    fn test_in_memory_save_and_load() {
        let repo = InMemoryRepository::new();
        let mut values = ValueFunction::new();
        let board = Board::new().with_move(Move::new(0, Counter::X)).unwrap();
        values.set(&board, -0.5);

        assert_eq!(repo.count(), 0);
        repo.save(&values, &team("alpha")).unwrap();
        assert!(repo.contains(&team("alpha")));

        let loaded = repo.load(&team("alpha")).unwrap();
        assert_eq!(loaded, values);
    }

    #[test]
    fn test_load_missing_team() {
        let repo = InMemoryRepository::new();
        assert!(matches!(
            repo.load(&team("nobody")),
            Err(Error::ValueFunctionNotFound { .. })
        ));
    }

    #[test]
    fn test_clone_shares_storage() {
        let repo1 = InMemoryRepository::new();
        let repo2 = repo1.clone();

        repo1.save(&ValueFunction::new(), &team("shared")).unwrap();
        assert!(repo2.load(&team("shared")).is_ok());

        repo2.clear();
        assert_eq!(repo1.count(), 0);
    }
}
