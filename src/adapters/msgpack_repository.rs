//! MessagePack implementation of the value-function repository.
//!
//! Each team's value function lives in `dict_{team}.msgpack` inside the
//! repository directory.

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{
    Result, error::Error, ports::ValueFunctionRepository, types::TeamName,
    value_function::ValueFunction,
};

/// Number of write-and-verify attempts before a save gives up
pub const SAVE_ATTEMPTS: usize = 5;

const EXTENSION: &str = "msgpack";

/// MessagePack-based value-function repository.
///
/// `save` writes the file and immediately loads it back; if either step
/// fails it tries again, up to [`SAVE_ATTEMPTS`] times, and then returns the
/// last error.
///
/// # Examples
///
/// ```no_run
/// use wild_tictactoe::{
///     adapters::MsgPackRepository,
///     ports::ValueFunctionRepository,
///     types::TeamName,
///     value_function::ValueFunction,
/// };
///
/// let repo = MsgPackRepository::new("trained");
/// let team = TeamName::new("Memes")?;
/// repo.save(&ValueFunction::new(), &team)?;
/// let loaded = repo.load(&team)?;
/// # Ok::<(), wild_tictactoe::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MsgPackRepository {
    dir: PathBuf,
}

impl MsgPackRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of `team`'s value function
    pub fn path_for(&self, team: &TeamName) -> PathBuf {
        self.dir.join(team.file_name(EXTENSION))
    }

    fn write(&self, values: &ValueFunction, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;

        rmp_serde::encode::write(&mut file, values).map_err(|e| Error::SerializationContext {
            operation: "serialize value function to MessagePack".to_string(),
            message: e.to_string(),
        })
    }
}

impl ValueFunctionRepository for MsgPackRepository {
    fn save(&self, values: &ValueFunction, team: &TeamName) -> Result<()> {
        let path = self.path_for(team);

        let mut attempt = 1;
        loop {
            let result = self.write(values, &path).and_then(|()| self.load(team));
            match result {
                Ok(_) => {
                    debug!(
                        %team,
                        path = %path.display(),
                        entries = values.len(),
                        "value function saved"
                    );
                    return Ok(());
                }
                Err(err) if attempt < SAVE_ATTEMPTS => {
                    warn!(
                        %team,
                        attempt,
                        error = %err,
                        "saving value function failed, retrying"
                    );
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn load(&self, team: &TeamName) -> Result<ValueFunction> {
        let path = self.path_for(team);
        if !path.exists() {
            return Err(Error::ValueFunctionNotFound {
                team: team.to_string(),
                path: path.display().to_string(),
            });
        }

        let file = File::open(&path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        rmp_serde::decode::from_read(&file).map_err(|e| Error::SerializationContext {
            operation: "deserialize value function from MessagePack".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::tictactoe::{Board, Counter, Move};

    #[test]
    fn test_msgpack_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = MsgPackRepository::new(temp_dir.path());
        let team = TeamName::new("Memes").unwrap();

        let mut values = ValueFunction::with_default(0.1);
        let board = Board::new().with_move(Move::new(4, Counter::X)).unwrap();
        values.set(&board, 0.75);

        repo.save(&values, &team).expect("Failed to save");
        assert!(temp_dir.path().join("dict_Memes.msgpack").exists());

        let loaded = repo.load(&team).expect("Failed to load");
        assert_eq!(loaded, values);
        assert_eq!(repo.dir(), temp_dir.path());
    }

    #[test]
    fn test_load_missing_team() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = MsgPackRepository::new(temp_dir.path());
        let team = TeamName::new("ghost").unwrap();

        let err = repo.load(&team).unwrap_err();
        assert!(err.to_string().contains("dict_ghost.msgpack"));
    }

    #[test]
    fn test_save_into_missing_directory_fails_after_retries() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = MsgPackRepository::new(temp_dir.path().join("does/not/exist"));
        let team = TeamName::new("Memes").unwrap();

        let err = repo.save(&ValueFunction::new(), &team).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = MsgPackRepository::new(temp_dir.path());
        let team = TeamName::new("Memes").unwrap();
        std::fs::write(repo.path_for(&team), b"not msgpack").unwrap();

        assert!(matches!(
            repo.load(&team),
            Err(Error::SerializationContext { .. })
        ));
    }
}
