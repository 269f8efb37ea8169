use super::error::RosterError;
use crate::character::player::Player;
use crate::core::constants::AUTOSAVE_INTERVAL_SECONDS;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Identifies a roster file ("PQSIMRO1" in little-endian bytes).
pub const ROSTER_MAGIC: u64 = u64::from_le_bytes(*b"PQSIMRO1");

/// Every saved character, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Removes and returns the player, or `None` if the id is unknown.
    pub fn remove_player(&mut self, id: Uuid) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(index))
    }

    pub fn find(&self, id: Uuid) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn find_mut(&mut self, id: Uuid) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Reads and writes the roster with a checksummed binary format.
#[derive(Debug)]
pub struct RosterStore {
    path: PathBuf,
    last_save: i64,
}

impl RosterStore {
    /// Store at the platform config directory, e.g. `~/.config/pqsim/roster.dat`.
    pub fn new() -> Result<Self, RosterError> {
        let project_dirs = ProjectDirs::from("", "", "pqsim").ok_or(RosterError::NoConfigDir)?;
        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(Self::at(config_dir.join("roster.dat")))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_save: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the roster, or an empty one if nothing has been saved yet.
    pub fn load(&self) -> Result<Roster, RosterError> {
        let mut file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::warn!("No roster at {}, starting empty", self.path.display());
                return Ok(Roster::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut magic_bytes = [0u8; 8];
        file.read_exact(&mut magic_bytes)?;
        let magic = u64::from_le_bytes(magic_bytes);
        if magic != ROSTER_MAGIC {
            return Err(RosterError::BadMagic {
                expected: ROSTER_MAGIC,
                found: magic,
            });
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let computed = checksum(&magic_bytes, &length_bytes, &data);
        if stored_checksum != computed {
            return Err(RosterError::ChecksumMismatch);
        }

        bincode::deserialize(&data).map_err(RosterError::Decode)
    }

    /// Writes `<name>.new`, keeps the previous file as `<name>.old`, then
    /// moves the new file into place.
    pub fn save(&mut self, roster: &Roster) -> Result<(), RosterError> {
        let data = bincode::serialize(roster).map_err(RosterError::Encode)?;
        let length_bytes = (data.len() as u32).to_le_bytes();
        let magic_bytes = ROSTER_MAGIC.to_le_bytes();
        let digest = checksum(&magic_bytes, &length_bytes, &data);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let new_path = self.sibling("new");
        {
            let mut file = fs::File::create(&new_path)?;
            file.write_all(&magic_bytes)?;
            file.write_all(&length_bytes)?;
            file.write_all(&data)?;
            file.write_all(&digest)?;
            file.sync_all()?;
        }

        if self.path.exists() {
            fs::rename(&self.path, self.sibling("old"))?;
        }
        fs::rename(&new_path, &self.path)?;

        self.last_save = chrono::Utc::now().timestamp();
        log::debug!(
            "Saved {} player(s) to {}",
            roster.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Saves if the autosave interval has passed since the last save.
    /// Returns whether a save happened.
    pub fn save_periodically(&mut self, roster: &Roster) -> Result<bool, RosterError> {
        let now = chrono::Utc::now().timestamp();
        if now - self.last_save < AUTOSAVE_INTERVAL_SECONDS {
            return Ok(false);
        }
        self.save(roster)?;
        Ok(true)
    }

    fn sibling(&self, extension: &str) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".");
        name.push(extension);
        PathBuf::from(name)
    }
}

fn checksum(magic: &[u8], length: &[u8], data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(magic);
    hasher.update(length);
    hasher.update(data);
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    digest
}
