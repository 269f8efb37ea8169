use thiserror::Error;

/// Errors from loading or saving the roster file.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode roster: {0}")]
    Encode(#[source] bincode::Error),

    #[error("Failed to decode roster: {0}")]
    Decode(#[source] bincode::Error),

    #[error("Invalid roster file: expected magic 0x{expected:016X}, found 0x{found:016X}")]
    BadMagic { expected: u64, found: u64 },

    #[error("Roster checksum verification failed")]
    ChecksumMismatch,

    #[error("Could not determine config directory")]
    NoConfigDir,
}
