use super::tables::TileTables;
use bevy::prelude::*;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

/// Magic number for tile table files ("TTBL" in ASCII)
const MAGIC_NUMBER: [u8; 4] = [b'T', b'T', b'B', b'L'];

/// Current table file format version
const VERSION: u16 = 1;

/// Bytes around the payload: magic, version, payload length and checksum
const FRAME_SIZE: u64 = 4 + 2 + 4 + 4;

/// Error type for table file operations
#[derive(Debug)]
pub enum TableFileError {
    Io(io::Error),
    InvalidMagicNumber,
    InvalidVersion(u16),
    InvalidChecksum,
    InvalidPayloadLength(u64),
    Encode(bincode::Error),
    Decode(bincode::Error),
}

impl From<io::Error> for TableFileError {
    fn from(err: io::Error) -> Self {
        TableFileError::Io(err)
    }
}

impl std::fmt::Display for TableFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableFileError::Io(e) => write!(f, "IO error: {}", e),
            TableFileError::InvalidMagicNumber => write!(f, "Invalid magic number"),
            TableFileError::InvalidVersion(v) => write!(f, "Invalid version: {}", v),
            TableFileError::InvalidChecksum => write!(f, "Checksum mismatch"),
            TableFileError::InvalidPayloadLength(len) => {
                write!(f, "Invalid payload length: {}", len)
            }
            TableFileError::Encode(e) => write!(f, "Failed to encode tables: {}", e),
            TableFileError::Decode(e) => write!(f, "Failed to decode tables: {}", e),
        }
    }
}

impl std::error::Error for TableFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableFileError::Io(e) => Some(e),
            TableFileError::Encode(e) | TableFileError::Decode(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

/// Save tile tables to disk in binary format
pub fn save_tables<P: AsRef<Path>>(tables: &TileTables, path: P) -> Result<(), TableFileError> {
    // Ensure directory exists
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = bincode::serialize(tables).map_err(TableFileError::Encode)?;
    let payload_len = encode_payload_len(payload.len())?;

    let mut file = File::create(path)?;

    // Write header
    file.write_all(&MAGIC_NUMBER)?;
    file.write_all(&VERSION.to_le_bytes())?;
    file.write_all(&payload_len.to_le_bytes())?;

    file.write_all(&payload)?;

    // Checksum covers the payload only
    let checksum = crc32fast::hash(&payload);
    file.write_all(&checksum.to_le_bytes())?;

    file.sync_all()?;
    Ok(())
}

/// Payload length as stored in the header
fn encode_payload_len(len: usize) -> Result<u32, TableFileError> {
    u32::try_from(len).map_err(|_| TableFileError::InvalidPayloadLength(len as u64))
}

/// Load tile tables from disk
pub fn load_tables<P: AsRef<Path>>(path: P) -> Result<TileTables, TableFileError> {
    let mut file = File::open(path)?;

    // Read and verify magic number
    let mut magic = [0u8; 4];
    file.read_exact(&mut magic)?;
    if magic != MAGIC_NUMBER {
        return Err(TableFileError::InvalidMagicNumber);
    }

    // Read and verify version
    let mut version_bytes = [0u8; 2];
    file.read_exact(&mut version_bytes)?;
    let version = u16::from_le_bytes(version_bytes);
    if version != VERSION {
        return Err(TableFileError::InvalidVersion(version));
    }

    let mut len_bytes = [0u8; 4];
    file.read_exact(&mut len_bytes)?;
    let payload_len = u32::from_le_bytes(len_bytes) as u64;

    // The declared length must fit in what is left of the file
    let file_len = file.metadata()?.len();
    if payload_len > file_len.saturating_sub(FRAME_SIZE) {
        return Err(TableFileError::InvalidPayloadLength(payload_len));
    }

    let mut payload = vec![0u8; payload_len as usize];
    file.read_exact(&mut payload)?;

    // Read and verify checksum
    let mut checksum_bytes = [0u8; 4];
    file.read_exact(&mut checksum_bytes)?;
    let expected_checksum = u32::from_le_bytes(checksum_bytes);
    if crc32fast::hash(&payload) != expected_checksum {
        return Err(TableFileError::InvalidChecksum);
    }

    bincode::deserialize(&payload).map_err(TableFileError::Decode)
}

/// Check if a table file exists
pub fn tables_exist<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// Load tables from `path`, falling back to the built-in set when the file is
/// missing or unreadable
pub fn load_tables_or_default<P: AsRef<Path>>(path: P) -> TileTables {
    let path = path.as_ref();
    if !tables_exist(path) {
        info!("No tile table file at {:?}, using built-in tables", path);
        return TileTables::builtin();
    }

    match load_tables(path) {
        Ok(tables) => {
            info!("Loaded {} tile types from {:?}", tables.len(), path);
            tables
        }
        Err(e) => {
            warn!("Failed to load tile tables {:?}: {}, using built-in tables", path, e);
            TileTables::builtin()
        }
    }
}
