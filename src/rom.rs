use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::program::Program;

/// The total size of the ROM image.
pub const ROM_SIZE: usize = 1028 * 64;
/// Value of every byte that is not patched; the 6502 NOP opcode.
pub const FILL_BYTE: u8 = 0xEA;
/// Location of the little-endian reset vector.
pub const RESET_VECTOR: usize = 0xFFFC;
/// Memory location in the ROM for the start of programs.
pub const PROGRAM_START: usize = 0x0000;
/// File written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "test.bin";

/// A 6502 ROM image.
///
/// The image is filled with [`FILL_BYTE`] on creation. Programs are loaded
/// at [`PROGRAM_START`] and the CPU finds its entry point through the two
/// bytes at [`RESET_VECTOR`].
#[derive(Debug)]
pub struct Rom {
    data: Vec<u8>,
}

impl Rom {
    pub fn new() -> Self {
        Rom {
            data: vec![FILL_BYTE; ROM_SIZE],
        }
    }

    /// Create an image that starts executing `program` on reset.
    pub fn build(program: Program) -> Self {
        let mut rom = Rom::new();
        rom.set_reset_vector(PROGRAM_START as u16);

        info!(
            "Loading program {} into ROM (len: {})",
            program.name(),
            program.bytes().len()
        );
        rom.load(program.bytes());

        rom
    }

    /// Point the reset vector at `addr`.
    pub fn set_reset_vector(&mut self, addr: u16) {
        debug!("Reset vector: {:#06x}", addr);
        self.data[RESET_VECTOR..RESET_VECTOR + 2].copy_from_slice(&addr.to_le_bytes());
    }

    /// Copy a program into the ROM, starting at [`PROGRAM_START`].
    ///
    /// # Arguments
    ///
    /// * `program` - Machine code, must end before [`RESET_VECTOR`].
    pub fn load(&mut self, program: &[u8]) {
        debug_assert!(
            program.len() <= RESET_VECTOR - PROGRAM_START,
            "Program overlaps the reset vector (len: {})",
            program.len()
        );
        self.data[PROGRAM_START..PROGRAM_START + program.len()].copy_from_slice(program);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Write the image to `path`, replacing any existing file.
    ///
    /// The image goes to a new temporary file next to `path` first and is
    /// renamed into place once it is fully on disk, so a failed write never
    /// leaves a truncated image at `path`.
    pub fn write(&self, path: &Path) -> io::Result<()> {
        self.write_via(path, &temp_path(path, rand::random()))
    }

    fn write_via(&self, path: &Path, tmp: &Path) -> io::Result<()> {
        if let Err(err) = self.write_new(tmp) {
            // Only a file we created may be removed.
            if err.kind() != io::ErrorKind::AlreadyExists {
                remove_temp(tmp);
            }
            return Err(err);
        }

        debug!("Renaming {} to {}", tmp.display(), path.display());
        if let Err(err) = fs::rename(tmp, path) {
            remove_temp(tmp);
            return Err(err);
        }

        info!("Wrote {} bytes to {}", self.data.len(), path.display());
        Ok(())
    }

    fn write_new(&self, path: &Path) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?;
        file.write_all(self.as_bytes())?;
        file.sync_all()
    }
}

/// A sibling of `path` named `<file name>.<tag>.tmp`.
fn temp_path(path: &Path, tag: u32) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| DEFAULT_OUTPUT.into());
    name.push(format!(".{:08x}.tmp", tag));
    path.with_file_name(name)
}

fn remove_temp(tmp: &Path) {
    if let Err(err) = fs::remove_file(tmp) {
        if err.kind() != io::ErrorKind::NotFound {
            warn!("Failed to remove {}: {}", tmp.display(), err);
        }
    }
}
