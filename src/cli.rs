use clap::Parser;

use crate::program::Program;
use crate::rom::DEFAULT_OUTPUT;

/// Generate a 64K test ROM image for a 6502 computer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Program to place at the start of the ROM.
    #[arg(short, long, value_enum, default_value_t = Program::default())]
    pub program: Program,

    /// Path of the ROM image to write.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: std::path::PathBuf,
}
