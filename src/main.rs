mod cli;
mod program;
mod rom;

use anyhow::{Context, Result};
use clap::Parser;
use rom::Rom;

fn main() -> Result<()> {
    // Start logger
    env_logger::init();

    // Read command line arguments
    let args = cli::Args::parse();

    run(args)
}

/// Build the image for the selected program and write it out.
fn run(args: cli::Args) -> Result<()> {
    let rom = Rom::build(args.program);
    rom.write(&args.output)
        .with_context(|| format!("Failed to write ROM image to {}", args.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::Program;
    use crate::rom::{DEFAULT_OUTPUT, ROM_SIZE};
    use std::ffi::OsString;

    #[test]
    fn test_run_writes_default_output() {
        let dir = std::env::temp_dir().join(format!("romgen_run_{:x}", rand::random::<u64>()));
        std::fs::create_dir_all(&dir).unwrap();

        // The only test that depends on the working directory.
        let cwd = std::env::current_dir().unwrap();
        std::env::set_current_dir(&dir).unwrap();
        let result = run(cli::Args::parse_from(["romgen-6502"]));
        std::env::set_current_dir(cwd).unwrap();

        result.unwrap();
        let written = std::fs::read(dir.join(DEFAULT_OUTPUT)).unwrap();
        assert_eq!(written.len(), ROM_SIZE);
        assert_eq!(written, Rom::build(Program::AddOnePlusTwo).as_bytes());

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_run_reports_destination_on_failure() {
        let output = std::env::temp_dir()
            .join(format!("romgen_missing_{:x}", rand::random::<u64>()))
            .join(DEFAULT_OUTPUT);
        let args = cli::Args::parse_from([
            OsString::from("romgen-6502"),
            OsString::from("--output"),
            output.clone().into_os_string(),
        ]);

        let err = run(args).unwrap_err();
        let message = format!("{:#}", err);

        assert!(message.starts_with("Failed to write ROM image to"));
        assert!(message.contains(&output.display().to_string()));
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }
}
