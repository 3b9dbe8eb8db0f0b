use std::ffi::OsStr;
use std::process::{Child, Command, Output, Stdio};

/// Run the binary to completion with logging limited to errors.
///
/// # Errors
///
/// Returns an error if the binary path is unknown or the process cannot be spawned.
pub fn run_fakehdrs<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = fakehdrs_bin()?;
    Command::new(bin)
        .args(args)
        .env("FAKEHDRS_LOG", "error")
        .output()
        .map_err(|err| format!("run fakehdrs failed: {}", err))
}

/// Spawn the binary with stdout piped so the caller controls the reader.
///
/// # Errors
///
/// Returns an error if the binary path is unknown or the process cannot be spawned.
pub fn spawn_fakehdrs<I, S>(args: I) -> Result<Child, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = fakehdrs_bin()?;
    Command::new(bin)
        .args(args)
        .env("FAKEHDRS_LOG", "off")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| format!("spawn fakehdrs failed: {}", err))
}

/// Split text output into request blocks.
#[must_use]
pub fn request_blocks(stdout: &str) -> Vec<Vec<&str>> {
    stdout
        .split_terminator("\n\n")
        .map(|block| block.lines().collect())
        .collect()
}

fn fakehdrs_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_fakehdrs").map_or_else(
        || Err("CARGO_BIN_EXE_fakehdrs missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
