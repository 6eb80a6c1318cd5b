use crate::error::{BfResult, BootForgeError};
use std::ffi::OsStr;
use std::io;
use std::process::Command;
use tracing::info;

/// Runs one external-tool step. A missing binary and a nonzero exit both
/// abort the build with the step's description attached.
pub fn run_step(desc: &str, cmd: &mut Command) -> BfResult<()> {
    info!("==> {desc}");

    let status = cmd.status().map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => BootForgeError::ToolNotFound(display(cmd.get_program())),
        _ => BootForgeError::Io(err),
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(BootForgeError::StepFailed {
            desc: desc.to_string(),
            code: status.code(),
        })
    }
}

fn display(value: &OsStr) -> String {
    value.to_string_lossy().to_string()
}
