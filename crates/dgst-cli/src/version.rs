//! # Version Command

use std::io::Write;

use anyhow::{Context, Result};

use crate::io::IoConfig;
use crate::{PROGRAM_NAME, VERSION};

/// Execute the version command. Prints nothing in quiet mode.
pub fn run_version(config: &IoConfig) -> Result<u8> {
    if config.quiet {
        return Ok(0);
    }
    let mut output = config.open_output()?;
    write_version(&mut output)?;
    output.flush().context("failed to flush output")?;
    Ok(0)
}

/// Write the version banner and license notice.
pub fn write_version<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    writeln!(out, "\n{PROGRAM_NAME} {VERSION}")?;
    writeln!(out, "Portable SHA-256 (FIPS 180-4) digest tool.")?;
    writeln!(out, "This is free software. You may redistribute copies of it")?;
    writeln!(out, "under the terms of the GNU General Public License,")?;
    writeln!(out, "version 2 or later <https://www.gnu.org/licenses/gpl.html>.")?;
    writeln!(out, "There is NO WARRANTY, to the extent permitted by law.")?;
    Ok(())
}
