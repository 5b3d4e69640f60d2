use crate::domain::chime::Chime;
use anyhow::Result;
use std::io::Write;

/// Rings the terminal bell (BEL) on stdout.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl Chime for TerminalBell {
    fn ring(&mut self) -> Result<()> {
        let mut stdout = std::io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        Ok(())
    }
}
