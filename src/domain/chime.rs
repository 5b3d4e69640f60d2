use anyhow::Result;

/// Best-effort notification cue played when a command finishes.
///
/// Callers ignore failures; an implementation may fail freely.
#[cfg_attr(test, mockall::automock)]
pub trait Chime: Send {
    fn ring(&mut self) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SilentChime;

impl Chime for SilentChime {
    fn ring(&mut self) -> Result<()> {
        Ok(())
    }
}
