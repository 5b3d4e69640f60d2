//! Commands whose output is computed rather than read from the profile.

use crate::content::profile::{Identity, Productivity};
use crate::domain::output::Output;
use chrono::{DateTime, Local, Timelike};

pub fn date(now: DateTime<Local>) -> Output {
    Output::new().text(now.format("%A, %B %-d, %Y, %H:%M:%S").to_string())
}

pub fn whoami(identity: &Identity) -> Output {
    Output::new().text(format!(
        "{}@{}:~$ {} - {}",
        identity.user, identity.host, identity.name, identity.role
    ))
}

/// The figures are fabricated; only the status line depends on the clock.
pub fn productivity(productivity: &Productivity, hour: u32) -> Output {
    let (start, end) = productivity.work_hours;
    let active = (start..=end).contains(&hour);

    let out = Output::new()
        .title("Today's Productivity Dashboard")
        .fields(
            productivity
                .metrics
                .iter()
                .map(|m| (m.label.clone(), m.value.clone())),
        )
        .heading("Current Status");

    let out = if active {
        out.text("Active")
            .text("Currently in peak productivity hours. Ready to tackle complex challenges!")
    } else {
        out.text("Offline")
            .text("Outside working hours. Will respond to messages first thing tomorrow morning.")
    };
    out.hint("Productivity tracking helps optimize performance and keep work-life balance.")
}

pub fn productivity_now(productivity_cfg: &Productivity) -> Output {
    productivity(productivity_cfg, Local::now().hour())
}

pub fn default_welcome(identity: &Identity) -> Output {
    Output::new()
        .title(format!("Welcome to {}'s terminal!", identity.name))
        .text(format!("{}, {}", identity.role, identity.location))
        .blank()
        .hint("Type 'help' to see available commands")
}
