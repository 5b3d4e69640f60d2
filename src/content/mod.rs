pub mod builtins;
pub mod daily;
pub mod profile;

use crate::domain::console::CLEAR_COMMAND;
use crate::domain::output::Output;
use crate::domain::registry::{CommandEntry, Registry, RegistryBuilder, ViewHook};
use crate::error::Result;
use chrono::{Datelike, Local, NaiveDate};
use profile::{Profile, Quote, Section};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub user: String,
    pub host: String,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:~$", self.user, self.host)
    }
}

/// A profile turned into something the shell can run.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub registry: Registry,
    pub welcome: Output,
    pub prompt: Prompt,
    pub owner: String,
    pub role: String,
    pub location: String,
    pub verse_of_day: Option<Quote>,
}

pub fn assemble(profile: &Profile, today: NaiveDate) -> Result<Portfolio> {
    let (leading, trailing): (Vec<&Section>, Vec<&Section>) =
        profile.sections.iter().partition(|section| !section.after_shell);

    let identity = profile.identity.clone();
    let quotes = profile.daily.quotes.clone();
    let verses = profile.daily.verses.clone();
    let productivity = profile.productivity.clone();

    let builder = register_sections(
        Registry::builder().with_help("Show available commands"),
        &leading,
    )
    .register(CommandEntry::fixed(
        CLEAR_COMMAND,
        "Clear the terminal",
        Output::new(),
    ))
    .register(CommandEntry::new("date", "Show current date and time", || {
        builtins::date(Local::now())
    }))
    .register(CommandEntry::new(
        "whoami",
        "Display current user info",
        move || builtins::whoami(&identity),
    ))
    .register(CommandEntry::new(
        "quote",
        "Get daily inspirational quote",
        move || daily::quote_output(daily::pick(&quotes, Local::now().ordinal())),
    ))
    .register(CommandEntry::new("verse", "Get daily Bible verse", move || {
        daily::verse_output(daily::pick(&verses, Local::now().ordinal()))
    }))
    .register(CommandEntry::new(
        "productivity",
        "View daily productivity stats",
        move || builtins::productivity_now(&productivity),
    ));

    let registry = register_sections(builder, &trailing)
        .register(
            CommandEntry::fixed(
                "home",
                "Return to home/welcome screen",
                Output::new().text("Returning to home screen..."),
            )
            .with_hook(ViewHook::Home),
        )
        .register(
            CommandEntry::fixed(
                "mac",
                "Switch to desktop view",
                Output::new().text("Switching to desktop view..."),
            )
            .with_hook(ViewHook::ShowDesktop),
        )
        .register(
            CommandEntry::fixed(
                "terminal",
                "Switch back to terminal view",
                Output::new().text("Returning to terminal view..."),
            )
            .with_hook(ViewHook::ShowTerminal),
        )
        .register(
            CommandEntry::fixed("exit", "Leave the terminal", Output::new().text("Goodbye!"))
                .with_hook(ViewHook::Quit),
        )
        .build()?;

    let identity = &profile.identity;
    let welcome = if identity.welcome.is_empty() {
        builtins::default_welcome(identity)
    } else {
        identity.welcome.clone()
    };

    Ok(Portfolio {
        registry,
        welcome,
        prompt: Prompt {
            user: identity.user.clone(),
            host: identity.host.clone(),
        },
        owner: identity.name.clone(),
        role: identity.role.clone(),
        location: identity.location.clone(),
        verse_of_day: daily::pick(&profile.daily.verses, today.ordinal()).cloned(),
    })
}

fn register_sections(mut builder: RegistryBuilder, sections: &[&Section]) -> RegistryBuilder {
    for section in sections {
        builder = builder.register(CommandEntry::fixed(
            &section.name,
            &section.description,
            section.blocks.clone(),
        ));
    }
    builder
}
