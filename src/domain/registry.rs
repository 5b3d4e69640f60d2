use crate::domain::output::Output;
use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;

pub type Producer = Arc<dyn Fn() -> Output + Send + Sync>;

/// Side request a command makes of the surrounding app once its output
/// is resolved. The console hands these back; it never acts on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewHook {
    ShowDesktop,
    ShowTerminal,
    Home,
    Quit,
}

#[derive(Clone)]
pub struct CommandEntry {
    pub name: String,
    pub description: String,
    produce: Producer,
    pub hook: Option<ViewHook>,
}

impl CommandEntry {
    pub fn new<F>(name: &str, description: &str, produce: F) -> Self
    where
        F: Fn() -> Output + Send + Sync + 'static,
    {
        Self {
            name: name.trim().to_lowercase(),
            description: description.to_string(),
            produce: Arc::new(produce),
            hook: None,
        }
    }

    /// A command whose output never changes.
    pub fn fixed(name: &str, description: &str, output: Output) -> Self {
        Self::new(name, description, move || output.clone())
    }

    #[must_use]
    pub fn with_hook(mut self, hook: ViewHook) -> Self {
        self.hook = Some(hook);
        self
    }

    pub fn produce(&self) -> Output {
        (self.produce)()
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("hook", &self.hook)
            .finish()
    }
}

/// Static table of available commands, in registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<CommandEntry>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Case-insensitive exact lookup.
    pub fn lookup(&self, name: &str) -> Option<&CommandEntry> {
        let wanted = name.trim().to_lowercase();
        self.entries.iter().find(|e| e.name == wanted)
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<CommandEntry>,
    help: Option<String>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn register(mut self, entry: CommandEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Put a `help` command first whose output lists every command,
    /// itself included.
    #[must_use]
    pub fn with_help(mut self, description: &str) -> Self {
        self.help = Some(description.to_string());
        self
    }

    pub fn build(self) -> Result<Registry> {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        if let Some(description) = &self.help {
            entries.push(CommandEntry::fixed("help", description, Output::new()));
        }
        entries.extend(self.entries);

        for (i, entry) in entries.iter().enumerate() {
            if entry.name.is_empty() || entry.name.chars().any(char::is_whitespace) {
                return Err(Error::InvalidCommandName(entry.name.clone()));
            }
            if entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(Error::DuplicateCommand(entry.name.clone()));
            }
        }

        if let Some(description) = self.help {
            let listing = help_output(&entries);
            entries[0] = CommandEntry::fixed("help", &description, listing);
        }

        Ok(Registry { entries })
    }
}

fn help_output(entries: &[CommandEntry]) -> Output {
    Output::new()
        .title("Available Commands")
        .fields(
            entries
                .iter()
                .map(|e| (e.name.clone(), e.description.clone())),
        )
        .blank()
        .hint("Up/Down for command history, Tab for autocompletion. Try 'easter' for a surprise!")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Registry {
        Registry::builder()
            .with_help("Show available commands")
            .register(CommandEntry::fixed(
                "about",
                "Who I am",
                Output::new().text("hello"),
            ))
            .register(CommandEntry::fixed("Skills", "What I use", Output::new()))
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_is_case_insensitive_and_exact() {
        let registry = sample();
        assert!(registry.lookup("ABOUT").is_some());
        assert!(registry.lookup("skills").is_some());
        assert!(registry.lookup("ab").is_none());
        assert!(registry.lookup("about me").is_none());
    }

    #[test]
    fn names_keep_insertion_order_with_help_first() {
        let registry = sample();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["help", "about", "skills"]);
    }

    #[test]
    fn help_lists_every_command() {
        let registry = sample();
        let help = registry.lookup("help").unwrap().produce();
        let text = help.plain_text();
        assert!(text.contains("help: Show available commands"));
        assert!(text.contains("about: Who I am"));
        assert!(text.contains("skills: What I use"));
    }

    #[test]
    fn duplicate_names_are_rejected_case_insensitively() {
        let err = Registry::builder()
            .register(CommandEntry::fixed("about", "a", Output::new()))
            .register(CommandEntry::fixed("About", "b", Output::new()))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateCommand(name) if name == "about"));
    }

    #[test]
    fn names_with_spaces_are_rejected() {
        let err = Registry::builder()
            .register(CommandEntry::fixed("about me", "a", Output::new()))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCommandName(_)));
    }

    #[test]
    fn producer_runs_on_every_call() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let registry = Registry::builder()
            .register(CommandEntry::new("tick", "count", move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Output::new()
            }))
            .build()
            .unwrap();

        let entry = registry.lookup("tick").unwrap();
        entry.produce();
        entry.produce();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
