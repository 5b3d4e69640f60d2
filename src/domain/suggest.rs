use crate::domain::registry::Registry;

/// What Tab should do with a set of matching names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    None,
    /// Several matches; extend the input up to their shared prefix.
    Partial(String),
    /// Exactly one match; replace the input with it.
    Complete(String),
}

/// Registry names that start with `partial`, ignoring case, in
/// registration order. Empty for blank input.
pub fn suggest(registry: &Registry, partial: &str) -> Vec<String> {
    let needle = partial.trim_start().to_lowercase();
    if needle.trim().is_empty() {
        return Vec::new();
    }
    registry
        .names()
        .filter(|name| name.to_lowercase().starts_with(&needle))
        .map(str::to_string)
        .collect()
}

/// Longest string that prefixes every name. Empty for an empty set.
pub fn common_prefix<S: AsRef<str>>(names: &[S]) -> String {
    let Some((first, rest)) = names.split_first() else {
        return String::new();
    };

    let mut prefix = first.as_ref();
    for name in rest {
        let name = name.as_ref();
        let shared = prefix
            .char_indices()
            .zip(name.chars())
            .find(|((_, a), b)| a != b)
            .map_or_else(|| prefix.len().min(name.len()), |((i, _), _)| i);
        prefix = &prefix[..shared];
        if prefix.is_empty() {
            break;
        }
    }
    prefix.to_string()
}

pub fn completion<S: AsRef<str>>(names: &[S]) -> Completion {
    match names {
        [] => Completion::None,
        [only] => Completion::Complete(only.as_ref().to_string()),
        _ => Completion::Partial(common_prefix(names)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::output::Output;
    use crate::domain::registry::CommandEntry;

    fn registry(names: &[&str]) -> Registry {
        names
            .iter()
            .fold(Registry::builder(), |b, name| {
                b.register(CommandEntry::fixed(name, "", Output::new()))
            })
            .build()
            .unwrap()
    }

    #[test]
    fn blank_input_suggests_nothing() {
        let registry = registry(&["about", "skills"]);
        assert!(suggest(&registry, "").is_empty());
        assert!(suggest(&registry, "   ").is_empty());
    }

    #[test]
    fn prefix_matches_are_complete_and_ordered() {
        let registry = registry(&["help", "about", "home", "achievements", "availability"]);
        assert_eq!(
            suggest(&registry, "a"),
            vec!["about", "achievements", "availability"]
        );
        assert_eq!(suggest(&registry, "H"), vec!["help", "home"]);
        assert!(suggest(&registry, "z").is_empty());
    }

    #[test]
    fn every_suggestion_starts_with_the_input() {
        let registry = registry(&["help", "about", "home", "history", "hobby"]);
        for partial in ["h", "ho", "hom", "HIS", "a", "x"] {
            let found = suggest(&registry, partial);
            let lower = partial.to_lowercase();
            for name in &found {
                assert!(name.starts_with(&lower));
            }
            let expected = registry.names().filter(|n| n.starts_with(&lower)).count();
            assert_eq!(found.len(), expected);
        }
    }

    #[test]
    fn common_prefix_cases() {
        assert_eq!(common_prefix(&["help"]), "help");
        assert_eq!(common_prefix(&["help", "home"]), "h");
        assert_eq!(common_prefix(&["achievements", "availability"]), "a");
        assert_eq!(common_prefix(&["verse", "version"]), "vers");
        assert_eq!(common_prefix(&["tool", "tools"]), "tool");
        assert_eq!(common_prefix(&["about", "skills"]), "");
        assert_eq!(common_prefix::<&str>(&[]), "");
    }

    #[test]
    fn completion_signals_single_match() {
        assert_eq!(completion::<&str>(&[]), Completion::None);
        assert_eq!(
            completion(&["projects"]),
            Completion::Complete("projects".to_string())
        );
        assert_eq!(
            completion(&["help", "home"]),
            Completion::Partial("h".to_string())
        );
    }
}
