use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

/// One renderable piece of command output.
///
/// Blocks are authored in TOML with a `kind` tag, e.g.
/// `{ kind = "bullets", items = ["React", "Node.js"] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Title { text: String },
    Heading { text: String },
    Text { text: String },
    Bullets { items: Vec<String> },
    Fields { fields: Vec<Field> },
    Quote { text: String, source: String },
    Error { text: String },
    Hint { text: String },
    Blank,
}

/// A structured document produced by a command. The console never looks
/// inside it; only the presentation layer does.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Output(Vec<Block>);

impl Output {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The output shown for a command name nobody registered.
    #[must_use]
    pub fn not_found(command: &str) -> Self {
        Self::new()
            .push(Block::Error {
                text: format!("Command not found: {command}"),
            })
            .hint("Type 'help' to see available commands")
    }

    #[must_use]
    pub fn push(mut self, block: Block) -> Self {
        self.0.push(block);
        self
    }

    #[must_use]
    pub fn title(self, text: impl Into<String>) -> Self {
        self.push(Block::Title { text: text.into() })
    }

    #[must_use]
    pub fn heading(self, text: impl Into<String>) -> Self {
        self.push(Block::Heading { text: text.into() })
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.push(Block::Text { text: text.into() })
    }

    #[must_use]
    pub fn bullets<I, S>(self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Block::Bullets {
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    #[must_use]
    pub fn fields<I, L, V>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<String>,
        V: Into<String>,
    {
        self.push(Block::Fields {
            fields: fields
                .into_iter()
                .map(|(label, value)| Field {
                    label: label.into(),
                    value: value.into(),
                })
                .collect(),
        })
    }

    #[must_use]
    pub fn quote(self, text: impl Into<String>, source: impl Into<String>) -> Self {
        self.push(Block::Quote {
            text: text.into(),
            source: source.into(),
        })
    }

    #[must_use]
    pub fn hint(self, text: impl Into<String>) -> Self {
        self.push(Block::Hint { text: text.into() })
    }

    #[must_use]
    pub fn blank(self) -> Self {
        self.push(Block::Blank)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenated plain text of every block. Used by tests and logs.
    pub fn plain_text(&self) -> String {
        let mut out = Vec::new();
        for block in &self.0 {
            match block {
                Block::Title { text }
                | Block::Heading { text }
                | Block::Text { text }
                | Block::Error { text }
                | Block::Hint { text } => out.push(text.clone()),
                Block::Bullets { items } => out.extend(items.iter().cloned()),
                Block::Fields { fields } => {
                    out.extend(fields.iter().map(|f| format!("{}: {}", f.label, f.value)));
                }
                Block::Quote { text, source } => out.push(format!("\"{text}\" - {source}")),
                Block::Blank => {}
            }
        }
        out.join("\n")
    }
}

impl From<Vec<Block>> for Output {
    fn from(blocks: Vec<Block>) -> Self {
        Self(blocks)
    }
}
