use std::fmt;
use thiserror::Error;

/// The key dimension a caller supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Mood,
    FaceType,
    KittenType,
    Pose,
    Action,
    CatType,
}

impl KeyKind {
    pub fn label(self) -> &'static str {
        match self {
            KeyKind::Mood => "mood",
            KeyKind::FaceType => "face type",
            KeyKind::KittenType => "kitten type",
            KeyKind::Pose => "pose",
            KeyKind::Action => "action",
            KeyKind::CatType => "cat type",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            KeyKind::Mood => "moods",
            KeyKind::Pose => "poses",
            KeyKind::Action => "actions",
            KeyKind::FaceType | KeyKind::KittenType | KeyKind::CatType => "types",
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown {}: {}. Available {}: {}", .kind.label(), .input, .kind.plural(), .valid.join(", "))]
    UnknownKey {
        kind: KeyKind,
        input: String,
        valid: Vec<String>,
    },
}

impl CatalogError {
    pub fn unknown_key<'a>(
        kind: KeyKind,
        input: impl Into<String>,
        valid: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        CatalogError::UnknownKey {
            kind,
            input: input.into(),
            valid: valid.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn kind(&self) -> KeyKind {
        match self {
            CatalogError::UnknownKey { kind, .. } => *kind,
        }
    }

    /// The caller's original text, before normalization.
    pub fn input(&self) -> &str {
        match self {
            CatalogError::UnknownKey { input, .. } => input,
        }
    }

    pub fn valid(&self) -> &[String] {
        match self {
            CatalogError::UnknownKey { valid, .. } => valid,
        }
    }
}
