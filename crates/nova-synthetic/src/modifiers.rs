use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::SyntheticError;

/// Java modifier keywords.
///
/// [`Modifier::PackageLocal`] marks the absence of an access keyword; it is tracked like any
/// other modifier but never rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    PackageLocal,
    Static,
    Abstract,
    Final,
    Native,
    Synchronized,
    Strictfp,
    Transient,
    Volatile,
    Default,
}

impl Modifier {
    pub const ALL: [Modifier; 13] = [
        Modifier::Public,
        Modifier::Protected,
        Modifier::Private,
        Modifier::PackageLocal,
        Modifier::Static,
        Modifier::Abstract,
        Modifier::Final,
        Modifier::Native,
        Modifier::Synchronized,
        Modifier::Strictfp,
        Modifier::Transient,
        Modifier::Volatile,
        Modifier::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::PackageLocal => "packageLocal",
            Modifier::Static => "static",
            Modifier::Abstract => "abstract",
            Modifier::Final => "final",
            Modifier::Native => "native",
            Modifier::Synchronized => "synchronized",
            Modifier::Strictfp => "strictfp",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Default => "default",
        }
    }

    /// Whether the modifier is written out as a keyword.
    pub fn is_explicit(self) -> bool {
        self != Modifier::PackageLocal
    }
}

impl FromStr for Modifier {
    type Err = SyntheticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modifier::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| SyntheticError::UnknownModifier(s.to_string()))
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Annotation marker known only by its qualified name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SyntheticAnnotation {
    qualified_name: String,
}

impl SyntheticAnnotation {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
        }
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn short_name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }
}

impl fmt::Display for SyntheticAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.qualified_name)
    }
}

/// Ordered, append-only modifier and annotation list.
///
/// Duplicates are kept; rendering and equality only care about presence.
#[derive(Clone, Debug, Default)]
pub struct ModifierList {
    modifiers: Vec<Modifier>,
    annotations: Vec<SyntheticAnnotation>,
}

impl ModifierList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_modifier(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
    }

    pub fn add_modifiers(&mut self, modifiers: impl IntoIterator<Item = Modifier>) {
        self.modifiers.extend(modifiers);
    }

    pub fn add_annotation(&mut self, qualified_name: impl Into<String>) -> &SyntheticAnnotation {
        self.annotations
            .push(SyntheticAnnotation::new(qualified_name));
        &self.annotations[self.annotations.len() - 1]
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub fn has_explicit_modifier(&self, modifier: Modifier) -> bool {
        modifier.is_explicit() && self.has_modifier(modifier)
    }

    /// Modifiers in insertion order, duplicates included.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn annotations(&self) -> &[SyntheticAnnotation] {
        &self.annotations
    }

    pub fn find_annotation(&self, qualified_name: &str) -> Option<&SyntheticAnnotation> {
        self.annotations
            .iter()
            .find(|a| a.qualified_name() == qualified_name)
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty() && self.annotations.is_empty()
    }

    fn modifier_set(&self) -> BTreeSet<Modifier> {
        self.modifiers.iter().copied().collect()
    }

    fn annotation_set(&self) -> BTreeSet<&str> {
        self.annotations.iter().map(|a| a.qualified_name()).collect()
    }
}

impl PartialEq for ModifierList {
    fn eq(&self, other: &Self) -> bool {
        self.modifier_set() == other.modifier_set()
            && self.annotation_set() == other.annotation_set()
    }
}

impl Eq for ModifierList {}
