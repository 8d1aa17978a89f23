//! Reference lists (`throws`, `extends`, `implements`) and type parameters.

use std::fmt;

use nova_types::{ClassType, Type};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceRole {
    Throws,
    Extends,
    Implements,
}

impl ReferenceRole {
    pub fn keyword(self) -> &'static str {
        match self {
            ReferenceRole::Throws => "throws",
            ReferenceRole::Extends => "extends",
            ReferenceRole::Implements => "implements",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceList {
    role: ReferenceRole,
    references: Vec<ClassType>,
}

impl ReferenceList {
    pub fn new(role: ReferenceRole) -> Self {
        Self {
            role,
            references: Vec::new(),
        }
    }

    pub fn role(&self) -> ReferenceRole {
        self.role
    }

    pub fn add_reference(&mut self, ty: ClassType) {
        self.references.push(ty);
    }

    pub fn add_reference_name(&mut self, fq_name: impl Into<String>) {
        self.references.push(ClassType::named(fq_name));
    }

    pub fn references(&self) -> &[ClassType] {
        &self.references
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

/// Declaration-site type parameter, e.g. `T extends Comparable<T>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SyntheticTypeParameter {
    pub name: String,
    pub bounds: Vec<Type>,
}

impl SyntheticTypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn with_bound(mut self, bound: Type) -> Self {
        self.bounds.push(bound);
        self
    }

    pub fn canonical_text(&self) -> String {
        if self.bounds.is_empty() {
            return self.name.clone();
        }
        let bounds: Vec<String> = self.bounds.iter().map(Type::canonical_text).collect();
        format!("{} extends {}", self.name, bounds.join(" & "))
    }
}

impl fmt::Display for SyntheticTypeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_text())
    }
}
