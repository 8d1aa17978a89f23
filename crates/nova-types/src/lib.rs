//! Type references shared across Nova crates.
//!
//! Synthetic members never own a type store: every reference here is keyed by its
//! fully-qualified name and renders to the canonical text the Java parser accepts
//! verbatim (`java.util.List<java.lang.String>`, `int[]`, `? extends T`).

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Boolean,
        PrimitiveType::Byte,
        PrimitiveType::Short,
        PrimitiveType::Char,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Char => "char",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }
}

/// A reference to a class type: binary-ish qualified name plus type arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassType {
    pub name: String,
    pub args: Vec<Type>,
}

impl ClassType {
    pub fn new(name: impl Into<String>, args: Vec<Type>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Raw reference, e.g. an exception type from a `throws` clause.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Simple name with package and enclosing classes stripped.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    pub fn canonical_text(&self) -> String {
        let mut out = String::new();
        write_class(&mut out, self);
        out
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum WildcardBound {
    Unbounded,
    Extends(Box<Type>),
    Super(Box<Type>),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Void,
    Primitive(PrimitiveType),
    /// A class known only by name (no type arguments).
    Named(String),
    Class(ClassType),
    Array(Box<Type>),
    TypeVar(String),
    Wildcard(WildcardBound),
}

impl Type {
    pub fn int() -> Self {
        Type::Primitive(PrimitiveType::Int)
    }

    pub fn long() -> Self {
        Type::Primitive(PrimitiveType::Long)
    }

    pub fn boolean() -> Self {
        Type::Primitive(PrimitiveType::Boolean)
    }

    pub fn string() -> Self {
        Type::Named("java.lang.String".into())
    }

    pub fn class(name: impl Into<String>, args: Vec<Type>) -> Self {
        Type::Class(ClassType::new(name, args))
    }

    pub fn array(element: Type) -> Self {
        Type::Array(Box::new(element))
    }

    pub fn is_primitive_boolean(&self) -> bool {
        matches!(self, Type::Primitive(PrimitiveType::Boolean))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    /// Text of this type as it would be written in a declaration, with every
    /// class reference fully qualified.
    pub fn canonical_text(&self) -> String {
        let mut out = String::new();
        write_type(&mut out, self);
        out
    }
}

impl From<ClassType> for Type {
    fn from(value: ClassType) -> Self {
        if value.args.is_empty() {
            Type::Named(value.name)
        } else {
            Type::Class(value)
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_text())
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_text())
    }
}

fn write_type(out: &mut String, ty: &Type) {
    match ty {
        Type::Void => out.push_str("void"),
        Type::Primitive(p) => out.push_str(p.keyword()),
        Type::Named(name) | Type::TypeVar(name) => out.push_str(name),
        Type::Class(class) => write_class(out, class),
        Type::Array(element) => {
            write_type(out, element);
            out.push_str("[]");
        }
        Type::Wildcard(bound) => {
            out.push('?');
            match bound {
                WildcardBound::Unbounded => {}
                WildcardBound::Extends(ty) => {
                    out.push_str(" extends ");
                    write_type(out, ty);
                }
                WildcardBound::Super(ty) => {
                    out.push_str(" super ");
                    write_type(out, ty);
                }
            }
        }
    }
}

fn write_class(out: &mut String, class: &ClassType) {
    out.push_str(&class.name);
    if class.args.is_empty() {
        return;
    }
    out.push('<');
    for (idx, arg) in class.args.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        write_type(out, arg);
    }
    out.push('>');
}
