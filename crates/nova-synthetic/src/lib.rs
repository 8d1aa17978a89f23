//! Synthetic method declarations.
//!
//! Frameworks such as annotation processors generate members that never exist in a source
//! file, yet completion, navigation, rename and find-usages must treat them like ordinary
//! declarations. This crate provides the builder for such methods:
//!
//! - [`SyntheticMethodBuilder`] assembles a method's shape (name, modifiers, annotations,
//!   return type, parameters, type parameters, `throws` list, containing class, body).
//! - The declaration is rendered to canonical Java text on demand and parsed once by the
//!   host's [`ElementFactory`]; the resulting node is cached and never rebuilt.
//! - Equality compares the signature while the hash is a constant, so a method keeps its
//!   hash bucket across [`SyntheticMethodBuilder::rename`].
//!
//! All operations run on the host's model thread; nothing here is `Send` or `Sync`.

mod config;
mod error;
mod host;
pub mod memory;
mod method;
mod modifiers;
mod params;
mod reference_list;

pub use config::RenderConfig;
pub use error::SyntheticError;
pub use host::{ContainingClass, ElementFactory, FileId, MemberNode, NodeKind, NodeRef};
pub use method::{SyntheticIdentifier, SyntheticMethodBuilder, SYNTHETIC_METHOD_HASH};
pub use modifiers::{Modifier, ModifierList, SyntheticAnnotation};
pub use params::{ParameterList, SyntheticParameter};
pub use reference_list::{ReferenceList, ReferenceRole, SyntheticTypeParameter};

pub use nova_types::{ClassType, PrimitiveType, Type};
