//! Seams to the host's structural model.
//!
//! Synthetic members never parse source themselves. The host supplies the
//! declaration-from-text facility ([`ElementFactory`]), the node type it hands
//! back ([`MemberNode`]) and the services of the class a member is attached to
//! ([`ContainingClass`]).

use std::fmt;
use std::rc::Rc;

use text_size::TextRange;

use crate::SyntheticError;

/// Opaque file identifier owned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u32);

impl FileId {
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn to_raw(self) -> u32 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Method,
    Constructor,
    Field,
    Class,
    CodeBlock,
}

/// A structural node the host can navigate, query and display.
pub trait MemberNode: fmt::Debug {
    fn kind(&self) -> NodeKind;
    fn text(&self) -> &str;
    fn text_range(&self) -> TextRange;
}

pub type NodeRef = Rc<dyn MemberNode>;

/// Class that synthetic members are attached to.
pub trait ContainingClass: fmt::Debug {
    fn qualified_name(&self) -> &str;

    fn containing_file(&self) -> Option<FileId>;

    /// Fails with [`SyntheticError::IncorrectOperation`] when the class cannot accept edits.
    fn check_writable(&self) -> Result<(), SyntheticError> {
        Ok(())
    }

    /// Physically insert `member` into the class and return the inserted node.
    fn add(&self, member: NodeRef) -> Result<NodeRef, SyntheticError>;
}

/// Declaration-from-text facility.
pub trait ElementFactory: fmt::Debug {
    /// Parse a single method (or constructor) declaration, resolving names against `context`.
    fn method_from_text(
        &self,
        text: &str,
        context: Option<&dyn ContainingClass>,
    ) -> Result<NodeRef, SyntheticError>;
}
