//! Simple in-memory host for unit tests and examples.
//!
//! [`MemoryElementFactory`] does not build a real syntax tree. It checks that a declaration
//! is well formed enough for a Java parser (balanced delimiters, an identifier before the
//! parameter list, a trailing block) and wraps the text in a [`MemoryNode`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use text_size::{TextRange, TextSize};

use crate::{ContainingClass, ElementFactory, FileId, MemberNode, NodeKind, NodeRef, SyntheticError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryNode {
    kind: NodeKind,
    text: String,
    range: TextRange,
}

impl MemoryNode {
    pub fn new(kind: NodeKind, text: impl Into<String>) -> Self {
        let text = text.into();
        let range = TextRange::up_to(TextSize::of(text.as_str()));
        Self { kind, text, range }
    }
}

impl MemberNode for MemoryNode {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn text_range(&self) -> TextRange {
        self.range
    }
}

#[derive(Debug, Default)]
pub struct MemoryElementFactory {
    parse_count: Cell<usize>,
}

impl MemoryElementFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `method_from_text` calls so far.
    pub fn parse_count(&self) -> usize {
        self.parse_count.get()
    }

    pub fn code_block(&self, text: impl Into<String>) -> NodeRef {
        Rc::new(MemoryNode::new(NodeKind::CodeBlock, text))
    }
}

impl ElementFactory for MemoryElementFactory {
    fn method_from_text(
        &self,
        text: &str,
        context: Option<&dyn ContainingClass>,
    ) -> Result<NodeRef, SyntheticError> {
        let name = check_method_declaration(text).map_err(|message| SyntheticError::Parse {
            text: text.to_string(),
            message,
        })?;
        let is_constructor = context.is_some_and(|class| simple_name(class.qualified_name()) == name);
        let kind = if is_constructor {
            NodeKind::Constructor
        } else {
            NodeKind::Method
        };
        self.parse_count.set(self.parse_count.get() + 1);
        Ok(Rc::new(MemoryNode::new(kind, text)))
    }
}

#[derive(Debug)]
pub struct MemoryClass {
    qualified_name: String,
    file: Option<FileId>,
    read_only: bool,
    members: RefCell<Vec<NodeRef>>,
}

impl MemoryClass {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            file: None,
            read_only: false,
            members: RefCell::new(Vec::new()),
        }
    }

    pub fn with_file(mut self, file: FileId) -> Self {
        self.file = Some(file);
        self
    }

    /// Classes from compiled libraries reject edits.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Members inserted through [`ContainingClass::add`].
    pub fn members(&self) -> Vec<NodeRef> {
        self.members.borrow().clone()
    }
}

impl ContainingClass for MemoryClass {
    fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    fn containing_file(&self) -> Option<FileId> {
        self.file
    }

    fn check_writable(&self) -> Result<(), SyntheticError> {
        if self.read_only {
            return Err(SyntheticError::IncorrectOperation(format!(
                "class `{}` is read-only",
                self.qualified_name
            )));
        }
        Ok(())
    }

    fn add(&self, member: NodeRef) -> Result<NodeRef, SyntheticError> {
        self.check_writable()?;
        self.members.borrow_mut().push(Rc::clone(&member));
        Ok(member)
    }
}

fn simple_name(qualified_name: &str) -> &str {
    qualified_name.rsplit('.').next().unwrap_or(qualified_name)
}

fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Returns the declared name, or a message describing why `text` is not a declaration.
fn check_method_declaration(text: &str) -> Result<&str, String> {
    // Angle brackets only pair up in the header; inside a body they may be operators.
    let header_len = text.find('{').unwrap_or(text.len());
    let mut stack = Vec::new();
    for (offset, c) in text.char_indices() {
        let in_header = offset < header_len;
        match c {
            '<' | '>' if !in_header => {}
            '(' | '{' | '<' => stack.push(c),
            ')' | '}' | '>' => {
                let expected = match c {
                    ')' => '(',
                    '}' => '{',
                    _ => '<',
                };
                if stack.pop() != Some(expected) {
                    return Err(format!("unbalanced `{c}` at offset {offset}"));
                }
            }
            _ => {}
        }
    }
    if let Some(open) = stack.last() {
        return Err(format!("unclosed `{open}`"));
    }

    let Some(params_start) = text.find('(') else {
        return Err("expected `(`".to_string());
    };
    let name = text[..params_start]
        .trim_end()
        .rsplit(|c: char| c.is_whitespace() || c == '>')
        .next()
        .unwrap_or("");
    if !is_java_identifier(name) {
        return Err(format!("expected method name before `(`, found `{name}`"));
    }

    let trimmed = text.trim_end();
    if !trimmed.ends_with('}') {
        return Err("expected method body".to_string());
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_method() {
        assert_eq!(check_method_declaration("public long getId(){  }"), Ok("getId"));
        assert_eq!(
            check_method_declaration("java.util.List<T> all(int a,long b){ }"),
            Ok("all")
        );
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(check_method_declaration("long getId({ }").is_err());
        assert!(check_method_declaration("long (){ }").is_err());
        assert!(check_method_declaration("long getId()").is_err());
        assert!(check_method_declaration("long getId").is_err());
    }

    #[test]
    fn detects_constructors_by_class_name() {
        let factory = MemoryElementFactory::new();
        let class = MemoryClass::new("com.example.User");
        let node = factory
            .method_from_text("public User(java.lang.String name){ }", Some(&class))
            .unwrap();
        assert_eq!(node.kind(), NodeKind::Constructor);

        let node = factory
            .method_from_text("public long getId(){ }", Some(&class))
            .unwrap();
        assert_eq!(node.kind(), NodeKind::Method);
        assert_eq!(factory.parse_count(), 2);
    }

    #[test]
    fn read_only_class_rejects_members() {
        let factory = MemoryElementFactory::new();
        let class = MemoryClass::new("java.lang.Object").read_only();
        let err = class.add(factory.code_block("{ }")).unwrap_err();
        assert!(matches!(err, SyntheticError::IncorrectOperation(_)));
        assert!(class.members().is_empty());
    }
}
