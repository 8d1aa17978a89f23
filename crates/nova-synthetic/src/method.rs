//! Builder for synthetic (source-less) method declarations.
//!
//! A [`SyntheticMethodBuilder`] is configured once through chained `with_*` calls and then
//! queried by the host for its name, signature, range or a structural node. The node is
//! obtained by rendering the declaration to canonical Java text and handing that text to the
//! host's [`ElementFactory`]; the result is cached for the lifetime of the builder.

use std::cell::{OnceCell, Ref, RefCell};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

use nova_types::{ClassType, Type};
use text_size::{TextRange, TextSize};

use crate::{
    ContainingClass, ElementFactory, FileId, Modifier, ModifierList, NodeRef, ParameterList,
    ReferenceList, ReferenceRole, RenderConfig, SyntheticError, SyntheticParameter,
    SyntheticTypeParameter,
};

/// Hash code shared by every synthetic method.
///
/// The rename pipeline keeps elements in hashed collections while it renames them, so the
/// hash must not depend on the name (or anything else that can change). Equality still
/// compares the full signature.
pub const SYNTHETIC_METHOD_HASH: u32 = 1;

/// Name identifier of a synthetic method, detached from any source file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SyntheticIdentifier {
    text: String,
}

impl SyntheticIdentifier {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug)]
pub struct SyntheticMethodBuilder {
    factory: Rc<dyn ElementFactory>,
    /// Write-once in spirit; only [`SyntheticMethodBuilder::rename`] writes it after construction.
    name: RefCell<String>,
    is_constructor: bool,
    return_type: Option<Type>,
    modifiers: ModifierList,
    parameters: ParameterList,
    type_parameters: Vec<SyntheticTypeParameter>,
    throws_list: ReferenceList,
    containing_class: Option<Weak<dyn ContainingClass>>,
    navigation_element: Option<NodeRef>,
    body: Option<NodeRef>,
    config: RenderConfig,
    /// Never invalidated. Configuration must be complete before the first render.
    rendered: OnceCell<NodeRef>,
}

impl SyntheticMethodBuilder {
    pub fn new(factory: Rc<dyn ElementFactory>, name: impl Into<String>) -> Self {
        Self {
            factory,
            name: RefCell::new(name.into()),
            is_constructor: false,
            return_type: None,
            modifiers: ModifierList::new(),
            parameters: ParameterList::new(),
            type_parameters: Vec::new(),
            throws_list: ReferenceList::new(ReferenceRole::Throws),
            containing_class: None,
            navigation_element: None,
            body: None,
            config: RenderConfig::default(),
            rendered: OnceCell::new(),
        }
    }

    pub fn with_render_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_navigation_element(mut self, element: NodeRef) -> Self {
        self.navigation_element = Some(element);
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.add_modifier(modifier);
        self
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.add_modifiers(modifiers);
        self
    }

    pub fn with_annotation(mut self, qualified_name: impl Into<String>) -> Self {
        self.modifiers.add_annotation(qualified_name);
        self
    }

    /// `None` is only meaningful for constructors.
    pub fn with_return_type(mut self, return_type: impl Into<Option<Type>>) -> Self {
        self.return_type = return_type.into();
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.add_parameter(SyntheticParameter::new(name, ty));
        self
    }

    pub fn with_varargs_parameter(mut self, name: impl Into<String>, element: Type) -> Self {
        self.add_parameter(SyntheticParameter::varargs(name, element));
        self
    }

    pub fn with_type_parameter(mut self, type_parameter: SyntheticTypeParameter) -> Self {
        self.add_type_parameter(type_parameter);
        self
    }

    pub fn with_exception(mut self, ty: ClassType) -> Self {
        self.add_exception(ty);
        self
    }

    pub fn with_exception_name(mut self, fq_name: impl Into<String>) -> Self {
        self.add_exception_name(fq_name);
        self
    }

    /// Only a weak reference is kept; the class must be kept alive by its owner.
    pub fn with_containing_class(mut self, class: Rc<dyn ContainingClass>) -> Self {
        self.containing_class = Some(Rc::downgrade(&class));
        self
    }

    /// Does not touch the return type; constructors should also pass `None` to
    /// [`with_return_type`](Self::with_return_type).
    pub fn with_constructor(mut self, is_constructor: bool) -> Self {
        self.is_constructor = is_constructor;
        self
    }

    pub fn with_body(mut self, body: NodeRef) -> Self {
        self.body = Some(body);
        self
    }

    pub fn add_modifier(&mut self, modifier: Modifier) {
        self.modifiers.add_modifier(modifier);
    }

    pub fn add_parameter(&mut self, param: SyntheticParameter) {
        self.parameters.add(param);
    }

    pub fn add_type_parameter(&mut self, type_parameter: SyntheticTypeParameter) {
        self.type_parameters.push(type_parameter);
    }

    pub fn add_exception(&mut self, ty: ClassType) {
        self.throws_list.add_reference(ty);
    }

    pub fn add_exception_name(&mut self, fq_name: impl Into<String>) {
        self.throws_list.add_reference_name(fq_name);
    }

    pub fn name(&self) -> Ref<'_, str> {
        Ref::map(self.name.borrow(), String::as_str)
    }

    pub fn name_identifier(&self) -> SyntheticIdentifier {
        SyntheticIdentifier::new(&*self.name())
    }

    pub fn is_constructor(&self) -> bool {
        self.is_constructor
    }

    pub fn return_type(&self) -> Option<&Type> {
        self.return_type.as_ref()
    }

    pub fn modifier_list(&self) -> &ModifierList {
        &self.modifiers
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.has_modifier(modifier)
    }

    pub fn parameter_list(&self) -> &ParameterList {
        &self.parameters
    }

    pub fn is_varargs(&self) -> bool {
        self.parameters.iter().last().is_some_and(|p| p.is_varargs)
    }

    pub fn type_parameters(&self) -> &[SyntheticTypeParameter] {
        &self.type_parameters
    }

    pub fn throws_list(&self) -> &ReferenceList {
        &self.throws_list
    }

    pub fn body(&self) -> Option<&NodeRef> {
        self.body.as_ref()
    }

    pub fn navigation_element(&self) -> Option<&NodeRef> {
        self.navigation_element.as_ref()
    }

    /// The containing class, if one was set and is still alive.
    pub fn containing_class(&self) -> Option<Rc<dyn ContainingClass>> {
        self.containing_class.as_ref().and_then(Weak::upgrade)
    }

    /// Synthetic methods have no syntactic parent; the containing class stands in for it.
    pub fn parent(&self) -> Option<Rc<dyn ContainingClass>> {
        self.containing_class()
    }

    pub fn containing_file(&self) -> Option<FileId> {
        self.containing_class()?.containing_file()
    }

    /// Canonical declaration text, without going through the host parser.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for modifier in self.modifiers.modifiers() {
            if modifier.is_explicit() {
                out.push_str(modifier.as_str());
                out.push(' ');
            }
        }
        if self.config.render_annotations {
            for annotation in self.modifiers.annotations() {
                out.push_str(&annotation.to_string());
                out.push(' ');
            }
        }
        if !self.is_constructor {
            if let Some(return_type) = &self.return_type {
                out.push_str(&return_type.canonical_text());
                out.push(' ');
            }
        }
        out.push_str(&self.name());
        out.push('(');
        let params: Vec<String> = self
            .parameters
            .iter()
            .map(SyntheticParameter::declaration_text)
            .collect();
        out.push_str(&params.join(","));
        out.push(')');
        match &self.body {
            Some(body) => out.push_str(body.text()),
            None => out.push_str(&self.config.empty_body),
        }
        out
    }

    /// Structural node for this declaration, built on first use and reused afterwards.
    ///
    /// Later configuration changes are not reflected in the cached node.
    pub fn rendered_node(&self) -> Result<NodeRef, SyntheticError> {
        if let Some(node) = self.rendered.get() {
            tracing::trace!(name = %self.name(), "reusing rendered synthetic method");
            return Ok(Rc::clone(node));
        }
        let node = self.materialize()?;
        tracing::debug!(name = %self.name(), text = node.text(), "materialized synthetic method");
        Ok(Rc::clone(self.rendered.get_or_init(|| node)))
    }

    /// Text of the rendered node, or `""` when nothing has been rendered yet.
    pub fn text(&self) -> &str {
        self.rendered.get().map(|node| node.text()).unwrap_or("")
    }

    /// Range of the rendered node; the empty range at offset 0 before rendering.
    pub fn text_range(&self) -> TextRange {
        self.rendered
            .get()
            .map(|node| node.text_range())
            .unwrap_or_else(|| TextRange::empty(TextSize::from(0)))
    }

    /// Fresh node for the current configuration. Neither reads nor fills the cache.
    pub fn copy(&self) -> Result<NodeRef, SyntheticError> {
        let node = self.materialize()?;
        tracing::debug!(name = %self.name(), "copied synthetic method");
        Ok(node)
    }

    /// Overwrite the name in place.
    ///
    /// This is the single mutation allowed through a shared reference. It fails when the
    /// name is currently borrowed (e.g. a [`name`](Self::name) guard is alive).
    pub fn rename(&self, new_name: impl Into<String>) -> Result<&Self, SyntheticError> {
        let new_name = new_name.into();
        let mut slot = self
            .name
            .try_borrow_mut()
            .map_err(|_| SyntheticError::RenameUnavailable {
                name: self
                    .name
                    .try_borrow()
                    .map(|name| name.clone())
                    .unwrap_or_default(),
            })?;
        tracing::debug!(from = %slot, to = %new_name, "renaming synthetic method");
        *slot = new_name;
        Ok(self)
    }

    /// Synthetic methods cannot be replaced in place, so `member` is added to the containing
    /// class instead. Returns `Ok(None)` when there is no containing class.
    pub fn replace(&self, member: NodeRef) -> Result<Option<NodeRef>, SyntheticError> {
        let Some(class) = self.containing_class() else {
            tracing::debug!(name = %self.name(), "replace without containing class");
            return Ok(None);
        };
        class.check_writable()?;
        let added = class.add(member)?;
        tracing::debug!(
            name = %self.name(),
            class = class.qualified_name(),
            "added replacement member to containing class"
        );
        Ok(Some(added))
    }

    /// No-op: there is no backing storage to delete.
    pub fn delete(&self) -> Result<(), SyntheticError> {
        Ok(())
    }

    /// No-op: deleting a synthetic method is always allowed.
    pub fn check_delete(&self) -> Result<(), SyntheticError> {
        Ok(())
    }

    pub const fn hash_code(&self) -> u32 {
        SYNTHETIC_METHOD_HASH
    }

    fn materialize(&self) -> Result<NodeRef, SyntheticError> {
        let text = self.render_text();
        let class = self.containing_class();
        self.factory.method_from_text(&text, class.as_deref())
    }

    fn containing_class_name(&self) -> Option<String> {
        self.containing_class()
            .map(|class| class.qualified_name().to_string())
    }
}

impl PartialEq for SyntheticMethodBuilder {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        *self.name() == *other.name()
            && self.is_constructor == other.is_constructor
            && self.containing_class_name() == other.containing_class_name()
            && self.modifiers == other.modifiers
            && self.parameters == other.parameters
            && self.return_type == other.return_type
    }
}

impl Eq for SyntheticMethodBuilder {}

impl Hash for SyntheticMethodBuilder {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_code().hash(state);
    }
}

impl fmt::Display for SyntheticMethodBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SyntheticMethodBuilder: {}", self.name())
    }
}
