use nova_types::Type;

/// Formal parameter of a synthetic method.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SyntheticParameter {
    pub name: String,
    pub ty: Type,
    pub is_varargs: bool,
}

impl SyntheticParameter {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            is_varargs: false,
        }
    }

    /// A trailing `T...` parameter; `element` is the element type, not the array type.
    pub fn varargs(name: impl Into<String>, element: Type) -> Self {
        Self {
            name: name.into(),
            ty: Type::array(element),
            is_varargs: true,
        }
    }

    pub(crate) fn declaration_text(&self) -> String {
        match (&self.ty, self.is_varargs) {
            (Type::Array(element), true) => {
                format!("{}... {}", element.canonical_text(), self.name)
            }
            _ => format!("{} {}", self.ty.canonical_text(), self.name),
        }
    }
}

/// Ordered parameter list owned by a synthetic method.
///
/// Parameter names are not required to be unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterList {
    params: Vec<SyntheticParameter>,
}

impl ParameterList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, param: SyntheticParameter) {
        self.params.push(param);
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SyntheticParameter> {
        self.params.get(index)
    }

    /// Position of the first parameter called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SyntheticParameter> {
        self.params.iter()
    }

    pub fn parameter_types(&self) -> Vec<Type> {
        self.params.iter().map(|p| p.ty.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a SyntheticParameter;
    type IntoIter = std::slice::Iter<'a, SyntheticParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
