use crate::ast;

/// A type reference as written in a schema document: a bare type name,
/// wrapped in any nesting of list and non-null markers.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}
impl TypeRef {
    /// The name at the center of this reference, with every `List`/`NonNull`
    /// wrapper stripped. This is the name allow-lists and reachability are
    /// keyed on.
    pub fn root_type_name(&self) -> &str {
        match self {
            Self::Named(name) => name.as_str(),
            Self::List(inner) => inner.root_type_name(),
            Self::NonNull(inner) => inner.root_type_name(),
        }
    }

    pub(crate) fn from_ast(ast_type: &ast::schema::Type) -> Self {
        match ast_type {
            ast::schema::Type::NamedType(name) =>
                Self::Named(name.clone()),

            ast::schema::Type::ListType(inner) =>
                Self::List(Box::new(Self::from_ast(inner))),

            ast::schema::Type::NonNullType(inner) =>
                Self::NonNull(Box::new(Self::from_ast(inner))),
        }
    }

    pub(crate) fn to_ast(&self) -> ast::schema::Type {
        match self {
            Self::Named(name) =>
                ast::schema::Type::NamedType(name.clone()),

            Self::List(inner) =>
                ast::schema::Type::ListType(Box::new(inner.to_ast())),

            Self::NonNull(inner) =>
                ast::schema::Type::NonNullType(Box::new(inner.to_ast())),
        }
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
