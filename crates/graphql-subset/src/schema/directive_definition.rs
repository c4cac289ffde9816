use crate::ast;
use crate::schema::Argument;

/// A `directive @name(...) on ...` definition. Directive definitions pass
/// through pruning unchanged; their argument types count as referenced during
/// reachability cleanup.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<Argument>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
}
impl DirectiveDefinition {
    pub(crate) fn from_ast(ast_def: &ast::schema::DirectiveDefinition) -> Self {
        Self {
            name: ast_def.name.clone(),
            description: ast_def.description.clone(),
            arguments: ast_def.arguments.iter().map(Argument::from_ast).collect(),
            repeatable: ast_def.repeatable,
            locations: ast_def.locations.iter()
                .map(DirectiveLocation::from_ast)
                .collect(),
        }
    }
}

/// The places a directive may legally be applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
    VariableDefinition,
}
impl DirectiveLocation {
    pub(crate) fn from_ast(ast_location: &ast::schema::DirectiveLocation) -> Self {
        use ast::schema::DirectiveLocation as AstLocation;
        match ast_location {
            AstLocation::Query => Self::Query,
            AstLocation::Mutation => Self::Mutation,
            AstLocation::Subscription => Self::Subscription,
            AstLocation::Field => Self::Field,
            AstLocation::FragmentDefinition => Self::FragmentDefinition,
            AstLocation::FragmentSpread => Self::FragmentSpread,
            AstLocation::InlineFragment => Self::InlineFragment,
            AstLocation::Schema => Self::Schema,
            AstLocation::Scalar => Self::Scalar,
            AstLocation::Object => Self::Object,
            AstLocation::FieldDefinition => Self::FieldDefinition,
            AstLocation::ArgumentDefinition => Self::ArgumentDefinition,
            AstLocation::Interface => Self::Interface,
            AstLocation::Union => Self::Union,
            AstLocation::Enum => Self::Enum,
            AstLocation::EnumValue => Self::EnumValue,
            AstLocation::InputObject => Self::InputObject,
            AstLocation::InputFieldDefinition => Self::InputFieldDefinition,
            AstLocation::VariableDefinition => Self::VariableDefinition,
        }
    }

    pub(crate) fn to_ast(self) -> ast::schema::DirectiveLocation {
        use ast::schema::DirectiveLocation as AstLocation;
        match self {
            Self::Query => AstLocation::Query,
            Self::Mutation => AstLocation::Mutation,
            Self::Subscription => AstLocation::Subscription,
            Self::Field => AstLocation::Field,
            Self::FragmentDefinition => AstLocation::FragmentDefinition,
            Self::FragmentSpread => AstLocation::FragmentSpread,
            Self::InlineFragment => AstLocation::InlineFragment,
            Self::Schema => AstLocation::Schema,
            Self::Scalar => AstLocation::Scalar,
            Self::Object => AstLocation::Object,
            Self::FieldDefinition => AstLocation::FieldDefinition,
            Self::ArgumentDefinition => AstLocation::ArgumentDefinition,
            Self::Interface => AstLocation::Interface,
            Self::Union => AstLocation::Union,
            Self::Enum => AstLocation::Enum,
            Self::EnumValue => AstLocation::EnumValue,
            Self::InputObject => AstLocation::InputObject,
            Self::InputFieldDefinition => AstLocation::InputFieldDefinition,
            Self::VariableDefinition => AstLocation::VariableDefinition,
        }
    }
}
