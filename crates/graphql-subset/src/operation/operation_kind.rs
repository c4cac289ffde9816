/// The three kinds of executable GraphQL operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// The conventional name of the object type backing this operation kind,
    /// used when the schema declares no explicit `schema { ... }` block.
    pub fn default_root_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }
}
