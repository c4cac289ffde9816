use crate::ast;

/// A constant or literal value as written in a document: the value of a query
/// argument, the default value of a schema argument or input field, or an
/// argument of a directive annotation.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(String),
    Int(ast::Number),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(Vec<ObjectField>),
}

/// One `name: value` entry inside an input-object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: String,
    pub value: Value,
}

impl Value {
    pub(crate) fn from_ast(ast_value: &ast::operation::Value) -> Self {
        match ast_value {
            ast::operation::Value::Variable(name) =>
                Value::Variable(name.clone()),

            ast::operation::Value::Int(value) =>
                Value::Int(value.clone()),

            ast::operation::Value::Float(value) =>
                Value::Float(*value),

            ast::operation::Value::String(value) =>
                Value::String(value.clone()),

            ast::operation::Value::Boolean(value) =>
                Value::Bool(*value),

            ast::operation::Value::Null =>
                Value::Null,

            ast::operation::Value::Enum(value) =>
                Value::Enum(value.clone()),

            ast::operation::Value::List(values) =>
                Value::List(values.iter().map(Value::from_ast).collect()),

            ast::operation::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(name, value)| ObjectField {
                    name: name.clone(),
                    value: Value::from_ast(value),
                }).collect()),
        }
    }

    pub(crate) fn to_ast(&self) -> ast::operation::Value {
        match self {
            Value::Variable(name) =>
                ast::operation::Value::Variable(name.clone()),

            Value::Int(value) =>
                ast::operation::Value::Int(value.clone()),

            Value::Float(value) =>
                ast::operation::Value::Float(*value),

            Value::String(value) =>
                ast::operation::Value::String(value.clone()),

            Value::Bool(value) =>
                ast::operation::Value::Boolean(*value),

            Value::Null =>
                ast::operation::Value::Null,

            Value::Enum(value) =>
                ast::operation::Value::Enum(value.clone()),

            Value::List(values) =>
                ast::operation::Value::List(
                    values.iter().map(Value::to_ast).collect(),
                ),

            Value::Object(fields) =>
                ast::operation::Value::Object(
                    fields.iter()
                        .map(|field| (field.name.clone(), field.value.to_ast()))
                        .collect(),
                ),
        }
    }
}
