// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use lattica_type::{Type, Value};

use crate::function::{FunctionDef, FunctionError, Functions};

mod kind;

pub use kind::ExpressionKind;

/// A query expression, built programmatically by the planning layer.
///
/// The tree is unique-ownership: every node exclusively owns its children
/// and has no cycles. Sharing across trees is by [`Expression::clone`],
/// which produces a fully independent deep copy. `Display` renders the
/// canonical, fully parenthesized text that doubles as the compiler cache
/// key; it depends only on the tree shape, never on evaluation state.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Constant(ConstantExpression),

    Add(AddExpression),

    Sub(SubExpression),

    Mul(MulExpression),

    Div(DivExpression),

    Rem(RemExpression),

    Unary(UnaryExpression),

    Equal(EqualExpression),

    NotEqual(NotEqualExpression),

    LessThan(LessThanExpression),

    LessThanEqual(LessThanEqualExpression),

    GreaterThan(GreaterThanExpression),

    GreaterThanEqual(GreaterThanEqualExpression),

    In(InExpression),

    Contains(ContainsExpression),

    StartsWith(StartsWithExpression),

    EndsWith(EndsWithExpression),

    Regex(RegexExpression),

    And(AndExpression),

    Or(OrExpression),

    Xor(XorExpression),

    Cast(CastExpression),

    Call(CallExpression),

    List(ListExpression),

    Set(SetExpression),

    Map(MapExpression),

    MapProjection(MapProjectionExpression),

    Property(PropertyExpression),

    Variable(VariableExpression),

    VersionedVariable(VersionedVariableExpression),

    Uuid(UuidExpression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstantExpression {
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MulExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DivExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Negate,
    Not,
    Increment,
    Decrement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub op: UnaryOperator,
    pub expr: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EqualExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotEqualExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LessThanExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LessThanEqualExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GreaterThanExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GreaterThanEqualExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

/// Membership of `value` in `collection`; `negated` turns it into
/// `NOT IN`.
#[derive(Debug, Clone, PartialEq)]
pub struct InExpression {
    pub value: Box<Expression>,
    pub collection: Box<Expression>,
    pub negated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainsExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub negated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StartsWithExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub negated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EndsWithExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub negated: bool,
}

/// Full-text regular-expression match; the right side evaluates to the
/// pattern string.
#[derive(Debug, Clone, PartialEq)]
pub struct RegexExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AndExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct XorExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CastExpression {
    pub expr: Box<Expression>,
    pub to: Type,
}

/// A call to a builtin scalar function. The builtin is resolved by
/// name and arity against the registry when the node is constructed;
/// evaluation just invokes the bound callable on the already-evaluated
/// arguments.
#[derive(Debug, Clone)]
pub struct CallExpression {
    pub name: String,
    pub args: Vec<Expression>,
    func: Arc<FunctionDef>,
}

impl CallExpression {
    pub fn new(
        functions: &Functions,
        name: impl Into<String>,
        args: Vec<Expression>,
    ) -> Result<Self, FunctionError> {
        let name = name.into();
        let func = functions.get(&name, args.len())?;
        Ok(Self { name, args, func })
    }

    pub fn func(&self) -> &FunctionDef {
        &self.func
    }
}

// Structural equality: the resolved binding is derived from the name, so
// comparing name and arguments is enough.
impl PartialEq for CallExpression {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.args == other.args
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListExpression {
    pub items: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetExpression {
    pub items: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapExpression {
    pub items: Vec<(String, Expression)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapProjectionField {
    pub key: String,
    pub value: Expression,
}

/// Projects fields out of an entity into a map. A field whose value is a
/// property access with the name `*` expands to all properties of the
/// subject (through the `properties` builtin).
#[derive(Debug, Clone, PartialEq)]
pub struct MapProjectionExpression {
    pub subject: Box<Expression>,
    pub fields: Vec<MapProjectionField>,
}

/// Which symbolic reference a property accessor resolves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `$-.prop`: a property of the pipeline input.
    InputProp,
    /// `$var.prop`: a property of a named variable.
    VarProp,
    /// `$^.tag.prop`: a property of the edge source vertex.
    SrcProp,
    /// `$$.tag.prop`: a property of the edge destination vertex.
    DstProp,
    /// `edge.prop`: a property of the current edge.
    EdgeProp,
    /// `edge._src`: the source id of the current edge.
    EdgeSrcId,
    /// `edge._type`: the type name of the current edge.
    EdgeType,
    /// `edge._rank`: the rank of the current edge.
    EdgeRank,
    /// `edge._dst`: the destination id of the current edge.
    EdgeDstId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyExpression {
    pub kind: PropertyKind,
    /// The variable, tag, or edge name the accessor goes through; unused
    /// for `InputProp`.
    pub symbol: String,
    /// The property name; unused for the edge id/type/rank accessors.
    pub prop: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpression {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VersionedVariableExpression {
    pub name: String,
    pub version: Box<Expression>,
}

/// Evaluates to a fresh v4 UUID string on every evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct UuidExpression;

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Constant(ConstantExpression { value }) => write!(f, "{}", value),
            Expression::Add(AddExpression { left, right }) => {
                write!(f, "({} + {})", left, right)
            }
            Expression::Sub(SubExpression { left, right }) => {
                write!(f, "({} - {})", left, right)
            }
            Expression::Mul(MulExpression { left, right }) => {
                write!(f, "({} * {})", left, right)
            }
            Expression::Div(DivExpression { left, right }) => {
                write!(f, "({} / {})", left, right)
            }
            Expression::Rem(RemExpression { left, right }) => {
                write!(f, "({} % {})", left, right)
            }
            Expression::Unary(UnaryExpression { op, expr }) => match op {
                UnaryOperator::Plus => write!(f, "(+{})", expr),
                UnaryOperator::Negate => write!(f, "(-{})", expr),
                UnaryOperator::Not => write!(f, "(!{})", expr),
                UnaryOperator::Increment => write!(f, "({}++)", expr),
                UnaryOperator::Decrement => write!(f, "({}--)", expr),
            },
            Expression::Equal(EqualExpression { left, right }) => {
                write!(f, "({} == {})", left, right)
            }
            Expression::NotEqual(NotEqualExpression { left, right }) => {
                write!(f, "({} != {})", left, right)
            }
            Expression::LessThan(LessThanExpression { left, right }) => {
                write!(f, "({} < {})", left, right)
            }
            Expression::LessThanEqual(LessThanEqualExpression { left, right }) => {
                write!(f, "({} <= {})", left, right)
            }
            Expression::GreaterThan(GreaterThanExpression { left, right }) => {
                write!(f, "({} > {})", left, right)
            }
            Expression::GreaterThanEqual(GreaterThanEqualExpression { left, right }) => {
                write!(f, "({} >= {})", left, right)
            }
            Expression::In(InExpression { value, collection, negated }) => {
                if *negated {
                    write!(f, "({} NOT IN {})", value, collection)
                } else {
                    write!(f, "({} IN {})", value, collection)
                }
            }
            Expression::Contains(ContainsExpression { left, right, negated }) => {
                if *negated {
                    write!(f, "({} NOT CONTAINS {})", left, right)
                } else {
                    write!(f, "({} CONTAINS {})", left, right)
                }
            }
            Expression::StartsWith(StartsWithExpression { left, right, negated }) => {
                if *negated {
                    write!(f, "({} NOT STARTS WITH {})", left, right)
                } else {
                    write!(f, "({} STARTS WITH {})", left, right)
                }
            }
            Expression::EndsWith(EndsWithExpression { left, right, negated }) => {
                if *negated {
                    write!(f, "({} NOT ENDS WITH {})", left, right)
                } else {
                    write!(f, "({} ENDS WITH {})", left, right)
                }
            }
            Expression::Regex(RegexExpression { left, right }) => {
                write!(f, "({} =~ {})", left, right)
            }
            Expression::And(AndExpression { left, right }) => {
                write!(f, "({} AND {})", left, right)
            }
            Expression::Or(OrExpression { left, right }) => {
                write!(f, "({} OR {})", left, right)
            }
            Expression::Xor(XorExpression { left, right }) => {
                write!(f, "({} XOR {})", left, right)
            }
            Expression::Cast(CastExpression { expr, to }) => write!(f, "({}){}", to, expr),
            Expression::Call(call) => {
                let args =
                    call.args.iter().map(|arg| arg.to_string()).collect::<Vec<_>>().join(", ");
                write!(f, "{}({})", call.name, args)
            }
            Expression::List(ListExpression { items }) => {
                let items = items.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(", ");
                write!(f, "[{}]", items)
            }
            Expression::Set(SetExpression { items }) => {
                let items = items.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(", ");
                write!(f, "set{{{}}}", items)
            }
            Expression::Map(MapExpression { items }) => {
                let items = items
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{}}}", items)
            }
            Expression::MapProjection(MapProjectionExpression { subject, fields }) => {
                let fields = fields
                    .iter()
                    .map(|field| format!("{}: {}", field.key, field.value))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{}{{{}}}", subject, fields)
            }
            Expression::Property(prop) => Display::fmt(prop, f),
            Expression::Variable(VariableExpression { name }) => write!(f, "${}", name),
            Expression::VersionedVariable(VersionedVariableExpression { name, version }) => {
                write!(f, "${}[{}]", name, version)
            }
            Expression::Uuid(UuidExpression) => f.write_str("uuid()"),
        }
    }
}

impl Display for PropertyExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            PropertyKind::InputProp => write!(f, "$-.{}", self.prop),
            PropertyKind::VarProp => write!(f, "${}.{}", self.symbol, self.prop),
            PropertyKind::SrcProp => write!(f, "$^.{}.{}", self.symbol, self.prop),
            PropertyKind::DstProp => write!(f, "$$.{}.{}", self.symbol, self.prop),
            PropertyKind::EdgeProp => write!(f, "{}.{}", self.symbol, self.prop),
            PropertyKind::EdgeSrcId => write!(f, "{}._src", self.symbol),
            PropertyKind::EdgeType => write!(f, "{}._type", self.symbol),
            PropertyKind::EdgeRank => write!(f, "{}._rank", self.symbol),
            PropertyKind::EdgeDstId => write!(f, "{}._dst", self.symbol),
        }
    }
}

// Construction helpers for the common node shapes; the planner and the
// tests read better through these than through the raw structs.
impl Expression {
    pub fn constant(value: impl Into<Value>) -> Self {
        Expression::Constant(ConstantExpression { value: value.into() })
    }

    pub fn add(left: Expression, right: Expression) -> Self {
        Expression::Add(AddExpression { left: Box::new(left), right: Box::new(right) })
    }

    pub fn sub(left: Expression, right: Expression) -> Self {
        Expression::Sub(SubExpression { left: Box::new(left), right: Box::new(right) })
    }

    pub fn mul(left: Expression, right: Expression) -> Self {
        Expression::Mul(MulExpression { left: Box::new(left), right: Box::new(right) })
    }

    pub fn div(left: Expression, right: Expression) -> Self {
        Expression::Div(DivExpression { left: Box::new(left), right: Box::new(right) })
    }

    pub fn rem(left: Expression, right: Expression) -> Self {
        Expression::Rem(RemExpression { left: Box::new(left), right: Box::new(right) })
    }

    pub fn unary(op: UnaryOperator, expr: Expression) -> Self {
        Expression::Unary(UnaryExpression { op, expr: Box::new(expr) })
    }

    pub fn equal(left: Expression, right: Expression) -> Self {
        Expression::Equal(EqualExpression { left: Box::new(left), right: Box::new(right) })
    }

    pub fn not_equal(left: Expression, right: Expression) -> Self {
        Expression::NotEqual(NotEqualExpression { left: Box::new(left), right: Box::new(right) })
    }

    pub fn less_than(left: Expression, right: Expression) -> Self {
        Expression::LessThan(LessThanExpression { left: Box::new(left), right: Box::new(right) })
    }

    pub fn less_than_equal(left: Expression, right: Expression) -> Self {
        Expression::LessThanEqual(LessThanEqualExpression {
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn greater_than(left: Expression, right: Expression) -> Self {
        Expression::GreaterThan(GreaterThanExpression {
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn greater_than_equal(left: Expression, right: Expression) -> Self {
        Expression::GreaterThanEqual(GreaterThanEqualExpression {
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn is_in(value: Expression, collection: Expression) -> Self {
        Expression::In(InExpression {
            value: Box::new(value),
            collection: Box::new(collection),
            negated: false,
        })
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(AndExpression { left: Box::new(left), right: Box::new(right) })
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(OrExpression { left: Box::new(left), right: Box::new(right) })
    }

    pub fn xor(left: Expression, right: Expression) -> Self {
        Expression::Xor(XorExpression { left: Box::new(left), right: Box::new(right) })
    }

    pub fn cast(expr: Expression, to: Type) -> Self {
        Expression::Cast(CastExpression { expr: Box::new(expr), to })
    }

    pub fn list(items: Vec<Expression>) -> Self {
        Expression::List(ListExpression { items })
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(VariableExpression { name: name.into() })
    }

    pub fn property(kind: PropertyKind, symbol: impl Into<String>, prop: impl Into<String>) -> Self {
        Expression::Property(PropertyExpression {
            kind,
            symbol: symbol.into(),
            prop: prop.into(),
        })
    }

    pub fn input_prop(prop: impl Into<String>) -> Self {
        Self::property(PropertyKind::InputProp, "", prop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_text_is_fully_parenthesized() {
        let expr = Expression::sub(
            Expression::add(Expression::constant(Value::float8(1.0)), Expression::constant(Value::float8(2.0))),
            Expression::mul(Expression::constant(Value::float8(1.0)), Expression::constant(Value::float8(2.0))),
        );
        assert_eq!(expr.to_string(), "((1.0 + 2.0) - (1.0 * 2.0))");
    }

    #[test]
    fn test_canonical_text_distinguishes_int_and_float() {
        assert_eq!(Expression::constant(Value::int8(1)).to_string(), "1");
        assert_eq!(Expression::constant(Value::float8(1.0)).to_string(), "1.0");
    }

    #[test]
    fn test_property_accessor_text() {
        assert_eq!(Expression::input_prop("age").to_string(), "$-.age");
        assert_eq!(
            Expression::property(PropertyKind::SrcProp, "person", "name").to_string(),
            "$^.person.name"
        );
        assert_eq!(
            Expression::property(PropertyKind::EdgeRank, "follows", "").to_string(),
            "follows._rank"
        );
    }

    #[test]
    fn test_clone_is_deep_and_equal() {
        let expr = Expression::add(
            Expression::constant(Value::int8(1)),
            Expression::list(vec![Expression::constant(Value::utf8("x"))]),
        );
        let copy = expr.clone();
        assert_eq!(expr, copy);
        assert_eq!(expr.to_string(), copy.to_string());
    }

    #[test]
    fn test_negated_text() {
        let expr = Expression::In(InExpression {
            value: Box::new(Expression::constant(Value::int8(1))),
            collection: Box::new(Expression::list(vec![])),
            negated: true,
        });
        assert_eq!(expr.to_string(), "(1 NOT IN [])");
    }
}
