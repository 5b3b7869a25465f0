// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use lattica_expr::{
    AddExpression, AndExpression, CallExpression, CastExpression, ConstantExpression,
    ContainsExpression, DivExpression, EndsWithExpression, EqualExpression, Expression,
    ExpressionKind, Functions, GreaterThanEqualExpression, GreaterThanExpression, InExpression,
    LessThanEqualExpression, LessThanExpression, ListExpression, MapExpression,
    MapProjectionExpression, MapProjectionField, MulExpression, NotEqualExpression, OrExpression,
    PropertyKind, RegexExpression, RemExpression, SetExpression, StartsWithExpression,
    SubExpression, UnaryExpression, UnaryOperator, UuidExpression, VariableExpression,
    VersionedVariableExpression, XorExpression,
};
use lattica_type::Type;

use crate::reader::Reader;
use crate::value::{read_value, write_value};
use crate::writer::Writer;
use crate::{Result, invalid_data};

/// Encodes a tree for shipping between cluster nodes.
pub fn encode_expression(expr: &Expression) -> Vec<u8> {
    let mut writer = Writer::new();
    write_expression(&mut writer, expr);
    writer.into_bytes()
}

/// Decodes a tree previously produced by [`encode_expression`].
///
/// Call nodes re-resolve their builtin against `functions`; a binding
/// that no longer exists is a recoverable error, like a truncated
/// buffer. An unknown kind byte is fatal.
pub fn decode_expression(bytes: &[u8], functions: &Functions) -> Result<Expression> {
    let mut reader = Reader::new(bytes);
    let expr = read_expression(&mut reader, functions)?;
    if !reader.is_exhausted() {
        return invalid_data!("{} trailing bytes after expression", reader.remaining());
    }
    Ok(expr)
}

fn write_expression(w: &mut Writer, expr: &Expression) {
    w.write_u8(expr.kind().code());
    match expr {
        Expression::Constant(ConstantExpression { value }) => write_value(w, value),
        Expression::Add(AddExpression { left, right })
        | Expression::Sub(SubExpression { left, right })
        | Expression::Mul(MulExpression { left, right })
        | Expression::Div(DivExpression { left, right })
        | Expression::Rem(RemExpression { left, right })
        | Expression::Equal(EqualExpression { left, right })
        | Expression::NotEqual(NotEqualExpression { left, right })
        | Expression::LessThan(LessThanExpression { left, right })
        | Expression::LessThanEqual(LessThanEqualExpression { left, right })
        | Expression::GreaterThan(GreaterThanExpression { left, right })
        | Expression::GreaterThanEqual(GreaterThanEqualExpression { left, right })
        | Expression::Regex(RegexExpression { left, right })
        | Expression::And(AndExpression { left, right })
        | Expression::Or(OrExpression { left, right })
        | Expression::Xor(XorExpression { left, right }) => {
            write_expression(w, left);
            write_expression(w, right);
        }
        Expression::Unary(UnaryExpression { op, expr }) => {
            w.write_u8(unary_op_code(*op));
            write_expression(w, expr);
        }
        Expression::In(InExpression { value, collection, negated }) => {
            w.write_bool(*negated);
            write_expression(w, value);
            write_expression(w, collection);
        }
        Expression::Contains(ContainsExpression { left, right, negated })
        | Expression::StartsWith(StartsWithExpression { left, right, negated })
        | Expression::EndsWith(EndsWithExpression { left, right, negated }) => {
            w.write_bool(*negated);
            write_expression(w, left);
            write_expression(w, right);
        }
        Expression::Cast(CastExpression { expr, to }) => {
            w.write_u8(to.code());
            write_expression(w, expr);
        }
        Expression::Call(call) => {
            w.write_str(&call.name);
            w.write_u32(call.args.len() as u32);
            for arg in &call.args {
                write_expression(w, arg);
            }
        }
        Expression::List(ListExpression { items }) | Expression::Set(SetExpression { items }) => {
            w.write_u32(items.len() as u32);
            for item in items {
                write_expression(w, item);
            }
        }
        Expression::Map(MapExpression { items }) => {
            w.write_u32(items.len() as u32);
            for (key, item) in items {
                w.write_str(key);
                write_expression(w, item);
            }
        }
        Expression::MapProjection(MapProjectionExpression { subject, fields }) => {
            write_expression(w, subject);
            w.write_u32(fields.len() as u32);
            for field in fields {
                w.write_str(&field.key);
                write_expression(w, &field.value);
            }
        }
        Expression::Property(prop) => {
            w.write_str(&prop.symbol);
            w.write_str(&prop.prop);
        }
        Expression::Variable(VariableExpression { name }) => w.write_str(name),
        Expression::VersionedVariable(VersionedVariableExpression { name, version }) => {
            w.write_str(name);
            write_expression(w, version);
        }
        Expression::Uuid(UuidExpression) => {}
    }
}

fn read_expression(r: &mut Reader<'_>, functions: &Functions) -> Result<Expression> {
    let code = r.read_u8()?;
    let Some(kind) = ExpressionKind::from_code(code) else {
        // Streams are trusted: an unassigned kind byte cannot come from
        // the encoder and means the buffer is corrupt.
        panic!("unknown expression kind byte {:#04x}", code);
    };
    Ok(match kind {
        ExpressionKind::Constant => {
            Expression::Constant(ConstantExpression { value: read_value(r)? })
        }
        ExpressionKind::Add => {
            let (left, right) = read_pair(r, functions)?;
            Expression::Add(AddExpression { left, right })
        }
        ExpressionKind::Sub => {
            let (left, right) = read_pair(r, functions)?;
            Expression::Sub(SubExpression { left, right })
        }
        ExpressionKind::Mul => {
            let (left, right) = read_pair(r, functions)?;
            Expression::Mul(MulExpression { left, right })
        }
        ExpressionKind::Div => {
            let (left, right) = read_pair(r, functions)?;
            Expression::Div(DivExpression { left, right })
        }
        ExpressionKind::Rem => {
            let (left, right) = read_pair(r, functions)?;
            Expression::Rem(RemExpression { left, right })
        }
        ExpressionKind::Unary => {
            let op = unary_op_from_code(r.read_u8()?);
            let expr = Box::new(read_expression(r, functions)?);
            Expression::Unary(UnaryExpression { op, expr })
        }
        ExpressionKind::Equal => {
            let (left, right) = read_pair(r, functions)?;
            Expression::Equal(EqualExpression { left, right })
        }
        ExpressionKind::NotEqual => {
            let (left, right) = read_pair(r, functions)?;
            Expression::NotEqual(NotEqualExpression { left, right })
        }
        ExpressionKind::LessThan => {
            let (left, right) = read_pair(r, functions)?;
            Expression::LessThan(LessThanExpression { left, right })
        }
        ExpressionKind::LessThanEqual => {
            let (left, right) = read_pair(r, functions)?;
            Expression::LessThanEqual(LessThanEqualExpression { left, right })
        }
        ExpressionKind::GreaterThan => {
            let (left, right) = read_pair(r, functions)?;
            Expression::GreaterThan(GreaterThanExpression { left, right })
        }
        ExpressionKind::GreaterThanEqual => {
            let (left, right) = read_pair(r, functions)?;
            Expression::GreaterThanEqual(GreaterThanEqualExpression { left, right })
        }
        ExpressionKind::In => {
            let negated = r.read_bool()?;
            let value = Box::new(read_expression(r, functions)?);
            let collection = Box::new(read_expression(r, functions)?);
            Expression::In(InExpression { value, collection, negated })
        }
        ExpressionKind::Contains => {
            let negated = r.read_bool()?;
            let (left, right) = read_pair(r, functions)?;
            Expression::Contains(ContainsExpression { left, right, negated })
        }
        ExpressionKind::StartsWith => {
            let negated = r.read_bool()?;
            let (left, right) = read_pair(r, functions)?;
            Expression::StartsWith(StartsWithExpression { left, right, negated })
        }
        ExpressionKind::EndsWith => {
            let negated = r.read_bool()?;
            let (left, right) = read_pair(r, functions)?;
            Expression::EndsWith(EndsWithExpression { left, right, negated })
        }
        ExpressionKind::Regex => {
            let (left, right) = read_pair(r, functions)?;
            Expression::Regex(RegexExpression { left, right })
        }
        ExpressionKind::And => {
            let (left, right) = read_pair(r, functions)?;
            Expression::And(AndExpression { left, right })
        }
        ExpressionKind::Or => {
            let (left, right) = read_pair(r, functions)?;
            Expression::Or(OrExpression { left, right })
        }
        ExpressionKind::Xor => {
            let (left, right) = read_pair(r, functions)?;
            Expression::Xor(XorExpression { left, right })
        }
        ExpressionKind::Cast => {
            let code = r.read_u8()?;
            let Some(to) = Type::from_code(code) else {
                panic!("unknown cast target type byte {:#04x}", code);
            };
            let expr = Box::new(read_expression(r, functions)?);
            Expression::Cast(CastExpression { expr, to })
        }
        ExpressionKind::Call => {
            let name = r.read_str()?;
            let arg_count = r.read_u32()? as usize;
            let mut args = Vec::with_capacity(arg_count.min(r.remaining()));
            for _ in 0..arg_count {
                args.push(read_expression(r, functions)?);
            }
            Expression::Call(CallExpression::new(functions, name, args)?)
        }
        ExpressionKind::List => Expression::List(ListExpression {
            items: read_items(r, functions)?,
        }),
        ExpressionKind::Set => Expression::Set(SetExpression {
            items: read_items(r, functions)?,
        }),
        ExpressionKind::Map => {
            let len = r.read_u32()? as usize;
            let mut items = Vec::with_capacity(len.min(r.remaining()));
            for _ in 0..len {
                let key = r.read_str()?;
                let item = read_expression(r, functions)?;
                items.push((key, item));
            }
            Expression::Map(MapExpression { items })
        }
        ExpressionKind::MapProjection => {
            let subject = Box::new(read_expression(r, functions)?);
            let len = r.read_u32()? as usize;
            let mut fields = Vec::with_capacity(len.min(r.remaining()));
            for _ in 0..len {
                let key = r.read_str()?;
                let value = read_expression(r, functions)?;
                fields.push(MapProjectionField { key, value });
            }
            Expression::MapProjection(MapProjectionExpression { subject, fields })
        }
        ExpressionKind::InputProperty => read_property(r, PropertyKind::InputProp)?,
        ExpressionKind::VariableProperty => read_property(r, PropertyKind::VarProp)?,
        ExpressionKind::SourceProperty => read_property(r, PropertyKind::SrcProp)?,
        ExpressionKind::DestProperty => read_property(r, PropertyKind::DstProp)?,
        ExpressionKind::EdgeProperty => read_property(r, PropertyKind::EdgeProp)?,
        ExpressionKind::EdgeSrcId => read_property(r, PropertyKind::EdgeSrcId)?,
        ExpressionKind::EdgeType => read_property(r, PropertyKind::EdgeType)?,
        ExpressionKind::EdgeRank => read_property(r, PropertyKind::EdgeRank)?,
        ExpressionKind::EdgeDstId => read_property(r, PropertyKind::EdgeDstId)?,
        ExpressionKind::Variable => {
            Expression::Variable(VariableExpression { name: r.read_str()? })
        }
        ExpressionKind::VersionedVariable => {
            let name = r.read_str()?;
            let version = Box::new(read_expression(r, functions)?);
            Expression::VersionedVariable(VersionedVariableExpression { name, version })
        }
        ExpressionKind::Uuid => Expression::Uuid(UuidExpression),
    })
}

fn read_pair(
    r: &mut Reader<'_>,
    functions: &Functions,
) -> Result<(Box<Expression>, Box<Expression>)> {
    let left = Box::new(read_expression(r, functions)?);
    let right = Box::new(read_expression(r, functions)?);
    Ok((left, right))
}

fn read_items(r: &mut Reader<'_>, functions: &Functions) -> Result<Vec<Expression>> {
    let len = r.read_u32()? as usize;
    let mut items = Vec::with_capacity(len.min(r.remaining()));
    for _ in 0..len {
        items.push(read_expression(r, functions)?);
    }
    Ok(items)
}

fn read_property(r: &mut Reader<'_>, kind: PropertyKind) -> Result<Expression> {
    let symbol = r.read_str()?;
    let prop = r.read_str()?;
    Ok(Expression::property(kind, symbol, prop))
}

fn unary_op_code(op: UnaryOperator) -> u8 {
    match op {
        UnaryOperator::Plus => 0x00,
        UnaryOperator::Negate => 0x01,
        UnaryOperator::Not => 0x02,
        UnaryOperator::Increment => 0x03,
        UnaryOperator::Decrement => 0x04,
    }
}

fn unary_op_from_code(code: u8) -> UnaryOperator {
    match code {
        0x00 => UnaryOperator::Plus,
        0x01 => UnaryOperator::Negate,
        0x02 => UnaryOperator::Not,
        0x03 => UnaryOperator::Increment,
        0x04 => UnaryOperator::Decrement,
        _ => panic!("unknown unary operator byte {:#04x}", code),
    }
}
