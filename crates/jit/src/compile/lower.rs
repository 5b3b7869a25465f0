// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::cmp::Ordering;
use std::sync::Arc;

use lattica_expr::{EvaluationContext, Expression, PropertyExpression, PropertyKind, UnaryOperator};
use lattica_type::{NullKind, Type, Value};

use crate::schema::SchemaManager;

use super::NativeFn;

/// How a lane run went wrong: a null flowing through (with its subkind),
/// or a runtime value whose kind contradicts what the lane was typed
/// for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum LaneErr {
    Null(NullKind),
    BadOperand,
}

type IntFn = Box<dyn Fn(&dyn EvaluationContext) -> Result<i64, LaneErr> + Send + Sync>;
type FloatFn = Box<dyn Fn(&dyn EvaluationContext) -> Result<f64, LaneErr> + Send + Sync>;
type StrFn = Box<dyn Fn(&dyn EvaluationContext) -> Result<String, LaneErr> + Send + Sync>;

/// The typed intermediate form: a 64-bit integer lane (which also
/// carries booleans, tagged for materialization), a double lane, and a
/// string lane. Promotion between lanes follows the boxed operators.
pub(crate) enum Lowered {
    Int { f: IntFn, boolean: bool },
    Float { f: FloatFn },
    Str { f: StrFn },
}

#[derive(Clone, Copy)]
enum Arith {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

#[derive(Clone, Copy)]
enum Cmp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Cmp {
    fn test(self, ordering: Ordering) -> bool {
        match self {
            Cmp::Eq => ordering == Ordering::Equal,
            Cmp::Ne => ordering != Ordering::Equal,
            Cmp::Lt => ordering == Ordering::Less,
            Cmp::Le => ordering != Ordering::Greater,
            Cmp::Gt => ordering == Ordering::Greater,
            Cmp::Ge => ordering != Ordering::Less,
        }
    }
}

#[derive(Clone, Copy)]
enum Pred {
    Contains,
    StartsWith,
    EndsWith,
}

#[derive(Clone, Copy)]
enum Logic {
    And,
    Or,
    Xor,
}

pub(crate) fn lower(expr: &Expression, schema: &dyn SchemaManager) -> Option<Lowered> {
    match expr {
        Expression::Constant(c) => lower_constant(&c.value),
        Expression::Add(e) => {
            lower_arith(Arith::Add, lower(&e.left, schema)?, lower(&e.right, schema)?)
        }
        Expression::Sub(e) => {
            lower_arith(Arith::Sub, lower(&e.left, schema)?, lower(&e.right, schema)?)
        }
        Expression::Mul(e) => {
            lower_arith(Arith::Mul, lower(&e.left, schema)?, lower(&e.right, schema)?)
        }
        Expression::Div(e) => {
            lower_arith(Arith::Div, lower(&e.left, schema)?, lower(&e.right, schema)?)
        }
        Expression::Rem(e) => {
            lower_arith(Arith::Rem, lower(&e.left, schema)?, lower(&e.right, schema)?)
        }
        Expression::Unary(e) => lower_unary(e.op, lower(&e.expr, schema)?),
        Expression::Equal(e) => {
            lower_compare(Cmp::Eq, lower(&e.left, schema)?, lower(&e.right, schema)?)
        }
        Expression::NotEqual(e) => {
            lower_compare(Cmp::Ne, lower(&e.left, schema)?, lower(&e.right, schema)?)
        }
        Expression::LessThan(e) => {
            lower_compare(Cmp::Lt, lower(&e.left, schema)?, lower(&e.right, schema)?)
        }
        Expression::LessThanEqual(e) => {
            lower_compare(Cmp::Le, lower(&e.left, schema)?, lower(&e.right, schema)?)
        }
        Expression::GreaterThan(e) => {
            lower_compare(Cmp::Gt, lower(&e.left, schema)?, lower(&e.right, schema)?)
        }
        Expression::GreaterThanEqual(e) => {
            lower_compare(Cmp::Ge, lower(&e.left, schema)?, lower(&e.right, schema)?)
        }
        Expression::Contains(e) => lower_string_pred(
            Pred::Contains,
            e.negated,
            lower(&e.left, schema)?,
            lower(&e.right, schema)?,
        ),
        Expression::StartsWith(e) => lower_string_pred(
            Pred::StartsWith,
            e.negated,
            lower(&e.left, schema)?,
            lower(&e.right, schema)?,
        ),
        Expression::EndsWith(e) => lower_string_pred(
            Pred::EndsWith,
            e.negated,
            lower(&e.left, schema)?,
            lower(&e.right, schema)?,
        ),
        Expression::And(e) => {
            lower_logic(Logic::And, lower(&e.left, schema)?, lower(&e.right, schema)?)
        }
        Expression::Or(e) => {
            lower_logic(Logic::Or, lower(&e.left, schema)?, lower(&e.right, schema)?)
        }
        Expression::Xor(e) => {
            lower_logic(Logic::Xor, lower(&e.left, schema)?, lower(&e.right, schema)?)
        }
        Expression::Cast(e) => lower_cast(lower(&e.expr, schema)?, e.to),
        Expression::Property(p) => lower_property(p, schema),
        // Containers, calls, membership, regex, variables, uuid and the
        // mutating unaries stay on the interpreter.
        _ => None,
    }
}

/// Boxes the lane result into the same tagged `Value` the interpreter
/// returns.
pub(crate) fn materialize(lowered: Lowered) -> NativeFn {
    match lowered {
        Lowered::Int { f, boolean: true } => Arc::new(move |ctx| match f(ctx) {
            Ok(v) => Value::Boolean(v != 0),
            Err(err) => null_of(err),
        }),
        Lowered::Int { f, boolean: false } => Arc::new(move |ctx| match f(ctx) {
            Ok(v) => Value::Int8(v),
            Err(err) => null_of(err),
        }),
        Lowered::Float { f } => Arc::new(move |ctx| match f(ctx) {
            Ok(v) => Value::float8(v),
            Err(err) => null_of(err),
        }),
        Lowered::Str { f } => Arc::new(move |ctx| match f(ctx) {
            Ok(v) => Value::Utf8(v),
            Err(err) => null_of(err),
        }),
    }
}

fn null_of(err: LaneErr) -> Value {
    match err {
        LaneErr::Null(kind) => Value::Null(kind),
        LaneErr::BadOperand => Value::Null(NullKind::BadType),
    }
}

fn lower_constant(value: &Value) -> Option<Lowered> {
    Some(match value {
        Value::Boolean(b) => {
            let v = *b as i64;
            Lowered::Int { f: Box::new(move |_| Ok(v)), boolean: true }
        }
        Value::Int8(i) => {
            let v = *i;
            Lowered::Int { f: Box::new(move |_| Ok(v)), boolean: false }
        }
        Value::Float8(f) => {
            let v = f.value();
            Lowered::Float { f: Box::new(move |_| Ok(v)) }
        }
        Value::Utf8(s) => {
            let v = s.clone();
            Lowered::Str { f: Box::new(move |_| Ok(v.clone())) }
        }
        Value::Null(kind) => {
            let kind = *kind;
            Lowered::Int { f: Box::new(move |_| Err(LaneErr::Null(kind))), boolean: false }
        }
        _ => return None,
    })
}

fn to_float(lowered: Lowered) -> Option<FloatFn> {
    match lowered {
        Lowered::Float { f } => Some(f),
        Lowered::Int { f, boolean: false } => {
            Some(Box::new(move |ctx| f(ctx).map(|v| v as f64)))
        }
        _ => None,
    }
}

/// A float result is normalized per node, exactly like the boxed
/// constructor: NaN never flows onward as a number.
fn norm(v: f64) -> Result<f64, LaneErr> {
    if v.is_nan() { Err(LaneErr::Null(NullKind::NaN)) } else { Ok(v) }
}

fn lower_arith(op: Arith, left: Lowered, right: Lowered) -> Option<Lowered> {
    match (left, right) {
        (Lowered::Int { f: l, boolean: false }, Lowered::Int { f: r, boolean: false }) => {
            let f: IntFn = Box::new(move |ctx| {
                let lv = l(ctx);
                let rv = r(ctx);
                let (a, b) = (lv?, rv?);
                match op {
                    Arith::Add => a.checked_add(b).ok_or(LaneErr::Null(NullKind::Overflow)),
                    Arith::Sub => a.checked_sub(b).ok_or(LaneErr::Null(NullKind::Overflow)),
                    Arith::Mul => a.checked_mul(b).ok_or(LaneErr::Null(NullKind::Overflow)),
                    Arith::Div => {
                        if b == 0 {
                            Err(LaneErr::Null(NullKind::DivByZero))
                        } else {
                            a.checked_div(b).ok_or(LaneErr::Null(NullKind::Overflow))
                        }
                    }
                    Arith::Rem => {
                        if b == 0 {
                            Err(LaneErr::Null(NullKind::DivByZero))
                        } else {
                            a.checked_rem(b).ok_or(LaneErr::Null(NullKind::Overflow))
                        }
                    }
                }
            });
            Some(Lowered::Int { f, boolean: false })
        }
        (Lowered::Str { f: l }, Lowered::Str { f: r }) if matches!(op, Arith::Add) => {
            let f: StrFn = Box::new(move |ctx| {
                let lv = l(ctx);
                let rv = r(ctx);
                Ok(format!("{}{}", lv?, rv?))
            });
            Some(Lowered::Str { f })
        }
        (left, right) => {
            let l = to_float(left)?;
            let r = to_float(right)?;
            let f: FloatFn = Box::new(move |ctx| {
                let lv = l(ctx);
                let rv = r(ctx);
                let (a, b) = (lv?, rv?);
                match op {
                    Arith::Add => norm(a + b),
                    Arith::Sub => norm(a - b),
                    Arith::Mul => norm(a * b),
                    Arith::Div => {
                        if b == 0.0 { Err(LaneErr::Null(NullKind::DivByZero)) } else { norm(a / b) }
                    }
                    Arith::Rem => {
                        if b == 0.0 { Err(LaneErr::Null(NullKind::DivByZero)) } else { norm(a % b) }
                    }
                }
            });
            Some(Lowered::Float { f })
        }
    }
}

/// Comparisons see nulls without their subkind, like the boxed
/// comparison operators.
fn cmp_err(err: LaneErr) -> LaneErr {
    match err {
        LaneErr::Null(_) => LaneErr::Null(NullKind::Generic),
        bad => bad,
    }
}

fn lower_compare(op: Cmp, left: Lowered, right: Lowered) -> Option<Lowered> {
    let f: IntFn = match (left, right) {
        (Lowered::Int { f: l, boolean: lb }, Lowered::Int { f: r, boolean: rb }) if lb == rb => {
            Box::new(move |ctx| {
                let lv = l(ctx);
                let rv = r(ctx);
                let a = lv.map_err(cmp_err)?;
                let b = rv.map_err(cmp_err)?;
                Ok(op.test(a.cmp(&b)) as i64)
            })
        }
        (Lowered::Str { f: l }, Lowered::Str { f: r }) => Box::new(move |ctx| {
            let lv = l(ctx);
            let rv = r(ctx);
            let a = lv.map_err(cmp_err)?;
            let b = rv.map_err(cmp_err)?;
            Ok(op.test(a.cmp(&b)) as i64)
        }),
        (left, right) => {
            let l = to_float(left)?;
            let r = to_float(right)?;
            Box::new(move |ctx| {
                let lv = l(ctx);
                let rv = r(ctx);
                let a = lv.map_err(cmp_err)?;
                let b = rv.map_err(cmp_err)?;
                let ordering = a.partial_cmp(&b).ok_or(LaneErr::Null(NullKind::NaN))?;
                Ok(op.test(ordering) as i64)
            })
        }
    };
    Some(Lowered::Int { f, boolean: true })
}

fn lower_string_pred(op: Pred, negated: bool, left: Lowered, right: Lowered) -> Option<Lowered> {
    let (Lowered::Str { f: l }, Lowered::Str { f: r }) = (left, right) else {
        return None;
    };
    let f: IntFn = Box::new(move |ctx| {
        let lv = l(ctx);
        let rv = r(ctx);
        let a = lv.map_err(cmp_err)?;
        let b = rv.map_err(cmp_err)?;
        let hit = match op {
            Pred::Contains => a.contains(&b),
            Pred::StartsWith => a.starts_with(&b),
            Pred::EndsWith => a.ends_with(&b),
        };
        Ok((hit != negated) as i64)
    });
    Some(Lowered::Int { f, boolean: true })
}

fn as_bool(lowered: Lowered) -> Option<IntFn> {
    match lowered {
        Lowered::Int { f, boolean: true } => Some(f),
        _ => None,
    }
}

fn lower_logic(op: Logic, left: Lowered, right: Lowered) -> Option<Lowered> {
    let l = as_bool(left)?;
    let r = as_bool(right)?;
    let f: IntFn = Box::new(move |ctx| {
        // Both sides run before combining; no short-circuit.
        let lv = l(ctx);
        let rv = r(ctx);
        match op {
            Logic::And => kleene_and(lv, rv),
            Logic::Or => kleene_or(lv, rv),
            Logic::Xor => kleene_xor(lv, rv),
        }
    });
    Some(Lowered::Int { f, boolean: true })
}

// A wrong-kind operand dominates the Kleene tables, mirroring the boxed
// logical operators.
fn kleene_and(l: Result<i64, LaneErr>, r: Result<i64, LaneErr>) -> Result<i64, LaneErr> {
    if l == Err(LaneErr::BadOperand) || r == Err(LaneErr::BadOperand) {
        return Err(LaneErr::BadOperand);
    }
    match (l, r) {
        (Ok(0), _) | (_, Ok(0)) => Ok(0),
        (Err(err), _) | (_, Err(err)) => Err(err),
        _ => Ok(1),
    }
}

fn kleene_or(l: Result<i64, LaneErr>, r: Result<i64, LaneErr>) -> Result<i64, LaneErr> {
    if l == Err(LaneErr::BadOperand) || r == Err(LaneErr::BadOperand) {
        return Err(LaneErr::BadOperand);
    }
    match (l, r) {
        (Ok(v), _) if v != 0 => Ok(1),
        (_, Ok(v)) if v != 0 => Ok(1),
        (Err(err), _) | (_, Err(err)) => Err(err),
        _ => Ok(0),
    }
}

fn kleene_xor(l: Result<i64, LaneErr>, r: Result<i64, LaneErr>) -> Result<i64, LaneErr> {
    if l == Err(LaneErr::BadOperand) || r == Err(LaneErr::BadOperand) {
        return Err(LaneErr::BadOperand);
    }
    match (l, r) {
        (Err(err), _) | (_, Err(err)) => Err(err),
        (Ok(a), Ok(b)) => Ok(((a != 0) != (b != 0)) as i64),
    }
}

fn lower_unary(op: UnaryOperator, lowered: Lowered) -> Option<Lowered> {
    match op {
        UnaryOperator::Plus => match lowered {
            Lowered::Int { boolean: false, .. } | Lowered::Float { .. } => Some(lowered),
            _ => None,
        },
        UnaryOperator::Negate => match lowered {
            Lowered::Int { f, boolean: false } => {
                let f: IntFn = Box::new(move |ctx| {
                    f(ctx)?.checked_neg().ok_or(LaneErr::Null(NullKind::Overflow))
                });
                Some(Lowered::Int { f, boolean: false })
            }
            Lowered::Float { f } => {
                let f: FloatFn = Box::new(move |ctx| norm(-f(ctx)?));
                Some(Lowered::Float { f })
            }
            _ => None,
        },
        UnaryOperator::Not => {
            let f = as_bool(lowered)?;
            let f: IntFn = Box::new(move |ctx| Ok((f(ctx)? == 0) as i64));
            Some(Lowered::Int { f, boolean: true })
        }
        // Increment and decrement mutate context state; they stay on the
        // interpreter.
        UnaryOperator::Increment | UnaryOperator::Decrement => None,
    }
}

fn lower_cast(lowered: Lowered, to: Type) -> Option<Lowered> {
    match to {
        Type::Int8 => match lowered {
            int @ Lowered::Int { boolean: false, .. } => Some(int),
            Lowered::Float { f } => {
                let f: IntFn = Box::new(move |ctx| {
                    let truncated = f(ctx)?.trunc();
                    if truncated >= -(2f64.powi(63)) && truncated < 2f64.powi(63) {
                        Ok(truncated as i64)
                    } else {
                        Err(LaneErr::Null(NullKind::OutOfRange))
                    }
                });
                Some(Lowered::Int { f, boolean: false })
            }
            Lowered::Str { f } => {
                let f: IntFn = Box::new(move |ctx| {
                    f(ctx)?.trim().parse::<i64>().map_err(|_| LaneErr::Null(NullKind::BadData))
                });
                Some(Lowered::Int { f, boolean: false })
            }
            _ => None,
        },
        Type::Float8 => match lowered {
            Lowered::Int { f, boolean: false } => {
                let f: FloatFn = Box::new(move |ctx| Ok(f(ctx)? as f64));
                Some(Lowered::Float { f })
            }
            float @ Lowered::Float { .. } => Some(float),
            Lowered::Str { f } => {
                let f: FloatFn = Box::new(move |ctx| {
                    let parsed = f(ctx)?
                        .trim()
                        .parse::<f64>()
                        .map_err(|_| LaneErr::Null(NullKind::BadData))?;
                    norm(parsed)
                });
                Some(Lowered::Float { f })
            }
            _ => None,
        },
        Type::Utf8 => match lowered {
            Lowered::Int { f, boolean: true } => {
                let f: StrFn = Box::new(move |ctx| {
                    Ok(if f(ctx)? != 0 { "true".to_string() } else { "false".to_string() })
                });
                Some(Lowered::Str { f })
            }
            Lowered::Int { f, boolean: false } => {
                let f: StrFn = Box::new(move |ctx| Ok(f(ctx)?.to_string()));
                Some(Lowered::Str { f })
            }
            Lowered::Float { f } => {
                // {:?} matches the canonical float rendering of the boxed
                // cast ("1.0", not "1").
                let f: StrFn = Box::new(move |ctx| Ok(format!("{:?}", f(ctx)?)));
                Some(Lowered::Str { f })
            }
            str_lane @ Lowered::Str { .. } => Some(str_lane),
        },
        Type::Boolean => match lowered {
            boolean @ Lowered::Int { boolean: true, .. } => Some(boolean),
            Lowered::Str { f } => {
                let f: IntFn = Box::new(move |ctx| match f(ctx)?.as_str() {
                    "true" => Ok(1),
                    "false" => Ok(0),
                    _ => Err(LaneErr::Null(NullKind::BadData)),
                });
                Some(Lowered::Int { f, boolean: true })
            }
            _ => None,
        },
        _ => None,
    }
}

fn lower_property(prop: &PropertyExpression, schema: &dyn SchemaManager) -> Option<Lowered> {
    let symbol = prop.symbol.clone();
    let name = prop.prop.clone();
    type Fetch = Box<dyn Fn(&dyn EvaluationContext) -> Value + Send + Sync>;
    let (ty, fetch): (Type, Fetch) = match prop.kind {
        PropertyKind::SrcProp => {
            let ty = *schema.tag_schema(&symbol)?.get(&name)?;
            (ty, Box::new(move |ctx: &dyn EvaluationContext| ctx.get_src_prop(&symbol, &name)))
        }
        PropertyKind::DstProp => {
            let ty = *schema.tag_schema(&symbol)?.get(&name)?;
            (ty, Box::new(move |ctx: &dyn EvaluationContext| ctx.get_dst_prop(&symbol, &name)))
        }
        PropertyKind::EdgeProp => {
            let ty = *schema.edge_schema(&symbol)?.get(&name)?;
            (ty, Box::new(move |ctx: &dyn EvaluationContext| ctx.get_edge_prop(&symbol, &name)))
        }
        PropertyKind::EdgeRank => (
            Type::Int8,
            Box::new(move |ctx: &dyn EvaluationContext| ctx.get_edge_prop(&symbol, "_rank")),
        ),
        PropertyKind::EdgeType => (
            Type::Utf8,
            Box::new(move |ctx: &dyn EvaluationContext| ctx.get_edge_prop(&symbol, "_type")),
        ),
        // Ids can be strings or integers and pipeline inputs and
        // variables have no schema; all of those interpret.
        PropertyKind::EdgeSrcId
        | PropertyKind::EdgeDstId
        | PropertyKind::InputProp
        | PropertyKind::VarProp => return None,
    };
    Some(match ty {
        Type::Boolean => Lowered::Int {
            f: Box::new(move |ctx| match fetch(ctx) {
                Value::Boolean(b) => Ok(b as i64),
                Value::Null(kind) => Err(LaneErr::Null(kind)),
                _ => Err(LaneErr::BadOperand),
            }),
            boolean: true,
        },
        Type::Int8 => Lowered::Int {
            f: Box::new(move |ctx| match fetch(ctx) {
                Value::Int8(v) => Ok(v),
                Value::Null(kind) => Err(LaneErr::Null(kind)),
                _ => Err(LaneErr::BadOperand),
            }),
            boolean: false,
        },
        Type::Float8 => Lowered::Float {
            f: Box::new(move |ctx| match fetch(ctx) {
                Value::Float8(v) => Ok(v.value()),
                Value::Int8(v) => Ok(v as f64),
                Value::Null(kind) => Err(LaneErr::Null(kind)),
                _ => Err(LaneErr::BadOperand),
            }),
        },
        Type::Utf8 => Lowered::Str {
            f: Box::new(move |ctx| match fetch(ctx) {
                Value::Utf8(s) => Ok(s),
                Value::Null(kind) => Err(LaneErr::Null(kind)),
                _ => Err(LaneErr::BadOperand),
            }),
        },
        _ => return None,
    })
}
