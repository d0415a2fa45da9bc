//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch over the operand pair. Mixed integer/float
//! operands promote to float. `==` and `!=` between scalars of different
//! kinds are structural: never equal. Every other mixed pair is a type
//! mismatch.

use quill_ir::BinaryOp;

use crate::errors::{division_by_zero, integer_overflow, invalid_binary_op, EvalResult};
use crate::value::Value;

/// Evaluate a binary operation on two evaluated operands.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Float(a), Value::Float(b)) => eval_float_binary(*a, *b, op),
        (Value::Int(a), Value::Float(b)) => eval_float_binary(int_to_float(*a), *b, op),
        (Value::Float(a), Value::Int(b)) => eval_float_binary(*a, int_to_float(*b), op),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        _ if is_scalar(left) && is_scalar(right) => match op {
            BinaryOp::Eq => Ok(Value::Bool(false)),
            BinaryOp::NotEq => Ok(Value::Bool(true)),
            _ => Err(invalid_binary_op(op, left.type_name(), right.type_name())),
        },
        _ => Err(invalid_binary_op(op, left.type_name(), right.type_name())),
    }
}

/// Values that take part in cross-kind equality.
#[inline]
fn is_scalar(value: &Value) -> bool {
    matches!(
        value,
        Value::Int(_) | Value::Float(_) | Value::Bool(_) | Value::Str(_)
    )
}

#[expect(
    clippy::cast_precision_loss,
    reason = "promotion to float is the language's arithmetic rule"
)]
#[inline]
fn int_to_float(n: i64) -> f64 {
    n as f64
}

/// Checked arithmetic with overflow reported by operation name.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        // `/` always yields the float quotient
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                Ok(Value::Float(int_to_float(a) / int_to_float(b)))
            }
        }
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
    }
}

#[allow(
    clippy::float_cmp,
    reason = "language equality on floats is exact IEEE comparison"
)]
fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Float(a + b)),
        BinaryOp::Sub => Ok(Value::Float(a - b)),
        BinaryOp::Mul => Ok(Value::Float(a * b)),
        BinaryOp::Div => {
            if b == 0.0 {
                Err(division_by_zero())
            } else {
                Ok(Value::Float(a / b))
            }
        }
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
    }
}

fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        _ => Err(invalid_binary_op(op, "bool", "bool")),
    }
}

fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
            Err(invalid_binary_op(op, "string", "string"))
        }
    }
}
