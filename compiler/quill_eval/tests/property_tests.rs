//! Property-based tests for arithmetic and scoping.
//!
//! Checks:
//! 1. Division always yields a float equal to the float quotient
//! 2. Checked integer arithmetic agrees with `i64::checked_*`
//! 3. Shadowing inside a block never changes the outer binding

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::cast_precision_loss,
    clippy::disallowed_types,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use quill_eval::{evaluate_binary, EvalErrorKind, Interpreter, Value};
use quill_ir::{AstBuilder, BinaryOp, SharedInterner};

proptest! {
    #[test]
    fn division_is_float_quotient(a in any::<i64>(), b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
        let result = evaluate_binary(&Value::int(a), &Value::int(b), BinaryOp::Div).unwrap();
        prop_assert_eq!(result, Value::float(a as f64 / b as f64));
    }

    #[test]
    fn division_by_zero_always_fails(a in any::<i64>()) {
        let err = evaluate_binary(&Value::int(a), &Value::int(0), BinaryOp::Div).unwrap_err();
        prop_assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    }

    #[test]
    fn checked_arithmetic_matches_i64(a in any::<i64>(), b in any::<i64>()) {
        let cases = [
            (BinaryOp::Add, a.checked_add(b)),
            (BinaryOp::Sub, a.checked_sub(b)),
            (BinaryOp::Mul, a.checked_mul(b)),
        ];
        for (op, expected) in cases {
            let result = evaluate_binary(&Value::int(a), &Value::int(b), op);
            match expected {
                Some(n) => prop_assert_eq!(result, Ok(Value::int(n))),
                None => prop_assert!(matches!(
                    result.unwrap_err().kind,
                    EvalErrorKind::IntegerOverflow { .. }
                ), "expected IntegerOverflow"),
            }
        }
    }

    #[test]
    fn block_shadowing_is_local(outer in any::<i64>(), inner in any::<i64>()) {
        let interner = SharedInterner::default();
        let mut b = AstBuilder::new(&interner);
        let outer_value = b.int(outer);
        let decl = b.let_var("x", outer_value);
        let inner_value = b.int(inner);
        let shadow = b.let_var("x", inner_value);
        let read_inner = b.ident("x");
        let block = b.block(&[shadow, read_inner]);
        let read_outer = b.ident("x");
        let arena = b.finish();

        let mut interp = Interpreter::new(&interner);
        prop_assert_eq!(interp.eval_program(&arena, &[decl, block]), Ok(Value::int(inner)));
        prop_assert_eq!(interp.eval_program(&arena, &[read_outer]), Ok(Value::int(outer)));
    }
}
