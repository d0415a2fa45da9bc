//! End-to-end programs built with `AstBuilder` and run through the
//! interpreter.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use quill_eval::{EvalErrorKind, Interpreter, Value};
use quill_ir::{AstBuilder, BinaryOp, SharedInterner, TypeTag};

#[test]
fn block_shadowing_leaves_outer_binding() {
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let one = b.int(1);
    let outer = b.let_var("x", one);
    let two = b.int(2);
    let inner = b.let_var("x", two);
    let read_inner = b.ident("x");
    let block = b.block(&[inner, read_inner]);
    let read_outer = b.ident("x");
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    assert_eq!(interp.eval_program(&arena, &[outer, block]), Ok(Value::int(2)));
    assert_eq!(interp.eval_program(&arena, &[read_outer]), Ok(Value::int(1)));
}

#[test]
fn closure_captures_defining_scope() {
    // function make_adder(n) { x -> x + n }
    // let add10 = make_adder(10)
    // add10(50)
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let x = b.ident("x");
    let n = b.ident("n");
    let sum = b.binary(BinaryOp::Add, x, n);
    let lambda = b.lambda("x", sum);
    let make_adder = b.function("make_adder", &["n"], lambda);
    let ten = b.int(10);
    let made = b.call("make_adder", &[ten]);
    let decl = b.let_var("add10", made);
    let fifty = b.int(50);
    let call = b.call("add10", &[fifty]);
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    let result = interp.eval_program(&arena, &[make_adder, decl, call]);
    assert_eq!(result, Ok(Value::int(60)));
}

#[test]
fn nested_function_reads_enclosing_local() {
    // function outer() { let z = 30; function inner() { z * 2 }; inner() }
    // outer()
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let thirty = b.int(30);
    let decl_z = b.let_var("z", thirty);
    let z = b.ident("z");
    let two = b.int(2);
    let doubled = b.binary(BinaryOp::Mul, z, two);
    let inner = b.function("inner", &[], doubled);
    let call_inner = b.call("inner", &[]);
    let body = b.block(&[decl_z, inner, call_inner]);
    let outer = b.function("outer", &[], body);
    let call_outer = b.call("outer", &[]);
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    assert_eq!(
        interp.eval_program(&arena, &[outer, call_outer]),
        Ok(Value::int(60))
    );
    assert_eq!(interp.lookup_global("inner"), None);
}

#[test]
fn closure_sees_later_updates_to_captured_variable() {
    // let base = 1
    // function get() { base }
    // base = 7
    // get()
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let one = b.int(1);
    let decl = b.let_var("base", one);
    let body = b.ident("base");
    let get = b.function("get", &[], body);
    let seven = b.int(7);
    let update = b.assign("base", seven);
    let call = b.call("get", &[]);
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    let result = interp.eval_program(&arena, &[decl, get, update, call]);
    assert_eq!(result, Ok(Value::int(7)));
}

#[test]
fn reference_aliases_original_binding() {
    // let a = 0; let r = ref a; r := r + 1; a
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let zero = b.int(0);
    let decl_a = b.let_var("a", zero);
    let take = b.reference("a");
    let decl_r = b.let_var("r", take);
    let r = b.ident("r");
    let one = b.int(1);
    let incremented = b.binary(BinaryOp::Add, r, one);
    let write = b.assign_ref("r", incremented);
    let read_a = b.ident("a");
    let read_r = b.ident("r");
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    let result = interp.eval_program(&arena, &[decl_a, decl_r, write, read_a]);
    assert_eq!(result, Ok(Value::int(1)));
    assert_eq!(interp.eval_program(&arena, &[read_r]), Ok(Value::int(1)));
}

#[test]
fn recursive_factorial() {
    // function fact(n) { if n < 2 { 1 } else { n * fact(n - 1) } }
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let n = b.ident("n");
    let two = b.int(2);
    let cond = b.binary(BinaryOp::Lt, n, two);
    let one = b.int(1);
    let n = b.ident("n");
    let one_again = b.int(1);
    let pred = b.binary(BinaryOp::Sub, n, one_again);
    let recurse = b.call("fact", &[pred]);
    let n = b.ident("n");
    let product = b.binary(BinaryOp::Mul, n, recurse);
    let body = b.if_else(cond, one, product);
    let fact = b.function("fact", &["n"], body);
    let five = b.int(5);
    let call = b.call("fact", &[five]);
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    assert_eq!(interp.eval_program(&arena, &[fact, call]), Ok(Value::int(120)));
}

#[test]
fn method_updates_field_through_scope_chain() {
    // class Acct { balance: int; deposit(amount) { balance = balance + amount; balance } }
    // let acct = new Acct(100)
    // acct.deposit(50)
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let balance = b.ident("balance");
    let amount = b.ident("amount");
    let sum = b.binary(BinaryOp::Add, balance, amount);
    let update = b.assign("balance", sum);
    let result = b.ident("balance");
    let deposit = b.block(&[update, result]);
    let class = b
        .class("Acct")
        .field("balance", Some(TypeTag::Int))
        .method("deposit", &["amount"], deposit)
        .finish();
    let hundred = b.int(100);
    let created = b.new_object("Acct", &[hundred]);
    let decl = b.let_var("acct", created);
    let receiver = b.ident("acct");
    let fifty = b.int(50);
    let call = b.method_call(receiver, "deposit", &[fifty]);
    let receiver = b.ident("acct");
    let read = b.field(receiver, "balance");
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    let result = interp.eval_program(&arena, &[class, decl, call]);
    assert_eq!(result, Ok(Value::int(150)));
    assert_eq!(interp.eval_program(&arena, &[read]), Ok(Value::int(150)));
}

#[test]
fn map_applies_function_in_order() {
    // map(x -> x * 2, [1, 2, 3])
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let x = b.ident("x");
    let two = b.int(2);
    let doubled = b.binary(BinaryOp::Mul, x, two);
    let lambda = b.lambda("x", doubled);
    let items: Vec<_> = (1..=3).map(|n| b.int(n)).collect();
    let array = b.array(&items);
    let call = b.call("map", &[lambda, array]);
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    assert_eq!(
        interp.eval_program(&arena, &[call]),
        Ok(Value::array(vec![Value::int(2), Value::int(4), Value::int(6)]))
    );
}

#[test]
fn map_rejects_non_callable_and_non_array() {
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let one = b.int(1);
    let empty = b.array(&[]);
    let bad_func = b.call("map", &[one, empty]);
    let x = b.ident("x");
    let lambda = b.lambda("x", x);
    let text = b.string("abc");
    let bad_items = b.call("map", &[lambda, text]);
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    let err = interp.eval_program(&arena, &[bad_func]).unwrap_err();
    assert!(err.kind.is_type_mismatch());
    let err = interp.eval_program(&arena, &[bad_items]).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: "array".to_string(),
            got: "string".to_string(),
        }
    );
}

#[test]
fn array_indexing() {
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let items: Vec<_> = [10, 20, 30].into_iter().map(|n| b.int(n)).collect();
    let array = b.array(&items);
    let decl = b.let_var("xs", array);

    let index = |b: &mut AstBuilder, at: i64| {
        let xs = b.ident("xs");
        let at = b.int(at);
        b.index(xs, at)
    };
    let middle = index(&mut b, 1);
    let past_end = index(&mut b, 5);
    let negative = index(&mut b, -1);
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    assert_eq!(interp.eval_program(&arena, &[decl, middle]), Ok(Value::int(20)));
    assert_eq!(
        interp.eval_program(&arena, &[past_end]).unwrap_err().kind,
        EvalErrorKind::IndexOutOfBounds { index: 5, len: 3 }
    );
    assert_eq!(
        interp.eval_program(&arena, &[negative]).unwrap_err().kind,
        EvalErrorKind::IndexOutOfBounds { index: -1, len: 3 }
    );
}

#[test]
fn index_requires_int() {
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let one = b.int(1);
    let array = b.array(&[one]);
    let at = b.float(0.0);
    let expr = b.index(array, at);
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    let err = interp.eval_program(&arena, &[expr]).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: "int".to_string(),
            got: "float".to_string(),
        }
    );
}

#[test]
fn undefined_variable_names_the_variable() {
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let missing = b.ident("ghost");
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    let err = interp.eval_program(&arena, &[missing]).unwrap_err();
    assert_eq!(err.message, "undefined variable: ghost");
}

#[test]
fn function_parameters_shadow_globals() {
    // let v = 1; function f(v) { v }; f(9)
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let one = b.int(1);
    let decl = b.let_var("v", one);
    let body = b.ident("v");
    let f = b.function("f", &["v"], body);
    let nine = b.int(9);
    let call = b.call("f", &[nine]);
    let read = b.ident("v");
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    assert_eq!(interp.eval_program(&arena, &[decl, f, call]), Ok(Value::int(9)));
    assert_eq!(interp.eval_program(&arena, &[read]), Ok(Value::int(1)));
}

#[test]
fn equality_across_kinds_is_false() {
    // 1 == "a"; 1 != "a"
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let one = b.int(1);
    let text = b.string("a");
    let equal = b.binary(BinaryOp::Eq, one, text);
    let one = b.int(1);
    let text = b.string("a");
    let not_equal = b.binary(BinaryOp::NotEq, one, text);
    let one = b.int(1);
    let text = b.string("a");
    let ordered = b.binary(BinaryOp::Lt, one, text);
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    assert_eq!(interp.eval_program(&arena, &[equal]), Ok(Value::bool(false)));
    assert_eq!(interp.eval_program(&arena, &[not_equal]), Ok(Value::bool(true)));
    assert!(interp
        .eval_program(&arena, &[ordered])
        .unwrap_err()
        .kind
        .is_type_mismatch());
}
