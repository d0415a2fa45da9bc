//! Scope reclamation between top-level units.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use quill_eval::{ArenaStats, EvalErrorKind, Interpreter, Value};
use quill_ir::{AstBuilder, BinaryOp, ExprId, SharedInterner, TypeTag};

/// `function fact(n) { if n < 2 { 1 } else { n * fact(n - 1) } }`
fn factorial(b: &mut AstBuilder) -> ExprId {
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
    b.function("fact", &["n"], body)
}

/// `function make_adder(n) { x -> x + n }`
fn make_adder(b: &mut AstBuilder) -> ExprId {
    let x = b.ident("x");
    let n = b.ident("n");
    let sum = b.binary(BinaryOp::Add, x, n);
    let lambda = b.lambda("x", sum);
    b.function("make_adder", &["n"], lambda)
}

#[test]
fn finished_calls_are_reclaimed() {
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let fact = factorial(&mut b);
    let five = b.int(5);
    let call = b.call("fact", &[five]);
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    assert_eq!(interp.eval_program(&arena, &[fact, call]), Ok(Value::int(120)));
    assert_eq!(interp.scopes().stats().live, 6);

    let stats = interp.collect_garbage(&[]);
    assert_eq!(
        stats,
        ArenaStats {
            live: 1,
            free: 5,
            capacity: 6,
        }
    );

    // Freed slots are reused before the arena grows.
    assert_eq!(interp.eval_program(&arena, &[call]), Ok(Value::int(120)));
    assert_eq!(interp.scopes().stats().capacity, 6);
}

#[test]
fn collection_is_idempotent() {
    let interner = SharedInterner::default();
    let arena = AstBuilder::new(&interner).finish();
    let mut interp = Interpreter::new(&interner);
    interp.eval_program(&arena, &[]).unwrap();

    let first = interp.collect_garbage(&[]);
    let second = interp.collect_garbage(&[]);
    assert_eq!(first, second);
    assert_eq!(first.live, 1);
}

#[test]
fn globally_bound_closure_survives() {
    // let add10 = make_adder(10); collect; add10(5)
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let adder = make_adder(&mut b);
    let ten = b.int(10);
    let made = b.call("make_adder", &[ten]);
    let decl = b.let_var("add10", made);
    let five = b.int(5);
    let call = b.call("add10", &[five]);
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    interp.eval_program(&arena, &[adder, decl]).unwrap();
    let stats = interp.collect_garbage(&[]);
    assert_eq!(stats.live, 2);
    assert_eq!(interp.eval_program(&arena, &[call]), Ok(Value::int(15)));
}

#[test]
fn rooted_closure_survives_and_unrooted_one_dangles() {
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let adder = make_adder(&mut b);
    let one = b.int(1);
    let make_one = b.call("make_adder", &[one]);
    let two = b.int(2);
    let make_two = b.call("make_adder", &[two]);
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    interp.eval_program(&arena, &[adder]).unwrap();
    let kept = interp.eval_program(&arena, &[make_one]).unwrap();
    let dropped = interp.eval_program(&arena, &[make_two]).unwrap();

    interp.collect_garbage(&[kept.clone()]);
    assert_eq!(interp.call_value(&kept, vec![Value::int(4)]), Ok(Value::int(5)));

    let err = interp.call_value(&dropped, vec![Value::int(4)]).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DanglingScope);
}

#[test]
fn stale_closure_stays_dangling_after_slot_reuse() {
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let adder = make_adder(&mut b);
    let one = b.int(1);
    let make_one = b.call("make_adder", &[one]);
    let fact = factorial(&mut b);
    let three = b.int(3);
    let call = b.call("fact", &[three]);
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    interp.eval_program(&arena, &[adder, fact]).unwrap();
    let stale = interp.eval_program(&arena, &[make_one]).unwrap();
    interp.collect_garbage(&[]);

    // The reclaimed slot is handed out again for a new call scope.
    assert_eq!(interp.eval_program(&arena, &[call]), Ok(Value::int(6)));
    let err = interp.call_value(&stale, vec![Value::int(1)]).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DanglingScope);
}

#[test]
fn instance_storage_survives_while_bound() {
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let class = b
        .class("Acct")
        .field("balance", Some(TypeTag::Int))
        .finish();
    let hundred = b.int(100);
    let created = b.new_object("Acct", &[hundred]);
    let decl = b.let_var("acct", created);
    let receiver = b.ident("acct");
    let read = b.field(receiver, "balance");
    let throwaway = b.new_object("Acct", &[]);
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    interp.eval_program(&arena, &[class, decl, throwaway]).unwrap();
    let stats = interp.collect_garbage(&[]);
    assert_eq!(stats.live, 2);
    assert_eq!(stats.free, 1);
    assert_eq!(interp.eval_program(&arena, &[read]), Ok(Value::int(100)));
}

#[test]
fn references_keep_their_scope_alive() {
    // function cell() { let local = 5; ref local }; let r = cell()
    let interner = SharedInterner::default();
    let mut b = AstBuilder::new(&interner);
    let five = b.int(5);
    let decl_local = b.let_var("local", five);
    let take = b.reference("local");
    let body = b.block(&[decl_local, take]);
    let cell = b.function("cell", &[], body);
    let made = b.call("cell", &[]);
    let decl_r = b.let_var("r", made);
    let read = b.ident("r");
    let arena = b.finish();

    let mut interp = Interpreter::new(&interner);
    interp.eval_program(&arena, &[cell, decl_r]).unwrap();
    let stats = interp.collect_garbage(&[]);
    // Global, the call scope and the block scope that owns `local`.
    assert_eq!(stats.live, 3);
    assert_eq!(interp.eval_program(&arena, &[read]), Ok(Value::int(5)));
}
