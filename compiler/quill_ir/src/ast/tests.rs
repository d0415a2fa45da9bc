use super::*;
use pretty_assertions::assert_eq;

#[test]
fn operator_symbols() {
    let symbols: Vec<&str> = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Eq,
        BinaryOp::NotEq,
        BinaryOp::Lt,
        BinaryOp::LtEq,
        BinaryOp::Gt,
        BinaryOp::GtEq,
    ]
    .into_iter()
    .map(BinaryOp::as_symbol)
    .collect();
    assert_eq!(
        symbols,
        vec!["+", "-", "*", "/", "==", "!=", "<", "<=", ">", ">="]
    );
}

#[test]
fn comparison_operators() {
    assert!(BinaryOp::Eq.is_comparison());
    assert!(BinaryOp::GtEq.is_comparison());
    assert!(!BinaryOp::Add.is_comparison());
    assert!(!BinaryOp::Div.is_comparison());
}

#[test]
fn type_tag_keywords() {
    for tag in [TypeTag::Int, TypeTag::Float, TypeTag::Bool, TypeTag::Str] {
        assert_eq!(TypeTag::from_keyword(tag.as_str()), Some(tag));
    }
    assert_eq!(TypeTag::from_keyword("str"), None);
    assert_eq!(TypeTag::Str.to_string(), "string");
}

#[test]
fn float_literal_keeps_bits() {
    let ExprKind::Float(bits) = ExprKind::float(2.5) else {
        panic!("expected float literal");
    };
    assert_eq!(f64::from_bits(bits), 2.5);
    assert_eq!(ExprKind::float(0.1), ExprKind::float(0.1));
}
