use mathex::{
    evaluate,
    interpreter::{
        evaluator::{core::Context, function::BUILTIN_FUNCTIONS},
        lexer::tokenize,
        parser::core::parse_line,
    },
};

/// The bindings the reference driver uses: seven positional values for
/// `a b c x y z w`.
const BINDINGS: [(&str, f64); 7] = [("a", 55.0),
                                    ("b", 99.0),
                                    ("c", 27.0),
                                    ("x", 102.0),
                                    ("y", 999.0),
                                    ("z", 2.0),
                                    ("w", 501.0)];

fn bound_context() -> Context {
    let mut context = Context::new();
    for (name, value) in BINDINGS {
        context.define(name, value);
    }
    context
}

fn eval_or_panic(src: &str) -> f64 {
    match evaluate(src, &bound_context()) {
        Ok(value) => value,
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_value(src: &str, expected: f64) {
    let value = eval_or_panic(src);
    assert_eq!(value, expected, "expression '{src}'");
}

fn assert_close(src: &str, expected: f64) {
    let value = eval_or_panic(src);
    let tolerance = 1e-9 * expected.abs().max(value.abs());
    assert!((value - expected).abs() <= tolerance,
            "expression '{src}': expected {expected}, got {value}");
}

fn assert_failure(src: &str) {
    if evaluate(src, &bound_context()).is_ok() {
        panic!("Expression '{src}' succeeded but was expected to fail")
    }
}

#[test]
fn bound_variables_round_trip() {
    for (name, value) in BINDINGS {
        assert_value(name, value);
    }
}

#[test]
fn constants_are_bound() {
    assert_value("pi", std::f64::consts::PI);
    assert_value("e", std::f64::consts::E);
    assert_value("pi_2", std::f64::consts::FRAC_PI_2);
    assert_value("pi_4", std::f64::consts::FRAC_PI_4);
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("8 - 5", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("10 / 4", 2.5);
    assert_value("10 % 3", 1.0);
    assert_value("7.5 % 2", 1.5);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("a+b*c", 2728.0);
    assert_value("(a+b)*c", 4158.0);
}

#[test]
fn same_precedence_is_left_associative() {
    assert_value("10 - 4 - 3", 3.0);
    assert_value("100 / 10 / 2", 5.0);
    assert_value("10 - 4 + 3", 9.0);
}

#[test]
fn power_is_right_associative() {
    assert_value("2^3^2", 512.0);
    assert_value("(2^3)^2", 64.0);
}

#[test]
fn power_binds_tighter_than_unary_minus() {
    assert_value("-3^2", -9.0);
    assert_value("(-3)^2", 9.0);
    assert_value("2^-1", 0.5);
}

#[test]
fn unary_operators_stack() {
    assert_value("+5", 5.0);
    assert_value("--5", 5.0);
    assert_value("-+5", -5.0);
    assert_value("2 * -3", -6.0);
}

#[test]
fn numeric_literal_forms() {
    assert_value(".5", 0.5);
    assert_value("5.", 5.0);
    assert_value("1e3", 1000.0);
    assert_value("5.e1", 50.0);
    assert_value("2.5e-1", 0.25);
    assert_value("1.25E+2", 125.0);
}

#[test]
fn function_dispatch() {
    assert_value("sqrt(x)", 102.0_f64.sqrt());
    assert_value("abs(-5)", 5.0);
    assert_value("min(a, b)", 55.0);
    assert_value("max(a, b)", 99.0);
    assert_value("floor(3.7)", 3.0);
    assert_value("ceil(3.2)", 4.0);
    assert_value("round(3.5)", 4.0);
    assert_close("pow(2, 10)", 1024.0);
    assert_close("exp(1)", std::f64::consts::E);
    assert_close("tan(pi_4)", 1.0);
    assert_close("cos(0)", 1.0);
}

#[test]
fn trigonometry_and_logarithms_match_the_reference() {
    assert_close("sin(pi/2)", 1.0);
    assert_close("log(e)", 1.0);
    assert_close("logn(2, 8)", 3.0);
    assert_close("logn(10, 1000)", 3.0);
}

#[test]
fn binomial_coefficients() {
    assert_value("ncr(5, 2)", 10.0);
    assert_value("ncr(6, 0)", 1.0);
    assert_value("ncr(2, 5)", 0.0);
    assert_value("ncr(52, 5)", 2_598_960.0);
}

#[test]
fn every_builtin_is_callable() {
    let context = bound_context();

    for name in BUILTIN_FUNCTIONS {
        let unary = format!("{name}(1)");
        let binary = format!("{name}(1, 2)");

        assert!(evaluate(&unary, &context).is_ok() || evaluate(&binary, &context).is_ok(),
                "builtin '{name}' rejected both arities");
    }
}

#[test]
fn nodes_carry_the_operator_offset() {
    let tokens = tokenize("1 + sin(2)").unwrap();
    let expr = parse_line(&mut tokens.iter().peekable()).unwrap();

    assert_eq!(expr.offset(), 2);
}

#[test]
fn calls_nest_and_compose() {
    assert_value("sqrt(abs(-16))", 4.0);
    assert_close("sin(pi/2) + cos(0)", 2.0);
    assert_close("pow(sqrt(z), 2)", 2.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("  1+2  ", 3.0);
    assert_value("1 \t+ 2", 3.0);
}

#[test]
fn re_evaluation_is_bit_identical() {
    let context = bound_context();
    let source = "sin(x) * exp(y / 999) - a^2 % 7";

    let first = evaluate(source, &context).unwrap();
    let second = evaluate(source, &context).unwrap();

    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn ieee_special_values_are_results() {
    assert!(eval_or_panic("1/0").is_infinite());
    assert!(eval_or_panic("1/0").is_sign_positive());
    assert!(eval_or_panic("-1/0").is_sign_negative());
    assert!(eval_or_panic("0/0").is_nan());
    assert!(eval_or_panic("log(-1)").is_nan());
    assert!(eval_or_panic("sqrt(-4)").is_nan());
}

#[test]
fn unrecognized_character_is_error() {
    assert_failure("1 $ 2");
    assert_failure("3 # 4");
}

#[test]
fn malformed_input_is_error() {
    assert_failure("3+");
    assert_failure("sin(2");
    assert_failure("1 + 2 3");
    assert_failure("()");
    assert_failure("");
    assert_failure("   ");
    assert_failure("*2");
}

#[test]
fn unknown_names_are_errors() {
    assert_failure("q");
    assert_failure("foo(1)");
}

#[test]
fn wrong_function_arity_is_error() {
    assert_failure("sin()");
    assert_failure("sin(1, 2)");
    assert_failure("pow(1)");
    assert_failure("sqrt(1, 2)");
}

#[test]
fn failed_lines_do_not_poison_the_context() {
    let context = bound_context();

    assert!(evaluate("3+", &context).is_err());
    assert!(evaluate("sin(2", &context).is_err());
    assert_eq!(evaluate("1 + 2", &context).unwrap(), 3.0);
    assert_eq!(evaluate("a", &context).unwrap(), 55.0);
}
