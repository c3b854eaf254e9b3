//! Integration tests for lispy-std crate.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use lispy_eval::{eval, new_root_environment, parse, Environment, EvalError, Host, Value};
use lispy_std::{load_prelude, load_prelude_source};

#[derive(Default)]
struct CaptureHost {
    lines: RefCell<Vec<String>>,
}

impl Host for CaptureHost {
    fn print(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }

    fn read_source(&self, path: &str) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::NotFound, path.to_string()))
    }
}

fn prelude_env() -> Environment {
    let env = Environment::with_builtins();
    load_prelude(&env).expect("prelude loads");
    env
}

fn eval_str(env: &Environment, source: &str) -> Result<Value, EvalError> {
    eval(&parse(source)?, env)
}

fn check_session(cases: &[(&str, &str)]) {
    let env = prelude_env();
    for (input, expected) in cases {
        let value = eval_str(&env, input).unwrap_or_else(|e| panic!("{:?} failed: {}", input, e));
        assert_eq!(value.to_string(), *expected, "input: {:?}", input);
    }
}

// ============================================================================
// Prelude loading
// ============================================================================

#[test]
fn test_prelude_defines_library() {
    let env = prelude_env();
    for name in ["nil", "true", "false", "fun", "let", "do", "map", "filter", "foldl", "fib"] {
        assert!(env.get(name).is_some(), "{} missing from prelude", name);
    }
}

#[test]
fn test_custom_prelude_source() {
    let env = Environment::with_builtins();
    load_prelude_source("(def {answer} 42)", &env).unwrap();
    assert_eq!(env.get("answer"), Some(Value::number(42)));
    assert!(env.get("fun").is_none());
}

#[test]
fn test_broken_prelude_reports_expression() {
    let env = Environment::with_builtins();
    let err = load_prelude_source("(def {a} 1)\n(oops 2)", &env).unwrap_err();
    assert!(matches!(err, EvalError::InExpression { .. }));
    assert_eq!(err.to_string(), "error in expression '(oops 2)': unbound symbol 'oops'");
}

// ============================================================================
// Atoms, functions, scoping
// ============================================================================

#[test]
fn test_atoms() {
    check_session(&[("nil", "{}"), ("true", "1"), ("false", "0"), ("otherwise", "1")]);
}

#[test]
fn test_fun_and_flip() {
    check_session(&[
        ("fun {add-together x y} {+ x y}", "()"),
        ("add-together 1 2", "3"),
        ("flip def 1 {x}", "()"),
        ("x", "1"),
        ("flip - 1 10", "9"),
    ]);
}

#[test]
fn test_comp_partial_rendering() {
    check_session(&[
        ("def {neg-sq} (comp - (\\ {x} {* x x}))", "()"),
        ("neg-sq 4", "-16"),
        ("comp head tail", "(\\ {x} {f (g x)})"),
    ]);
}

#[test]
fn test_let_and_do_do_not_leak() {
    let env = prelude_env();
    let result = eval_str(&env, "let {do (= {x} 100) (x)}").unwrap();
    assert_eq!(result, Value::number(100));
    assert!(matches!(eval_str(&env, "x"), Err(EvalError::UnboundSymbol(_))));

    assert_eq!(eval_str(&env, "do (+ 1 1) (+ 2 2)").unwrap(), Value::number(4));
}

#[test]
fn test_ghost_and_logic() {
    check_session(&[
        ("ghost + 1 2", "3"),
        ("not true", "0"),
        ("not false", "1"),
        ("and true false", "0"),
        ("or true false", "1"),
    ]);
}

#[test]
fn test_curry_uncurry() {
    check_session(&[
        ("curry + {5 6 7}", "18"),
        ("uncurry head 5 6 7", "{5}"),
        ("unpack * {2 3 4}", "24"),
        ("pack tail 1 2 3", "{2 3}"),
    ]);
}

// ============================================================================
// List functions
// ============================================================================

#[test]
fn test_list_access() {
    check_session(&[
        ("fst {1 2 3}", "1"),
        ("snd {1 2 3}", "2"),
        ("trd {1 2 3}", "3"),
        ("nth 0 {5 6 7}", "5"),
        ("nth 2 {5 6 7}", "7"),
        ("last {5 6 7}", "7"),
        ("init {5 6 7}", "{5 6}"),
        ("len {}", "0"),
        ("len {1 2 3 4}", "4"),
    ]);
}

#[test]
fn test_list_slicing() {
    check_session(&[
        ("take 2 {1 2 3 4}", "{1 2}"),
        ("drop 2 {1 2 3 4}", "{3 4}"),
        ("split 1 {1 2 3}", "{{1} {2 3}}"),
        ("elem 3 {1 2 3}", "1"),
        ("elem 9 {1 2 3}", "0"),
        ("reverse {1 2 3 4}", "{4 3 2 1}"),
        ("reverse {}", "{}"),
    ]);
}

#[test]
fn test_higher_order() {
    check_session(&[
        ("map - {5 6 7 8 2 22 44}", "{-5 -6 -7 -8 -2 -22 -44}"),
        ("map (\\ {x} {+ x 10}) {5 2 11}", "{15 12 21}"),
        ("filter (\\ {x} {> x 2}) {5 2 11 -7 8 1}", "{5 11 8}"),
        ("foldl + 0 {1 2 3}", "6"),
        ("foldr - 0 {1 2 3}", "2"),
        ("sum {1 2 3 4}", "10"),
        ("product {1 2 3 4}", "24"),
    ]);
}

#[test]
fn test_map_print_collects_units() {
    let host = Rc::new(CaptureHost::default());
    let env = new_root_environment(host.clone());
    load_prelude(&env).unwrap();

    let result = eval_str(&env, "map print {\"hello\" 2}").unwrap();
    assert_eq!(result.to_string(), "{() ()}");
    assert_eq!(*host.lines.borrow(), vec!["\"hello\"".to_string(), "2".to_string()]);
}

#[test]
fn test_take_and_drop_while() {
    check_session(&[
        ("take-while (\\ {x} {< x 3}) {1 2 3 4 1}", "{1 2}"),
        ("drop-while (\\ {x} {< x 3}) {1 2 3 4 1}", "{3 4 1}"),
        ("take-while (\\ {x} {< x 9}) {1 2}", "{1 2}"),
        ("drop-while (\\ {x} {< x 9}) {1 2}", "{}"),
    ]);
}

#[test]
fn test_zip_unzip_lookup() {
    check_session(&[
        ("zip {1 2 3} {4 5 6}", "{{1 4} {2 5} {3 6}}"),
        ("zip {1 2} {}", "{}"),
        ("unzip {{1 4} {2 5} {3 6}}", "{{1 2 3} {4 5 6}}"),
        ("lookup 2 {{1 \"one\"} {2 \"two\"}}", "\"two\""),
    ]);
}

#[test]
fn test_lookup_missing_key() {
    let env = prelude_env();
    let err = eval_str(&env, "lookup 3 {{1 2}}").unwrap_err();
    assert!(matches!(err, EvalError::User(ref msg) if msg == "No Element Found"));
}

#[test]
fn test_min_max() {
    check_session(&[("min 5 2 9", "2"), ("max 5 2 9", "9"), ("min 4", "4")]);
}

// ============================================================================
// Conditionals
// ============================================================================

#[test]
fn test_select_and_case() {
    check_session(&[
        ("select {(== 1 2) 10} {otherwise 20}", "20"),
        ("select {true 10} {otherwise 20}", "10"),
        ("case 2 {1 \"one\"} {2 \"two\"}", "\"two\""),
        (
            "fun {month-day-suffix i} {select {(== i 1) \"st\"} {(== i 2) \"nd\"} {otherwise \"th\"}}",
            "()",
        ),
        ("month-day-suffix 2", "\"nd\""),
        ("month-day-suffix 7", "\"th\""),
    ]);
}

#[test]
fn test_exhausted_select_waits_for_clauses() {
    // With every clause consumed the variadic has nothing left to bind
    let env = prelude_env();
    let result = eval_str(&env, "select {false 1}").unwrap();
    assert!(matches!(result, Value::Lambda(_)));
}

#[test]
fn test_fib() {
    check_session(&[("fib 0", "0"), ("fib 1", "1"), ("fib 10", "55")]);
}
