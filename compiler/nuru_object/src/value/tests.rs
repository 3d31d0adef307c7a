use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;
use crate::environment::{Environment, LocalScope};

fn first_arg(args: &[Value]) -> Value {
    args.first().cloned().unwrap_or(Value::Null)
}

fn function(params: &[&str], body: &str) -> FunctionValue {
    let body: Rc<dyn FunctionBody> = Rc::new(body.to_string());
    FunctionValue::new(
        params.iter().map(|p| (*p).to_string()).collect(),
        body,
        LocalScope::new(Environment::new()),
    )
}

// Rendering

#[test]
fn primitives_render() {
    assert_eq!(Value::int(-42).inspect(), "-42");
    assert_eq!(Value::bool(true).inspect(), "kweli");
    assert_eq!(Value::bool(false).inspect(), "sikweli");
    assert_eq!(Value::Null.inspect(), "null");
    assert_eq!(Value::string("habari dunia").inspect(), "habari dunia");
}

#[test]
fn floats_render_shortest_decimal() {
    assert_eq!(Value::float(1.5).inspect(), "1.5");
    assert_eq!(Value::float(3.0).inspect(), "3");
    assert_eq!(Value::float(0.1).inspect(), "0.1");
    assert_eq!(Value::float(-0.25).inspect(), "-0.25");
    assert_eq!(Value::float(1e21).inspect(), "1000000000000000000000");
    assert_eq!(Value::float(f64::INFINITY).inspect(), "+Inf");
    assert_eq!(Value::float(f64::NEG_INFINITY).inspect(), "-Inf");
    assert_eq!(Value::float(f64::NAN).inspect(), "NaN");
}

#[test]
fn arrays_render_elements() {
    assert_eq!(Value::array(vec![]).inspect(), "[]");
    let nested = Value::array(vec![
        Value::int(1),
        Value::string("mbili"),
        Value::array(vec![Value::bool(true), Value::Null]),
    ]);
    assert_eq!(nested.inspect(), "[1, mbili, [kweli, null]]");
}

#[test]
fn empty_dict_renders_braces() {
    assert_eq!(Value::dict(DictValue::new()).inspect(), "{}");
}

#[test]
fn dict_renders_every_pair_once() {
    let dict = Value::dict_from_pairs([
        (Value::string("b"), Value::int(2)),
        (Value::string("a"), Value::int(1)),
        (Value::int(3), Value::bool(false)),
    ])
    .unwrap_or_else(|err| panic!("string and integer keys are hashable: {err}"));

    let text = dict.inspect();
    assert!(text.starts_with('{') && text.ends_with('}'), "{text}");

    let mut parts: Vec<&str> = text[1..text.len() - 1].split(", ").collect();
    parts.sort_unstable();
    assert_eq!(parts, vec!["3: sikweli", "a: 1", "b: 2"]);
}

#[test]
fn function_renders_params_and_body() {
    let func = Value::function(function(&["x", "y"], "rudisha x + y;"));
    assert_eq!(func.inspect(), "unda(x, y) {\nrudisha x + y;\n}");

    let thunk = Value::function(function(&[], "andika(1);"));
    assert_eq!(thunk.inspect(), "unda() {\nandika(1);\n}");
}

#[test]
fn builtin_and_loop_signals_render_fixed_text() {
    assert_eq!(Value::builtin("kwanza", first_arg).inspect(), "builtin function");
    assert_eq!(Value::Break.inspect(), "break");
    assert_eq!(Value::Continue.inspect(), "continue");
}

#[test]
fn return_renders_inner_value() {
    let ret = Value::return_value(Value::array(vec![Value::int(7)]));
    assert_eq!(ret.inspect(), "[7]");
}

#[test]
fn error_renders_plain_label() {
    let err = Value::error("kigezo hakijafafanuliwa: x");
    assert_eq!(err.inspect(), "Kosa: kigezo hakijafafanuliwa: x");
    assert!(!err.inspect().contains('\x1b'));
}

#[test]
fn deeply_nested_array_renders() {
    let mut value = Value::int(0);
    for _ in 0..2_000 {
        value = Value::array(vec![value]);
    }
    let text = value.inspect();
    assert!(text.starts_with("[[[["));
    assert_eq!(text.len(), 4_001);
}

// Kinds and predicates

#[test]
fn every_variant_reports_its_kind() {
    let cases = [
        (Value::int(1), Kind::Integer),
        (Value::float(1.0), Kind::Float),
        (Value::bool(true), Kind::Boolean),
        (Value::Null, Kind::Null),
        (Value::string(""), Kind::String),
        (Value::array(vec![]), Kind::Array),
        (Value::dict(DictValue::new()), Kind::Dict),
        (Value::function(function(&[], "")), Kind::Function),
        (Value::builtin("kwanza", first_arg), Kind::Builtin),
        (Value::return_value(Value::Null), Kind::Return),
        (Value::error("x"), Kind::Error),
        (Value::Continue, Kind::Continue),
        (Value::Break, Kind::Break),
    ];
    for (value, kind) in cases {
        assert_eq!(value.kind(), kind, "{value:?}");
    }
}

#[test]
fn only_false_and_null_are_falsy() {
    assert!(!Value::bool(false).is_truthy());
    assert!(!Value::Null.is_truthy());

    assert!(Value::bool(true).is_truthy());
    assert!(Value::int(0).is_truthy());
    assert!(Value::float(0.0).is_truthy());
    assert!(Value::string("").is_truthy());
    assert!(Value::array(vec![]).is_truthy());
}

#[test]
fn signals_are_flagged() {
    assert!(Value::return_value(Value::int(1)).is_signal());
    assert!(Value::error("x").is_signal());
    assert!(Value::Break.is_signal());
    assert!(Value::Continue.is_signal());

    assert!(!Value::int(1).is_signal());
    assert!(!Value::Null.is_signal());
    assert!(Value::error("x").is_error());
    assert!(!Value::Break.is_error());
}

#[test]
fn unwrap_return_peels_one_layer() {
    assert_eq!(Value::return_value(Value::int(5)).unwrap_return(), Value::int(5));

    let twice = Value::return_value(Value::return_value(Value::int(5)));
    assert_eq!(twice.unwrap_return(), Value::return_value(Value::int(5)));

    let err = Value::error("x");
    assert_eq!(err.clone().unwrap_return(), err);
    assert_eq!(Value::int(3).unwrap_return(), Value::int(3));
}

#[test]
fn try_iter_rejects_scalars() {
    assert_eq!(
        Value::int(1).try_iter().err(),
        Some(ObjectError::NotIterable { kind: Kind::Integer })
    );
    assert!(Value::string("ab").try_iter().is_ok());
}

// Accessors

#[test]
fn accessors_match_only_their_variant() {
    assert_eq!(Value::int(9).as_int(), Some(9));
    assert_eq!(Value::float(9.0).as_int(), None);
    assert_eq!(Value::int(9).as_float(), None);
    assert_eq!(Value::bool(true).as_bool(), Some(true));
    assert_eq!(Value::string("jina").as_str(), Some("jina"));
    assert_eq!(Value::Null.as_str(), None);
    assert_eq!(
        Value::array(vec![Value::int(1)]).as_array(),
        Some(&[Value::int(1)][..])
    );
    assert!(Value::dict(DictValue::new())
        .as_dict()
        .is_some_and(DictValue::is_empty));
    assert_eq!(
        Value::error("hitilafu").as_error().map(ErrorValue::message),
        Some("hitilafu")
    );
    assert_eq!(
        Value::builtin("kwanza", first_arg)
            .as_builtin()
            .map(BuiltinValue::name),
        Some("kwanza")
    );
    assert_eq!(
        Value::function(function(&["a", "b"], ""))
            .as_function()
            .map(FunctionValue::arity),
        Some(2)
    );
}

#[test]
fn builtin_call_forwards_arguments() {
    let Value::Builtin(builtin) = Value::builtin("kwanza", first_arg) else {
        panic!("builtin factory builds a builtin");
    };
    assert_eq!(builtin.call(&[Value::int(4), Value::int(5)]), Value::int(4));
    assert_eq!(builtin.call(&[]), Value::Null);
}

// Equality

#[test]
fn equality_requires_same_kind() {
    assert_eq!(Value::int(1), Value::int(1));
    assert_ne!(Value::int(1), Value::float(1.0));
    assert_ne!(Value::int(1), Value::string("1"));
    assert_ne!(Value::Break, Value::Continue);
    assert_ne!(Value::float(f64::NAN), Value::float(f64::NAN));
}

#[test]
fn containers_compare_structurally() {
    let a = Value::array(vec![Value::int(1), Value::string("x")]);
    let b = Value::array(vec![Value::int(1), Value::string("x")]);
    assert_eq!(a, b);

    let d1 = Value::dict_from_pairs([
        (Value::int(1), Value::Null),
        (Value::bool(true), Value::int(2)),
    ]);
    let d2 = Value::dict_from_pairs([
        (Value::bool(true), Value::int(2)),
        (Value::int(1), Value::Null),
    ]);
    assert_eq!(d1, d2);
}

#[test]
fn functions_compare_by_identity() {
    let f = function(&["x"], "rudisha x;");
    let g = function(&["x"], "rudisha x;");
    assert_eq!(Value::function(f.clone()), Value::function(f.clone()));
    assert_ne!(Value::function(f), Value::function(g));
}

#[test]
fn dict_from_pairs_rejects_unhashable_key() {
    let result = Value::dict_from_pairs([(Value::array(vec![]), Value::int(1))]);
    assert_eq!(
        result.err(),
        Some(ObjectError::NotHashable { kind: Kind::Array })
    );
}

#[test]
fn dict_from_pairs_keeps_last_duplicate() {
    let dict = Value::dict_from_pairs([
        (Value::string("k"), Value::int(1)),
        (Value::string("k"), Value::int(2)),
    ])
    .unwrap_or_else(|err| panic!("string keys are hashable: {err}"));
    let Some(inner) = dict.as_dict() else {
        panic!("dict factory builds a dict");
    };
    assert_eq!(inner.len(), 1);
    assert_eq!(inner.get(&Value::string("k")), Ok(Some(&Value::int(2))));
}

#[test]
fn nan_inside_containers_is_never_equal() {
    let nans = Value::array(vec![Value::float(f64::NAN)]);
    let shared = nans.clone();
    assert_ne!(nans, shared);
    assert_ne!(nans, Value::array(vec![Value::float(f64::NAN)]));
}

#[test]
fn dict_contains_and_removes_by_identity() {
    let mut dict = DictValue::new();
    assert_eq!(dict.insert(Value::int(1), Value::string("moja")), Ok(None));
    assert_eq!(dict.insert(Value::string("1"), Value::string("neno")), Ok(None));

    assert_eq!(dict.contains_key(&Value::int(1)), Ok(true));
    assert_eq!(dict.contains_key(&Value::float(1.0)), Ok(false));

    assert_eq!(dict.remove(&Value::int(1)), Ok(Some(Value::string("moja"))));
    assert_eq!(dict.remove(&Value::int(1)), Ok(None));
    assert_eq!(dict.contains_key(&Value::int(1)), Ok(false));
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.contains_key(&Value::string("1")), Ok(true));
}

#[test]
fn dict_lookup_with_unhashable_key_reports_kind() {
    let mut dict = DictValue::new();
    assert_eq!(dict.insert(Value::bool(true), Value::Null), Ok(None));

    let key = Value::function(function(&[], "rudisha 1;"));
    let expected = ObjectError::NotHashable {
        kind: Kind::Function,
    };
    assert_eq!(dict.contains_key(&key), Err(expected));
    assert_eq!(dict.remove(&key), Err(expected));
    assert_eq!(
        dict.remove(&Value::array(vec![])),
        Err(ObjectError::NotHashable { kind: Kind::Array })
    );
    assert_eq!(dict.len(), 1);
}
