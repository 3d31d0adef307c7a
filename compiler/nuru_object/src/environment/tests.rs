use std::rc::Rc;

use super::*;
use crate::value::{FunctionBody, FunctionValue};

#[test]
fn define_then_get() {
    let mut env = Environment::new();
    assert_eq!(env.define("x", Value::int(42)), Value::int(42));
    assert_eq!(env.get("x"), Some(Value::int(42)));
    assert_eq!(env.get("y"), None);
}

#[test]
fn inner_scope_sees_outer_bindings() {
    let outer = LocalScope::new(Environment::new());
    outer.borrow_mut().define("jina", Value::string("Nuru"));

    let inner = Environment::enclosed(outer.clone());
    assert_eq!(inner.get("jina"), Some(Value::string("Nuru")));
    assert!(!inner.has_local("jina"));
    assert!(inner.outer().is_some_and(|o| o.ptr_eq(&outer)));
}

#[test]
fn define_shadows_outer() {
    let outer = LocalScope::new(Environment::new());
    outer.borrow_mut().define("x", Value::int(1));

    let mut inner = Environment::enclosed(outer.clone());
    inner.define("x", Value::int(2));

    assert_eq!(inner.get("x"), Some(Value::int(2)));
    assert_eq!(outer.borrow().get("x"), Some(Value::int(1)));
}

#[test]
fn assign_updates_defining_scope() {
    let outer = LocalScope::new(Environment::new());
    outer.borrow_mut().define("hesabu", Value::int(0));

    let mut inner = Environment::enclosed(outer.clone());
    assert_eq!(inner.assign("hesabu", Value::int(5)), Ok(()));

    assert!(!inner.has_local("hesabu"));
    assert_eq!(outer.borrow().get("hesabu"), Some(Value::int(5)));
}

#[test]
fn assign_to_unknown_name_fails() {
    let mut env = Environment::enclosed(LocalScope::new(Environment::new()));
    assert_eq!(env.assign("haipo", Value::Null), Err(AssignError::Undefined));
}

#[test]
fn closure_observes_later_definitions() {
    let scope = LocalScope::new(Environment::new());
    let body: Rc<dyn FunctionBody> = Rc::new(String::from("rudisha f(n);"));
    let func = FunctionValue::new(vec!["n".to_string()], body, scope.clone());

    // Binding the function in its own scope creates the cycle recursion needs
    scope.borrow_mut().define("f", Value::function(func.clone()));

    let seen = func.env().borrow().get("f");
    assert_eq!(seen, Some(Value::function(func)));
}

#[test]
fn debug_output_terminates_on_cycles() {
    let scope = LocalScope::new(Environment::new());
    let body: Rc<dyn FunctionBody> = Rc::new(String::from("f();"));
    let func = FunctionValue::new(vec![], body, scope.clone());
    scope.borrow_mut().define("f", Value::function(func));

    let text = format!("{:?}", scope.borrow());
    assert!(text.contains("FunctionValue"));
}

#[test]
fn function_keeps_defining_scope_alive() {
    let func = {
        let scope = LocalScope::new(Environment::new());
        scope.borrow_mut().define("msingi", Value::int(10));
        let body: Rc<dyn FunctionBody> = Rc::new(String::from("rudisha msingi;"));
        FunctionValue::new(vec![], body, scope)
    };
    // Every other handle is gone; the scope lives on through the function
    assert_eq!(func.env().borrow().get("msingi"), Some(Value::int(10)));
}
