use super::*;
use crate::{Dynamic, List};

type IntFn = dyn Fn(i64) -> i64 + Send + Sync;

fn erased(f: impl Fn(i64) -> i64 + Send + Sync + 'static) -> FunctionValue<IntFn> {
    let shared: Shared<IntFn> = Shared::new(f);
    FunctionValue::from_shared(shared)
}

#[test]
fn calls_through_the_handle() {
    let inc = erased(|x| x + 1);
    assert_eq!((inc.get())(41), 42);
    assert_eq!((*inc)(1), 2);

    let concrete = FunctionValue::new(|x: i64| x * 2);
    assert_eq!((concrete.get())(4), 8);
}

#[test]
fn function_equals_only_itself() {
    let f = erased(|x| x);
    let g = erased(|x| x);
    assert!(f.equal(&f));
    assert!(f.equal(&f.clone()));
    assert!(!f.equal(&g));
}

#[test]
fn every_function_hashes_to_nil() {
    let f = erased(|x| x);
    let g = erased(|x| x - 1);
    assert_eq!(f.hash32(), NIL_HASH);
    assert_eq!(g.hash32(), NIL_HASH);
}

#[test]
fn functions_inside_aggregates() {
    let f = erased(|x| x);
    let xs = List::from_slice(&[f.clone(), f.clone()]);
    let ys = List::from_slice(&[f.clone(), f]);
    assert!(xs.equal(&ys));
    assert_eq!(xs.hash32(), ys.hash32());
}

#[test]
fn erases_to_dynamic() {
    let f = erased(|x| x);
    let d = Dynamic::new(f.clone());
    assert!(d.equal(&Dynamic::new(f)));
    assert!(!d.equal(&Dynamic::new(erased(|x| x))));
}

#[test]
fn debug_is_opaque() {
    assert_eq!(format!("{:?}", erased(|x| x)), "<function>");
}
