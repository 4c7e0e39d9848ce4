use super::*;
use crate::{List, ResultValue};

#[test]
fn hash_delegates_to_wrapped_value() {
    assert_eq!(Dynamic::new(42_i64).hash32(), 42_i64.hash32());
    assert_eq!(
        Dynamic::new("hi".to_string()).hash32(),
        "hi".to_string().hash32()
    );
}

#[test]
fn equal_values_of_same_type_are_equal() {
    let a = Dynamic::new(List::from_slice(&[1_i64, 2]));
    let b = Dynamic::new(List::from_slice(&[1_i64, 2]));
    assert!(a.equal(&b));
    assert_eq!(a.hash32(), b.hash32());
}

#[test]
fn different_types_are_never_equal() {
    // `()` and the empty string share a hash but not a type.
    let nil = Dynamic::new(());
    let empty = Dynamic::new(String::new());
    assert_eq!(nil.hash32(), empty.hash32());
    assert!(!nil.equal(&empty));
}

#[test]
fn downcast_recovers_concrete_value() {
    let d = Dynamic::new(ResultValue::<i64, String>::Ok(3));
    assert!(d.is::<ResultValue<i64, String>>());
    assert!(!d.is::<i64>());
    assert_eq!(
        d.downcast_ref::<ResultValue<i64, String>>()
            .and_then(|r| r.try_as_ok().ok())
            .copied(),
        Some(3)
    );
    assert!(d.downcast_ref::<String>().is_none());
}

#[test]
fn clones_share_storage() {
    let a = Dynamic::new(7_i64);
    let b = a.clone();
    assert!(a.ptr_eq(&b));
    assert!(a.equal(&b));
    assert!(!a.ptr_eq(&Dynamic::new(7_i64)));
}

#[test]
fn type_name_reports_wrapped_type() {
    assert_eq!(Dynamic::new(1_i64).type_name(), "i64");
    assert_eq!(Dynamic::new(true).type_name(), "bool");
}

#[test]
fn debug_shows_wrapped_value() {
    assert_eq!(format!("{:?}", Dynamic::new(5_i64)), "Dynamic(5)");
}

#[cfg(not(feature = "single-threaded"))]
#[test]
fn dynamic_values_cross_threads() {
    let d = Dynamic::new(List::from_slice(&["a".to_string(), "b".to_string()]));
    let expected = d.hash32();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let d = d.clone();
            std::thread::spawn(move || d.hash32())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().ok(), Some(expected));
    }
}
