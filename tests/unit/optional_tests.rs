use optional_int::{OptionalInt, OptionalIntError};
use rstest::rstest;

use crate::common::{
    assert_empty, assert_holds,
    fixtures::{empty, filled},
};

#[rstest]
fn test_default_is_empty(empty: OptionalInt) {
    assert_empty(&empty);
    assert_eq!(OptionalInt::default(), empty);
}

#[rstest]
#[case(10)]
#[case(0)]
#[case(-1)]
#[case(i32::MIN)]
#[case(i32::MAX)]
fn test_with_value_holds_value(#[case] value: i32) {
    assert_holds(&OptionalInt::with_value(value), value);
    assert_holds(&OptionalInt::from(value), value);
}

#[rstest]
fn test_set_on_empty(mut empty: OptionalInt) {
    empty.set(20);
    assert_holds(&empty, 20);
}

#[rstest]
fn test_set_overwrites(mut filled: OptionalInt) {
    assert_holds(&filled, 42);
    filled.set(-3);
    assert_holds(&filled, -3);
}

#[rstest]
fn test_value_on_empty_fails(empty: OptionalInt) {
    assert_eq!(empty.value(), Err(OptionalIntError::Empty));
    assert_eq!(
        empty.value().unwrap_err().to_string(),
        "no value present"
    );
}

#[test]
fn test_copy_is_independent() {
    let a = OptionalInt::with_value(30);
    let mut b = a.clone();
    assert_holds(&a, 30);
    assert_holds(&b, 30);

    b.set(100);
    assert_holds(&a, 30);
    assert_holds(&b, 100);
}

#[test]
fn test_copy_source_mutation_leaves_copy() {
    let mut a = OptionalInt::with_value(30);
    let b = a.clone();
    a.set(-30);
    assert_holds(&a, -30);
    assert_holds(&b, 30);

    a.reset();
    assert_holds(&b, 30);
}

#[rstest]
fn test_copy_of_empty_is_empty(empty: OptionalInt) {
    let copy = empty.clone();
    assert_empty(&copy);
}

#[test]
fn test_assignment() {
    let a = OptionalInt::with_value(40);
    let mut b = OptionalInt::with_value(50);
    b.clone_from(&a);
    assert_holds(&a, 40);
    assert_holds(&b, 40);

    b.set(41);
    assert_holds(&a, 40);
}

#[test]
fn test_self_assignment_preserves_value() {
    let mut b = OptionalInt::with_value(40);
    let snapshot = b.clone();
    b.clone_from(&snapshot);
    assert_holds(&b, 40);

    b.assign(&b.clone());
    assert_holds(&b, 40);

    let mut empty = OptionalInt::new();
    empty.assign(&empty.clone());
    assert_empty(&empty);
}

#[rstest]
fn test_assign_empty_clears(mut filled: OptionalInt, empty: OptionalInt) {
    filled.assign(&empty);
    assert_empty(&filled);
}

#[test]
fn test_swap_values() {
    let mut a = OptionalInt::with_value(60);
    let mut b = OptionalInt::with_value(70);
    a.swap(&mut b);
    assert_holds(&a, 70);
    assert_holds(&b, 60);
}

#[rstest]
fn test_swap_with_empty(mut filled: OptionalInt, mut empty: OptionalInt) {
    filled.swap(&mut empty);
    assert_empty(&filled);
    assert_holds(&empty, 42);

    filled.swap(&mut empty);
    assert_holds(&filled, 42);
    assert_empty(&empty);
}

#[test]
fn test_swap_both_empty() {
    let mut a = OptionalInt::new();
    let mut b = OptionalInt::new();
    a.swap(&mut b);
    assert_empty(&a);
    assert_empty(&b);
}

#[rstest]
fn test_take_leaves_empty(mut filled: OptionalInt) {
    assert_eq!(filled.take(), Some(42));
    assert_empty(&filled);
    assert_eq!(filled.take(), None);
}

#[rstest]
fn test_reset(mut filled: OptionalInt) {
    filled.reset();
    assert_empty(&filled);
    filled.set(1);
    assert_holds(&filled, 1);
}

#[rstest]
fn test_get_and_value_or(filled: OptionalInt, empty: OptionalInt) {
    assert_eq!(filled.get(), Some(42));
    assert_eq!(empty.get(), None);
    assert_eq!(filled.value_or(0), 42);
    assert_eq!(empty.value_or(-1), -1);
}

#[test]
fn test_option_conversions() {
    assert_holds(&OptionalInt::from(Some(5)), 5);
    assert_empty(&OptionalInt::from(None));
    assert_eq!(Option::<i32>::from(OptionalInt::with_value(8)), Some(8));
    assert_eq!(Option::<i32>::from(OptionalInt::new()), None);
}
