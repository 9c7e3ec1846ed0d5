#![cfg(feature = "macros")]

use std::cell::Cell;

use funky::prelude::*;

fn halve(x: i32) -> Either<String, i32> {
    if x % 2 == 0 {
        right(x / 2).into()
    } else {
        left(format!("{} is odd", x)).into()
    }
}

#[test]
fn test_comprehension_matches_select_many() {
    let start = Either::<String, i32>::Right(8);
    let by_hand = start.clone().select_many(|x| halve(*x), |x, y| x + y);
    let by_macro = either! {
        x <- start;
        y <- halve(x);
        yield x + y
    };
    assert_eq!(by_macro, by_hand);
    assert_eq!(by_macro, Either::Right(12));
}

#[test]
fn test_comprehension_short_circuits() {
    let calls = Cell::new(0);
    let value = either! {
        x <- halve(3);
        y <- {
            calls.set(calls.get() + 1);
            halve(x)
        };
        yield y
    };
    assert_eq!(value, Either::Left("3 is odd".to_string()));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_comprehension_sequencing() {
    let value = either! {
        x <- halve(20);
        halve(x);
        let y = x + 1;
        halve(y)
    };
    assert_eq!(value, Either::Left("11 is odd".to_string()));
}
