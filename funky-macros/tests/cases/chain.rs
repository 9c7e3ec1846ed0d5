use funky_core::{left, right, Either};
use funky_macros::either;

fn increment_positive(x: i32) -> Either<String, i32> {
    if x > 0 {
        right(x + 1).into()
    } else {
        left("neg".to_string()).into()
    }
}

fn main() {
    let value = either! {
        x <- Either::<String, i32>::Right(2);
        y <- increment_positive(x);
        let z = y * 10;
        yield z
    };
    assert_eq!(value, Either::Right(30));

    let mut calls = 0;
    let value = either! {
        x <- increment_positive(-1);
        y <- increment_positive(x);
        yield {
            calls += 1;
            y
        }
    };
    assert_eq!(value, Either::Left("neg".to_string()));
    assert_eq!(calls, 0);
}
