use funky_core::Either;
use funky_macros::either;

fn ensure(condition: bool, message: &str) -> Either<String, ()> {
    if condition {
        Either::Right(())
    } else {
        Either::Left(message.to_string())
    }
}

fn parse(input: &str) -> Either<String, i32> {
    input.parse::<i32>().map_err(|e| e.to_string()).into()
}

fn checked_ratio(a: &str, b: &str) -> Either<String, i32> {
    either! {
        x <- parse(a);
        y <- parse(b);
        ensure(y != 0, "division by zero");
        Either::Right(x / y)
    }
}

fn main() {
    assert_eq!(checked_ratio("12", "4"), Either::Right(3));
    assert_eq!(
        checked_ratio("12", "0"),
        Either::Left("division by zero".to_string())
    );
    assert!(checked_ratio("x", "0").is_left());

    let (a, b) = (1, 2);
    let swapped: Either<String, (i32, i32)> = either! {
        (x, y) <- Either::<String, (i32, i32)>::Right((a, b));
        yield (y, x)
    };
    assert_eq!(swapped, Either::Right((2, 1)));
}
