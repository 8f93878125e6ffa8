use exercises::squares::{
    difference_of_squares, square_of_sum, sum_of_squares, SquaresError, MAX_SQUARE_OF_SUM_INPUT,
};

#[test]
fn small_known_values() {
    assert_eq!(square_of_sum(1), Ok(1));
    assert_eq!(sum_of_squares(1), Ok(1));
    assert_eq!(difference_of_squares(1), Ok(0));

    assert_eq!(square_of_sum(5), Ok(225));
    assert_eq!(sum_of_squares(5), Ok(55));
    assert_eq!(difference_of_squares(5), Ok(170));
}

#[test]
fn hundred() {
    assert_eq!(square_of_sum(100), Ok(25_502_500));
    assert_eq!(sum_of_squares(100), Ok(338_350));
    assert_eq!(difference_of_squares(100), Ok(25_164_150));
}

#[test]
fn zero_yields_zero() {
    assert_eq!(difference_of_squares(0), Ok(0));
}

#[test]
fn square_of_sum_limit_is_exact() {
    assert_eq!(
        square_of_sum(MAX_SQUARE_OF_SUM_INPUT),
        Ok(4_294_930_221u64 * 4_294_930_221u64)
    );
    assert_eq!(
        square_of_sum(MAX_SQUARE_OF_SUM_INPUT + 1),
        Err(SquaresError::Overflow {
            number: MAX_SQUARE_OF_SUM_INPUT + 1,
            operation: "square_of_sum"
        })
    );
    assert!(difference_of_squares(MAX_SQUARE_OF_SUM_INPUT).is_ok());
    assert!(difference_of_squares(MAX_SQUARE_OF_SUM_INPUT + 1).is_err());
}
