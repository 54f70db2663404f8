pub mod liquidate_test;
pub mod repay_test;
pub mod test_helpers;
