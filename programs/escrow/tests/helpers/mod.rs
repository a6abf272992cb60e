
pub use escrow_test_helpers::*;
