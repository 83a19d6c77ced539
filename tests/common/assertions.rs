//! Custom test assertions

use storefront_ai::core::matcher::CandidateScore;
use storefront_ai::core::providers::{ErrorKind, ProviderId};
use storefront_ai::core::router::OperationResult;

/// Assertions for router outcomes
pub trait OperationResultAssertions {
    /// Assert success served by `provider` after `attempts` attempts
    fn assert_served_by(&self, provider: ProviderId, attempts: u32);

    /// Assert failure of the given kind
    fn assert_failed_with(&self, kind: ErrorKind);
}

impl<T: std::fmt::Debug> OperationResultAssertions for OperationResult<T> {
    fn assert_served_by(&self, provider: ProviderId, attempts: u32) {
        assert!(self.is_success(), "Expected success, got {:?}", self);
        assert_eq!(self.provider(), provider, "Served by the wrong provider");
        assert_eq!(self.attempts(), attempts, "Unexpected attempt count");
    }

    fn assert_failed_with(&self, kind: ErrorKind) {
        assert_eq!(self.kind(), Some(kind), "Unexpected outcome {:?}", self);
    }
}

/// Assert recommendations are capped and sorted by confidence
pub fn assert_ranked(recommendations: &[CandidateScore]) {
    assert!(recommendations.len() <= 3, "More than 3 recommendations");
    for pair in recommendations.windows(2) {
        assert!(
            pair[0].confidence >= pair[1].confidence,
            "Recommendations not sorted: {:?}",
            recommendations
        );
    }
    for candidate in recommendations {
        assert!(candidate.confidence > 0.0 && candidate.confidence <= 1.0);
    }
}

/// Assert two values are approximately equal (for floats)
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        assert_approx_eq!($left, $right, 1e-6_f64)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {
        let left_val: f64 = $left as f64;
        let right_val: f64 = $right as f64;
        let diff = (left_val - right_val).abs();
        assert!(
            diff < $epsilon,
            "assertion failed: `(left ~ right)`\n  left: `{:?}`,\n right: `{:?}`",
            left_val,
            right_val
        );
    };
}
