//! Triangular Membership Function

use crate::MembershipError;
use serde::{Deserialize, Serialize};

/// Triangular membership function over breakpoints a <= b <= c.
///
/// Rises linearly from 0 at `a` to 1 at the peak `b`, falls linearly back to
/// 0 at `c`, and is 0 outside `[a, c]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangular {
    pub(crate) a: f64,
    pub(crate) b: f64,
    pub(crate) c: f64,
}

impl Triangular {
    /// Create a triangular function, rejecting unordered breakpoints
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, MembershipError> {
        if a <= b && b <= c {
            Ok(Self { a, b, c })
        } else {
            Err(MembershipError::UnorderedBreakpoints { a, b, c })
        }
    }

    /// Membership degree at `x`, always in [0, 1].
    ///
    /// Degenerate edges (a == b or b == c) are vertical: the collapsed side
    /// contributes full membership instead of dividing by zero.
    pub fn evaluate(&self, x: f64) -> f64 {
        if x < self.a || x > self.c {
            return 0.0;
        }
        let rising = if self.b > self.a {
            (x - self.a) / (self.b - self.a)
        } else {
            1.0
        };
        let falling = if self.c > self.b {
            (self.c - x) / (self.c - self.b)
        } else {
            1.0
        };
        rising.min(falling).clamp(0.0, 1.0)
    }

    /// Peak breakpoint
    pub fn peak(&self) -> f64 {
        self.b
    }

    /// Support interval `[a, c]` outside which membership is 0
    pub fn support(&self) -> (f64, f64) {
        (self.a, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_peak_is_one() {
        let mf = Triangular::new(-80.0, -60.0, -50.0).unwrap();
        assert_eq!(mf.evaluate(-60.0), 1.0);
    }

    #[test]
    fn test_zero_at_and_beyond_outer_breakpoints() {
        let mf = Triangular::new(-80.0, -60.0, -50.0).unwrap();
        assert_eq!(mf.evaluate(-80.0), 0.0);
        assert_eq!(mf.evaluate(-50.0), 0.0);
        assert_eq!(mf.evaluate(-100.0), 0.0);
        assert_eq!(mf.evaluate(0.0), 0.0);
    }

    #[test]
    fn test_linear_between_breakpoints() {
        let mf = Triangular::new(-80.0, -60.0, -50.0).unwrap();
        assert!((mf.evaluate(-70.0) - 0.5).abs() < 1e-12);
        assert!((mf.evaluate(-55.0) - 0.5).abs() < 1e-12);
        assert!((mf.evaluate(-65.0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_rising_edge() {
        // a == b: vertical rise, full membership at the peak
        let mf = Triangular::new(0.0, 0.0, 10.0).unwrap();
        assert_eq!(mf.evaluate(0.0), 1.0);
        assert!((mf.evaluate(5.0) - 0.5).abs() < 1e-12);
        assert_eq!(mf.evaluate(10.0), 0.0);
    }

    #[test]
    fn test_degenerate_falling_edge() {
        let mf = Triangular::new(0.0, 10.0, 10.0).unwrap();
        assert_eq!(mf.evaluate(10.0), 1.0);
        assert!((mf.evaluate(5.0) - 0.5).abs() < 1e-12);
        assert_eq!(mf.evaluate(0.0), 0.0);
    }

    #[test]
    fn test_unordered_breakpoints_rejected() {
        assert!(Triangular::new(10.0, 0.0, 20.0).is_err());
        assert!(Triangular::new(0.0, 20.0, 10.0).is_err());
    }

    proptest! {
        #[test]
        fn prop_membership_in_unit_interval(
            a in -100.0f64..0.0,
            rise in 0.0f64..50.0,
            fall in 0.0f64..50.0,
            x in -200.0f64..200.0,
        ) {
            let mf = Triangular::new(a, a + rise, a + rise + fall).unwrap();
            let degree = mf.evaluate(x);
            prop_assert!((0.0..=1.0).contains(&degree));
        }

        #[test]
        fn prop_zero_outside_support(
            a in -100.0f64..0.0,
            rise in 0.1f64..50.0,
            fall in 0.1f64..50.0,
            offset in 0.001f64..100.0,
        ) {
            let mf = Triangular::new(a, a + rise, a + rise + fall).unwrap();
            let (lo, hi) = mf.support();
            prop_assert_eq!(mf.evaluate(lo - offset), 0.0);
            prop_assert_eq!(mf.evaluate(hi + offset), 0.0);
        }
    }
}
