//! Tukey's method
//!
//! Two "fences" split a sample into "normal" observations and outliers. The
//! fences are computed from the quartiles of the sample:
//!
//! ``` ignore
//! // q1, q3 are the first and third quartiles
//! let iqr = q3 - q1;  // The interquartile range
//! let (lower, upper) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);  // the "fences"
//!
//! let is_outlier = |x| x < lower || x > upper;
//! ```
//!
//! The fences are derived purely from the quartiles and are *not* clamped to
//! the observed extrema; when the IQR is small relative to the skew of the
//! sample, a fence may lie well outside the observed range (or, when the IQR
//! is zero, both fences collapse onto the quartiles).

use crate::stats::float::Float;
use crate::stats::Sample;

/// Box-plot summary of one sample: extrema, type-7 quartiles, Tukey fences
/// and the sample size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistributionStats<A>
where
    A: Float,
{
    pub min: A,
    pub lower_fence: A,
    pub q1: A,
    pub median: A,
    pub q3: A,
    pub upper_fence: A,
    pub max: A,
    pub n: usize,
}

impl<A> DistributionStats<A>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    /// Summarizes the sample
    ///
    /// - Time: `O(N log N) where N = length`
    pub fn from_sample(sample: &Sample<A>) -> DistributionStats<A> {
        let (q1, median, q3) = sample.percentiles().quartiles();
        let iqr = q3 - q1;
        let k = A::cast(1.5_f32);

        DistributionStats {
            min: sample.min(),
            lower_fence: q1 - k * iqr,
            q1,
            median,
            q3,
            upper_fence: q3 + k * iqr,
            max: sample.max(),
            n: sample.len(),
        }
    }

    /// Checks whether `x` lies inside the fences, both bounds inclusive
    pub fn contains(&self, x: A) -> bool {
        x >= self.lower_fence && x <= self.upper_fence
    }
}

#[cfg(test)]
mod test {
    use super::DistributionStats;
    use crate::stats::Sample;
    use approx::assert_relative_eq;
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn fences_bracket_the_quartiles() {
        let sample = [100., 200., 300., 400., 10_000.];
        let stats = DistributionStats::from_sample(Sample::new(&sample));

        assert_relative_eq!(stats.q1, 200.);
        assert_relative_eq!(stats.q3, 400.);
        assert_relative_eq!(stats.lower_fence, -100.);
        assert_relative_eq!(stats.upper_fence, 700.);
        assert_relative_eq!(stats.min, 100.);
        assert_relative_eq!(stats.max, 10_000.);
        assert_eq!(stats.n, 5);
    }

    #[test]
    fn fences_are_not_clamped_to_the_extrema() {
        // Upper fence (700) sits far below the observed max
        let sample = [100., 200., 300., 400., 10_000.];
        let stats = DistributionStats::from_sample(Sample::new(&sample));

        assert!(stats.upper_fence < stats.max);
        assert!(stats.lower_fence < stats.min);
    }

    #[test]
    fn singleton_sample_collapses_onto_the_value() {
        let stats = DistributionStats::from_sample(Sample::new(&[7.5]));

        assert_relative_eq!(stats.min, 7.5);
        assert_relative_eq!(stats.q1, 7.5);
        assert_relative_eq!(stats.median, 7.5);
        assert_relative_eq!(stats.q3, 7.5);
        assert_relative_eq!(stats.max, 7.5);
        assert_relative_eq!(stats.lower_fence, 7.5);
        assert_relative_eq!(stats.upper_fence, 7.5);
        assert_eq!(stats.n, 1);
    }

    #[test]
    fn contains_is_inclusive_on_both_fences() {
        let sample = [100., 200., 300., 400., 10_000.];
        let stats = DistributionStats::from_sample(Sample::new(&sample));

        assert!(stats.contains(stats.lower_fence));
        assert!(stats.contains(stats.upper_fence));
        assert!(!stats.contains(stats.upper_fence + 1e-6));
        assert!(!stats.contains(stats.lower_fence - 1e-6));
    }

    quickcheck! {
        fn fences_are_symmetric_around_the_quartiles(values: Vec<u32>) -> TestResult {
            if values.is_empty() {
                return TestResult::discard();
            }

            let values = values.iter().map(|&x| f64::from(x)).collect::<Vec<_>>();
            let stats = DistributionStats::from_sample(Sample::new(&values));
            let iqr = stats.q3 - stats.q1;

            let upper_gap = stats.upper_fence - stats.q3;
            let lower_gap = stats.q1 - stats.lower_fence;
            let tol = 1e-9 * (1. + iqr.abs());

            TestResult::from_bool(
                (upper_gap - 1.5 * iqr).abs() <= tol && (lower_gap - 1.5 * iqr).abs() <= tol,
            )
        }
    }
}
