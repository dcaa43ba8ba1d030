use crate::stats::float::Float;
use cast::usize;

/// A sorted "view" into the percentiles of a sample
pub struct Percentiles<A>(Box<[A]>)
where
    A: Float;

impl<A> Percentiles<A>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    pub(crate) fn new(sorted: Box<[A]>) -> Percentiles<A> {
        debug_assert!(!sorted.is_empty());

        Percentiles(sorted)
    }

    /// Returns the percentile at `p`%
    ///
    /// Quantiles are estimated by linear interpolation between the order
    /// statistics at ranks `1 + (p/100)(n - 1)` (the conventional "type 7"
    /// method, so that both passes of the pipeline agree exactly).
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the closed `[0, 100]` range
    pub fn at(&self, p: A) -> A {
        let _0 = A::cast(0);
        let _100 = A::cast(100);

        assert!(p >= _0 && p <= _100);
        assert!(!self.0.is_empty());
        let len = self.0.len() - 1;

        if len == 0 {
            // Singleton sample: every percentile is that value
            self.0[0]
        } else if p == _100 {
            self.0[len]
        } else {
            let rank = (p / _100) * A::cast(len);
            let integer = rank.floor();
            let fraction = rank - integer;
            let n = usize(integer).unwrap();
            let floor = self.0[n];
            let ceiling = self.0[n + 1];

            floor + (ceiling - floor) * fraction
        }
    }

    /// Returns the interquartile range
    pub fn iqr(&self) -> A {
        let q1 = self.at(A::cast(25));
        let q3 = self.at(A::cast(75));

        q3 - q1
    }

    /// Returns the 50th percentile
    pub fn median(&self) -> A {
        self.at(A::cast(50))
    }

    /// Returns the 25th, 50th and 75th percentiles
    pub fn quartiles(&self) -> (A, A, A) {
        (
            self.at(A::cast(25)),
            self.at(A::cast(50)),
            self.at(A::cast(75)),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::stats::Sample;
    use approx::assert_relative_eq;
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn quartiles_interpolate_between_order_statistics() {
        let sample = [100., 200., 300., 400., 10_000.];
        let (q1, median, q3) = Sample::new(&sample).percentiles().quartiles();

        assert_relative_eq!(q1, 200.);
        assert_relative_eq!(median, 300.);
        assert_relative_eq!(q3, 400.);
    }

    #[test]
    fn even_sized_sample_interpolates_the_median() {
        let sample = [1., 2., 3., 4.];
        let percentiles = Sample::new(&sample).percentiles();

        assert_relative_eq!(percentiles.median(), 2.5);
        assert_relative_eq!(percentiles.at(25.), 1.75);
        assert_relative_eq!(percentiles.at(75.), 3.25);
    }

    #[test]
    fn singleton_sample_collapses_every_percentile() {
        let sample = [42.];
        let percentiles = Sample::new(&sample).percentiles();

        assert_relative_eq!(percentiles.at(0.), 42.);
        assert_relative_eq!(percentiles.median(), 42.);
        assert_relative_eq!(percentiles.at(100.), 42.);
        assert_relative_eq!(percentiles.iqr(), 0.);
    }

    #[test]
    fn unsorted_input_is_sorted_before_interpolation() {
        let sample = [400., 100., 10_000., 300., 200.];
        let (q1, _, q3) = Sample::new(&sample).percentiles().quartiles();

        assert_relative_eq!(q1, 200.);
        assert_relative_eq!(q3, 400.);
    }

    quickcheck! {
        fn quartiles_are_ordered(values: Vec<u32>) -> TestResult {
            if values.is_empty() {
                return TestResult::discard();
            }

            let values = values.iter().map(|&x| f64::from(x)).collect::<Vec<_>>();
            let (q1, median, q3) = Sample::new(&values).percentiles().quartiles();

            TestResult::from_bool(q1 <= median && median <= q3)
        }
    }
}
