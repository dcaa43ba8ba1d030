//! The statistics kernel: samples, percentile views and Tukey box-plot
//! summaries. Everything here is generic over `f32`/`f64` through the
//! [`Float`] trait and is purely computational; grouping and filtering live
//! in the dataset layer.

mod float;
mod percentiles;
pub mod tukey;

pub use self::float::Float;
pub use self::percentiles::Percentiles;

use std::{mem, ops};

/// A collection of turnover values drawn from one (bucket, period) group
///
/// Invariants:
///
/// - The sample contains at least 1 data point
/// - The sample contains no `NaN`s
#[repr(transparent)]
pub struct Sample<A>([A]);

impl<A> Sample<A>
where
    A: Float,
{
    /// Creates a new sample from an existing slice
    ///
    /// # Panics
    ///
    /// Panics if `slice` is empty or contains any `NaN`
    #[allow(clippy::new_ret_no_self)]
    pub fn new(slice: &[A]) -> &Sample<A> {
        assert!(!slice.is_empty() && slice.iter().all(|x| !x.is_nan()));

        unsafe { mem::transmute(slice) }
    }

    /// Returns the biggest element in the sample
    ///
    /// - Time: `O(length)`
    pub fn max(&self) -> A {
        // NB the fold seed exists: samples are non-empty by construction
        self.iter().copied().fold(self.0[0], A::max)
    }

    /// Returns the smallest element in the sample
    ///
    /// - Time: `O(length)`
    pub fn min(&self) -> A {
        self.iter().copied().fold(self.0[0], A::min)
    }

    /// Returns a sorted "view" into the percentiles of the sample
    ///
    /// This "view" makes consecutive computations of percentiles much faster (`O(1)`)
    ///
    /// - Time: `O(N log N) where N = length`
    /// - Memory: `O(length)`
    pub fn percentiles(&self) -> Percentiles<A>
    where
        usize: cast::From<A, Output = Result<usize, cast::Error>>,
    {
        use std::cmp::Ordering;

        // NB This function assumes that there are no `NaN`s in the sample
        fn cmp<T>(a: &T, b: &T) -> Ordering
        where
            T: PartialOrd,
        {
            match a.partial_cmp(b) {
                Some(o) => o,
                // Arbitrary way to handle NaNs that should never happen
                None => Ordering::Equal,
            }
        }

        let mut v = self.to_vec().into_boxed_slice();
        v.sort_unstable_by(cmp);

        Percentiles::new(v)
    }
}

impl<A> ops::Deref for Sample<A> {
    type Target = [A];

    fn deref(&self) -> &[A] {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::Sample;

    #[test]
    #[should_panic]
    fn empty_sample_is_an_invariant_violation() {
        let empty: [f64; 0] = [];
        Sample::new(&empty);
    }

    #[test]
    #[should_panic]
    fn nan_in_a_sample_is_an_invariant_violation() {
        Sample::new(&[1., f64::NAN, 3.]);
    }

    #[test]
    fn extrema_of_a_singleton_sample() {
        let sample = Sample::new(&[5.]);

        assert_eq!(sample.min(), 5.);
        assert_eq!(sample.max(), 5.);
    }

    #[test]
    fn extrema_scan_the_whole_sample() {
        let sample = Sample::new(&[300., 100., 10_000., 200.]);

        assert_eq!(sample.min(), 100.);
        assert_eq!(sample.max(), 10_000.);
    }
}
