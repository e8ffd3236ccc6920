//! Time domains and curve sampling.

use super::Sinusoid;
use crate::{Error, ParameterStore, Result};

/// A validated, non-empty time range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeDomain {
    start: f64,
    end: f64,
}

impl TimeDomain {
    /// Creates a time domain.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDomain` if `start >= end`, or if either bound or
    /// the span `end - start` is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavescene::curve::TimeDomain;
    ///
    /// assert!(TimeDomain::new(0.0, 10.0).is_ok());
    /// assert!(TimeDomain::new(10.0, 0.0).is_err());
    /// assert!(TimeDomain::new(1.0, 1.0).is_err());
    /// assert!(TimeDomain::new(-1e308, 1e308).is_err());
    /// ```
    pub fn new(start: f64, end: f64) -> Result<Self> {
        // Infinite bounds make the span non-finite too
        let span = end - start;
        if !span.is_finite() || span <= 0.0 {
            return Err(Error::InvalidDomain { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// One sample of the plotted curve in domain coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub t: f64,
    pub y: f64,
}

/// Samples the sinusoid described by a `ParameterStore` over a fixed domain.
///
/// Sampling is a pure function of the store at call time. Points are evenly
/// spaced and always include both ends of the domain. No attempt is made to
/// avoid aliasing: a frequency too high for the resolution simply draws a
/// jagged curve.
///
/// # Examples
///
/// ```
/// use wavescene::ParameterStore;
/// use wavescene::curve::{CurveSampler, TimeDomain};
///
/// let sampler = CurveSampler::new(TimeDomain::new(0.0, 10.0).unwrap(), 41).unwrap();
/// let points = sampler.sample(&ParameterStore::new(2.0, 1.0, 0.0));
///
/// assert_eq!(points.len(), 41);
/// assert_eq!(points[1].t, 0.25);
/// assert!((points[1].y - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSampler {
    domain: TimeDomain,
    resolution: usize,
}

impl CurveSampler {
    /// Creates a sampler producing `resolution` points over `domain`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidResolution` if `resolution < 2`; fewer points
    /// cannot draw a continuous curve.
    pub fn new(domain: TimeDomain, resolution: usize) -> Result<Self> {
        if resolution < 2 {
            return Err(Error::InvalidResolution(resolution));
        }
        Ok(Self { domain, resolution })
    }

    pub fn domain(&self) -> TimeDomain {
        self.domain
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// The `index`-th sample time. The last index lands exactly on the domain end.
    fn time_at(&self, index: usize) -> f64 {
        let last = self.resolution - 1;
        if index == last {
            return self.domain.end;
        }
        self.domain.start + self.domain.span() * index as f64 / last as f64
    }

    /// Samples the curve for the store's current values.
    pub fn sample(&self, store: &ParameterStore) -> Vec<CurvePoint> {
        let wave = Sinusoid::from_store(store);
        (0..self.resolution)
            .map(|index| {
                let t = self.time_at(index);
                CurvePoint {
                    t,
                    y: wave.value_at(t),
                }
            })
            .collect()
    }
}
