//! Frame-driven binding between the parameter store and the displayed curve.

use tracing::trace;

use super::{CurvePoint, CurveSampler};
use crate::ParameterStore;
use crate::coords::{CoordinateSystem, RenderPoint};

/// Keeps the displayed curve consistent with the `ParameterStore`.
///
/// The binding does not observe the store. Instead the render loop calls
/// `on_frame` once per frame; while the binding is attached, every call discards
/// the previous geometry and re-samples against the store's current values, so
/// the displayed curve is never more than one frame behind. During holds the
/// curve is simply redrawn identically.
///
/// # Examples
///
/// ```
/// use wavescene::coords::{AxisRange, Axes};
/// use wavescene::curve::{CurveSampler, ReactiveCurveBinding, TimeDomain};
/// use wavescene::{Parameter, ParameterStore};
///
/// let axes = Axes::new(
///     AxisRange::new(0.0, 10.0, 1.0),
///     AxisRange::new(-3.0, 3.0, 1.0),
///     10.0,
///     6.0,
/// )
/// .unwrap();
/// let sampler = CurveSampler::new(TimeDomain::new(0.0, 10.0).unwrap(), 41).unwrap();
///
/// let mut store = ParameterStore::default();
/// let mut binding = ReactiveCurveBinding::new(sampler, &store, &axes);
/// binding.attach();
///
/// store.set(Parameter::Amplitude, 2.0);
/// assert!(binding.on_frame(&store, &axes));
/// assert!((binding.points()[1].y - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct ReactiveCurveBinding {
    sampler: CurveSampler,
    points: Vec<CurvePoint>,
    geometry: Vec<RenderPoint>,
    attached: bool,
    /// Number of times the geometry has been re-derived
    revision: u64,
}

impl ReactiveCurveBinding {
    /// Creates a detached binding whose geometry reflects the store right now.
    pub fn new(
        sampler: CurveSampler,
        store: &ParameterStore,
        coords: &impl CoordinateSystem,
    ) -> Self {
        let mut binding = Self {
            sampler,
            points: Vec::new(),
            geometry: Vec::new(),
            attached: false,
            revision: 0,
        };
        binding.recompute(store, coords);
        binding
    }

    /// Starts re-deriving the curve on every frame.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stops per-frame updates; the last geometry is kept as-is.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Replaces the displayed geometry with a fresh sample of the current store.
    pub fn recompute(&mut self, store: &ParameterStore, coords: &impl CoordinateSystem) {
        self.points = self.sampler.sample(store);
        self.geometry = self
            .points
            .iter()
            .map(|point| coords.to_render(point.t, point.y))
            .collect();
        self.revision += 1;
        trace!(revision = self.revision, "curve recomputed");
    }

    /// Per-frame hook called by the render loop.
    ///
    /// Returns `true` if the geometry was re-derived, which happens exactly when
    /// the binding is attached.
    pub fn on_frame(&mut self, store: &ParameterStore, coords: &impl CoordinateSystem) -> bool {
        if self.attached {
            self.recompute(store, coords);
        }
        self.attached
    }

    /// Displayed samples in domain coordinates.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Displayed samples in render space.
    pub fn geometry(&self) -> &[RenderPoint] {
        &self.geometry
    }

    pub fn sampler(&self) -> &CurveSampler {
        &self.sampler
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parameter;
    use crate::coords::{Axes, AxisRange};
    use crate::curve::TimeDomain;
    use std::f64::consts::FRAC_PI_2;

    fn axes() -> Axes {
        Axes::new(
            AxisRange::new(0.0, 10.0, 1.0),
            AxisRange::new(-3.0, 3.0, 1.0),
            10.0,
            6.0,
        )
        .unwrap()
    }

    fn sampler() -> CurveSampler {
        CurveSampler::new(TimeDomain::new(0.0, 10.0).unwrap(), 201).unwrap()
    }

    #[test]
    fn test_initial_geometry() {
        let store = ParameterStore::default();
        let binding = ReactiveCurveBinding::new(sampler(), &store, &axes());
        assert!(!binding.is_attached());
        assert_eq!(binding.revision(), 1);
        assert_eq!(binding.points(), sampler().sample(&store).as_slice());
        assert_eq!(binding.geometry().len(), 201);
        assert_eq!(binding.geometry()[0], RenderPoint::new(-5.0, 0.0));
    }

    #[test]
    fn test_detached_binding_ignores_frames() {
        let axes = axes();
        let mut store = ParameterStore::default();
        let mut binding = ReactiveCurveBinding::new(sampler(), &store, &axes);
        let before = binding.points().to_vec();

        store.set(Parameter::Amplitude, 2.0);
        assert!(!binding.on_frame(&store, &axes));
        assert_eq!(binding.points(), before.as_slice());
        assert_eq!(binding.revision(), 1);
    }

    #[test]
    fn test_attached_binding_tracks_mutations() {
        let axes = axes();
        let mut store = ParameterStore::default();
        let mut binding = ReactiveCurveBinding::new(sampler(), &store, &axes);
        binding.attach();

        for (parameter, value) in [
            (Parameter::Amplitude, 2.0),
            (Parameter::Phase, FRAC_PI_2),
            (Parameter::Frequency, 2.0),
        ] {
            store.set(parameter, value);
            assert!(binding.on_frame(&store, &axes));
            assert_eq!(binding.points(), sampler().sample(&store).as_slice());
        }
        assert_eq!(binding.revision(), 4);
    }

    #[test]
    fn test_hold_redraws_identically() {
        let axes = axes();
        let store = ParameterStore::new(2.0, 1.0, 0.0);
        let mut binding = ReactiveCurveBinding::new(sampler(), &store, &axes);
        binding.attach();

        let first = binding.geometry().to_vec();
        binding.on_frame(&store, &axes);
        binding.on_frame(&store, &axes);
        assert_eq!(binding.geometry(), first.as_slice());
        assert_eq!(binding.revision(), 3);
    }

    #[test]
    fn test_detach_keeps_last_geometry() {
        let axes = axes();
        let mut store = ParameterStore::default();
        let mut binding = ReactiveCurveBinding::new(sampler(), &store, &axes);
        binding.attach();
        store.set(Parameter::Amplitude, 2.5);
        binding.on_frame(&store, &axes);
        binding.detach();

        let last = binding.points().to_vec();
        store.set(Parameter::Amplitude, 0.5);
        binding.on_frame(&store, &axes);
        assert_eq!(binding.points(), last.as_slice());
    }
}
