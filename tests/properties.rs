use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wavescene::coords::{Axes, AxisRange};
use wavescene::curve::{CurveSampler, ReactiveCurveBinding, TimeDomain};
use wavescene::{Parameter, ParameterStore};

const EPSILON: f64 = 1e-9;

fn axes() -> Axes {
    Axes::new(
        AxisRange::new(0.0, 10.0, 1.0),
        AxisRange::new(-3.0, 3.0, 1.0),
        10.0,
        6.0,
    )
    .unwrap()
}

fn random_store(rng: &mut StdRng) -> ParameterStore {
    ParameterStore::new(
        rng.gen_range(-3.0..3.0),
        rng.gen_range(-4.0..4.0),
        rng.gen_range(-10.0..10.0),
    )
}

#[test]
fn test_samples_follow_formula_for_random_parameters() {
    let mut rng = StdRng::seed_from_u64(7);
    let sampler = CurveSampler::new(TimeDomain::new(0.0, 10.0).unwrap(), 257).unwrap();

    for _ in 0..200 {
        let store = random_store(&mut rng);
        for point in sampler.sample(&store) {
            let expected = store.amplitude()
                * (2.0 * PI * store.frequency() * point.t + store.phase()).sin();
            assert!((point.y - expected).abs() < EPSILON);
        }
    }
}

#[test]
fn test_random_domains_include_both_ends() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..100 {
        let start = rng.gen_range(-50.0..50.0);
        let end = start + rng.gen_range(0.01..100.0);
        let resolution = rng.gen_range(2..500);
        let sampler = CurveSampler::new(TimeDomain::new(start, end).unwrap(), resolution).unwrap();

        let points = sampler.sample(&ParameterStore::default());
        assert_eq!(points.len(), resolution);
        assert_eq!(points[0].t, start);
        assert_eq!(points[resolution - 1].t, end);
    }
}

#[test]
fn test_binding_follows_random_mutations() {
    let mut rng = StdRng::seed_from_u64(23);
    let axes = axes();
    let sampler = CurveSampler::new(TimeDomain::new(0.0, 10.0).unwrap(), 101).unwrap();
    let mut store = ParameterStore::default();
    let mut binding = ReactiveCurveBinding::new(sampler, &store, &axes);
    binding.attach();

    for _ in 0..500 {
        let parameter = Parameter::ALL[rng.gen_range(0..Parameter::ALL.len())];
        store.set(parameter, rng.gen_range(-5.0..5.0));
        binding.on_frame(&store, &axes);
        assert_eq!(binding.points(), sampler.sample(&store).as_slice());
    }
}
