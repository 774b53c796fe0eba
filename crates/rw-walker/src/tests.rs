//! Unit tests for rw-walker.

use std::f64::consts::TAU;

use rw_core::{AgentId, AgentRng, Position, RandomSource, SimRng};

use crate::engine::advance;
use crate::{
    BoundingDistribution, Heading, Levy, LevyConfig, PolicyConfig, RetargetPolicy, Target,
    TickEvent, WaitingPolicy, Walker, WalkerConfig, WalkerError, WalkerPhase, WalkerState,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rng(seed: u64) -> AgentRng {
    AgentRng::new(seed, AgentId(0))
}

fn walker(config: &WalkerConfig) -> Walker {
    Walker::new(Position::ORIGIN, config).unwrap()
}

fn bounded(bounding: BoundingDistribution, scale_factor: f64) -> PolicyConfig {
    PolicyConfig::BoundedUniformLevy { levy: LevyConfig::default(), bounding, scale_factor }
}

fn homesick(home_probability: f64) -> PolicyConfig {
    PolicyConfig::HomesickLevy { levy: LevyConfig::default(), home_probability }
}

fn rapid(levy: LevyConfig, home_probability: f64) -> PolicyConfig {
    PolicyConfig::RapidHomesickLevy { levy, home_probability }
}

/// Tick until `pred` holds for the returned event, or panic after `limit`.
fn tick_until(
    w: &mut Walker,
    rng: &mut AgentRng,
    limit: usize,
    pred: impl Fn(TickEvent) -> bool,
) -> TickEvent {
    for _ in 0..limit {
        let event = w.advance_one_tick(rng).unwrap();
        if pred(event) {
            return event;
        }
    }
    panic!("condition not reached within {limit} ticks");
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn new_walker_has_no_target() {
        let w = walker(&WalkerConfig::new(2.0, PolicyConfig::uniform(5.0)));
        assert_eq!(w.position(), Position::ORIGIN);
        assert_eq!(w.origin(), Position::ORIGIN);
        assert_eq!(w.velocity(), 2.0);
        assert!(w.target().is_none());
        assert!(!w.is_on_target());
        assert!(!w.waiting());
        assert_eq!(w.phase(), WalkerPhase::NoTarget);
        assert!(w.waiting_policy().is_none());
        assert_eq!(w.policy().name(), "uniform");
    }

    #[test]
    fn origin_is_initial_position() {
        let start = Position::new(3.0, -4.0);
        let w = Walker::new(start, &WalkerConfig::new(1.0, PolicyConfig::uniform_levy())).unwrap();
        assert_eq!(w.origin(), start);
        assert_eq!(w.position(), start);
    }

    #[test]
    fn non_positive_velocity_rejected() {
        for v in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = WalkerState::new(Position::ORIGIN, v).unwrap_err();
            assert!(matches!(err, WalkerError::Configuration(_)), "velocity {v}");
        }
    }

    #[test]
    fn non_finite_start_rejected() {
        let err = WalkerState::new(Position::new(f64::NAN, 0.0), 1.0).unwrap_err();
        assert!(matches!(err, WalkerError::Configuration(_)));
    }

    #[test]
    fn probabilities_outside_unit_interval_rejected() {
        for p in [-0.1, 1.1, f64::NAN] {
            assert!(WaitingPolicy::new(p).is_err());
            assert!(RetargetPolicy::from_config(&homesick(p)).is_err());
            assert!(RetargetPolicy::from_config(&rapid(LevyConfig::default(), p)).is_err());
        }
        assert!(WaitingPolicy::new(0.0).is_ok());
        assert!(WaitingPolicy::new(1.0).is_ok());
    }

    #[test]
    fn walker_config_wait_probability_validated() {
        let config = WalkerConfig::new(1.0, PolicyConfig::uniform(5.0)).with_waiting(1.5);
        assert!(Walker::new(Position::ORIGIN, &config).is_err());
    }

    #[test]
    fn uniform_range_validated() {
        let bad = [
            PolicyConfig::Uniform { min_distance: 0.0, max_distance: 0.0 },
            PolicyConfig::Uniform { min_distance: -1.0, max_distance: 5.0 },
            PolicyConfig::Uniform { min_distance: 6.0, max_distance: 5.0 },
        ];
        for config in bad {
            assert!(RetargetPolicy::from_config(&config).is_err(), "{config:?}");
        }
    }

    #[test]
    fn levy_parameters_validated() {
        assert!(Levy::new(0.0, 0.0).is_err());
        assert!(Levy::new(0.0, -2.0).is_err());
        assert!(Levy::new(-1.0, 1.0).is_err());
        let levy = Levy::new(2.0, 0.5).unwrap();
        assert_eq!(levy.location(), 2.0);
        assert_eq!(levy.scale(), 0.5);
    }

    #[test]
    fn bounding_parameters_validated() {
        let bad = [
            BoundingDistribution::Uniform { low: 5.0, high: 5.0 },
            BoundingDistribution::Uniform { low: 6.0, high: 5.0 },
            BoundingDistribution::Beta { alpha: 0.0, beta: 1.0 },
            BoundingDistribution::Normal { mean: 100.0, std_dev: -1.0 },
            BoundingDistribution::LogNormal { mu: f64::NAN, sigma: 1.0 },
            BoundingDistribution::Exponential { rate: 0.0 },
            BoundingDistribution::Constant { value: f64::INFINITY },
        ];
        for b in bad {
            assert!(b.build().is_err(), "{b:?}");
        }
        assert!(RetargetPolicy::from_config(&bounded(
            BoundingDistribution::Normal { mean: 100.0, std_dev: 12.5 },
            -1.0,
        ))
        .is_err());
    }
}

// ── Distributions ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod distributions {
    use super::*;

    #[test]
    fn levy_is_heavy_tailed() {
        let levy = Levy::standard();
        let mut r = rng(11);
        let xs: Vec<f64> = (0..10_000).map(|_| r.sample(&levy)).collect();
        assert!(xs.iter().all(|x| x.is_finite() && *x >= 0.0));

        let n = xs.len() as f64;
        let mean = xs.iter().sum::<f64>() / n;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        // A uniform law on [0, 2·mean] has var / mean² = 1/3.
        assert!(var / (mean * mean) > 10.0, "var/mean² = {}", var / (mean * mean));

        // P(X > 100) = erf(√0.005) ≈ 0.08 for the standard law.
        let tail = xs.iter().filter(|x| **x > 100.0).count() as f64 / n;
        assert!(tail > 0.05, "tail fraction {tail}");
    }

    #[test]
    fn levy_draws_exceed_location() {
        let levy = Levy::new(19.5, 1e-6).unwrap();
        let mut r = rng(3);
        assert!((0..1_000).all(|_| r.sample(&levy) >= 19.5));
    }

    #[test]
    fn constant_bounding_is_constant() {
        let sampler = BoundingDistribution::Constant { value: 7.0 }.build().unwrap();
        let mut r = rng(5);
        assert!((0..100).all(|_| r.sample(&sampler) == 7.0));
    }

    #[test]
    fn uniform_bounding_within_range() {
        let sampler = BoundingDistribution::Uniform { low: 2.0, high: 3.0 }.build().unwrap();
        let mut r = rng(5);
        for _ in 0..1_000 {
            let x = r.sample(&sampler);
            assert!((2.0..3.0).contains(&x), "{x}");
        }
    }
}

// ── Policies ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod policies {
    use super::*;

    fn all_policies() -> Vec<RetargetPolicy> {
        [
            PolicyConfig::uniform(5.0),
            PolicyConfig::Uniform { min_distance: 2.0, max_distance: 4.0 },
            PolicyConfig::uniform_levy(),
            bounded(BoundingDistribution::Normal { mean: 100.0, std_dev: 12.5 }, 1.0),
            homesick(0.3),
            rapid(LevyConfig::default(), 0.3),
        ]
        .iter()
        .map(|c| RetargetPolicy::from_config(c).unwrap())
        .collect()
    }

    #[test]
    fn bearings_in_range_for_every_variant() {
        let mut state = WalkerState::new(Position::ORIGIN, 1.0).unwrap();
        state.position = Position::new(3.0, -4.0);
        for policy in all_policies() {
            let mut r = rng(21);
            for _ in 0..10_000 {
                let h = policy.choose_target(&state, &mut r).unwrap();
                assert!((0.0..TAU).contains(&h.bearing), "{}: {}", policy.name(), h.bearing);
                assert!(h.distance.is_finite() && h.distance >= 0.0);
            }
        }
    }

    #[test]
    fn uniform_distance_in_half_open_range() {
        let state = WalkerState::new(Position::ORIGIN, 1.0).unwrap();
        let policy = RetargetPolicy::from_config(&PolicyConfig::Uniform {
            min_distance: 2.0,
            max_distance: 4.0,
        })
        .unwrap();
        let mut r = rng(8);
        for _ in 0..10_000 {
            let d = policy.choose_target(&state, &mut r).unwrap().distance;
            assert!(d > 2.0 && d <= 4.0, "{d}");
        }
    }

    #[test]
    fn unvalidated_uniform_range_is_a_sampling_error() {
        let state = WalkerState::new(Position::ORIGIN, 1.0).unwrap();
        let policy = RetargetPolicy::Uniform { min_distance: 0.0, max_distance: -5.0 };
        let err = policy.choose_target(&state, &mut rng(8)).unwrap_err();
        assert!(matches!(err, WalkerError::Sampling { what: "uniform distance", .. }), "{err:?}");
    }

    #[test]
    fn homesick_fraction_matches_alpha() {
        let mut state = WalkerState::new(Position::ORIGIN, 1.0).unwrap();
        state.position = Position::new(10.0, 0.0);
        let policy = RetargetPolicy::from_config(&homesick(0.1)).unwrap();
        let mut r = rng(99);

        let n = 20_000;
        let home = (0..n)
            .filter(|_| policy.choose_target(&state, &mut r).unwrap().homeward)
            .count();
        let frac = home as f64 / n as f64;
        assert!((frac - 0.1).abs() < 0.01, "homeward fraction {frac}");
    }

    #[test]
    fn home_heading_points_at_origin() {
        let mut state = WalkerState::new(Position::ORIGIN, 1.0).unwrap();
        state.position = Position::new(0.0, 5.0);
        let h = Heading::home(&state);
        assert!(h.homeward);
        assert!((h.distance - 5.0).abs() < 1e-12);
        assert!((h.bearing - 1.5 * std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn only_bounded_policy_cuts_trips() {
        let mut state = WalkerState::new(Position::ORIGIN, 1.0).unwrap();
        state.trip_length = 1e6;
        for policy in all_policies() {
            let mut r = rng(1);
            let cut = policy.trip_cutoff(&state, &mut r).unwrap();
            let is_bounded = matches!(policy, RetargetPolicy::BoundedUniformLevy { .. });
            assert_eq!(cut, is_bounded, "{}", policy.name());
        }
    }

    #[test]
    fn only_rapid_policy_redirects() {
        let mut state = WalkerState::new(Position::ORIGIN, 1.0).unwrap();
        state.position = Position::new(4.0, 0.0);
        state.target = Some(Target::from_heading(
            state.position,
            Heading { bearing: 0.0, distance: 10.0, homeward: false },
            state.origin,
        ));
        for config in [PolicyConfig::uniform_levy(), homesick(1.0), rapid(LevyConfig::default(), 1.0)] {
            let policy = RetargetPolicy::from_config(&config).unwrap();
            let mut r = rng(1);
            let redirected = policy.homesick_redirect(&state, &mut r).is_some();
            assert_eq!(redirected, matches!(config, PolicyConfig::RapidHomesickLevy { .. }));
        }
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use super::*;

    #[test]
    fn retarget_tick_does_not_move() {
        let mut w = walker(&WalkerConfig::new(1.0, PolicyConfig::uniform(5.0)));
        let mut r = rng(4);
        let event = w.advance_one_tick(&mut r).unwrap();
        assert_eq!(event, TickEvent::Retargeted { homeward: false });
        assert_eq!(w.position(), Position::ORIGIN);
        assert_eq!(w.phase(), WalkerPhase::Moving);
        assert_eq!(w.state().trips_started(), 1);

        let t = *w.target().unwrap();
        let expected = Position::ORIGIN.offset_polar(t.bearing, t.distance);
        assert_eq!(t.destination, expected);
    }

    #[test]
    fn homeward_trip_lands_exactly_on_origin() {
        let policy = RetargetPolicy::from_config(&homesick(1.0)).unwrap();
        let mut state = WalkerState::new(Position::ORIGIN, 1.0).unwrap();
        state.position = Position::new(3.0, 4.0);
        let mut r = rng(2);

        assert_eq!(
            advance(&mut state, &policy, None, &mut r).unwrap(),
            TickEvent::Retargeted { homeward: true }
        );
        assert_eq!(state.target().unwrap().destination, Position::ORIGIN);
        assert!((state.target().unwrap().distance - 5.0).abs() < 1e-12);

        for _ in 0..4 {
            assert!(matches!(
                advance(&mut state, &policy, None, &mut r).unwrap(),
                TickEvent::Moved { .. }
            ));
        }
        // Rounding along the bearing leaves the last leg slightly above 1.
        assert!((state.distance_to_target().unwrap() - 1.0).abs() < 1e-12);
        let last = advance(&mut state, &policy, None, &mut r).unwrap();
        assert!(matches!(last, TickEvent::Arrived { .. }));
        assert_eq!(state.position(), Position::ORIGIN);
        assert_eq!(state.distance_to_target(), Some(0.0));
        assert!((state.distance_traveled() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn final_step_within_tolerance_snaps_onto_target() {
        let policy = RetargetPolicy::from_config(&PolicyConfig::uniform(5.0)).unwrap();
        let mut state = WalkerState::new(Position::ORIGIN, 1.0).unwrap();
        let destination = Position::new(1.0 + 1e-12, 0.0);
        state.target = Some(Target {
            destination,
            bearing:  0.0,
            distance: destination.x,
            homeward: false,
        });

        let event = advance(&mut state, &policy, None, &mut rng(3)).unwrap();
        assert!(matches!(event, TickEvent::Arrived { .. }), "{event:?}");
        assert_eq!(state.position(), destination);
        assert_eq!(state.phase(), WalkerPhase::OnTargetReady);
    }

    #[test]
    fn zero_length_target_is_reached_immediately() {
        // At the origin every homeward target has distance 0.
        let policy = RetargetPolicy::from_config(&homesick(1.0)).unwrap();
        let mut state = WalkerState::new(Position::ORIGIN, 1.0).unwrap();
        let mut r = rng(2);

        advance(&mut state, &policy, None, &mut r).unwrap();
        assert!(state.is_on_target());
        assert_eq!(state.phase(), WalkerPhase::OnTargetReady);
        assert_eq!(advance(&mut state, &policy, None, &mut r).unwrap(), TickEvent::TargetCleared);
        assert_eq!(state.position(), Position::ORIGIN);
        assert_eq!(state.distance_traveled(), 0.0);
    }

    #[test]
    fn arrival_clears_target_without_waiting() {
        let mut w = walker(&WalkerConfig::new(100.0, PolicyConfig::uniform(5.0)));
        let mut r = rng(6);
        w.advance_one_tick(&mut r).unwrap();
        let dest = w.target().unwrap().destination;

        assert!(matches!(w.advance_one_tick(&mut r).unwrap(), TickEvent::Arrived { .. }));
        assert_eq!(w.position(), dest);
        assert!(w.is_on_target());

        assert_eq!(w.advance_one_tick(&mut r).unwrap(), TickEvent::TargetCleared);
        assert!(w.target().is_none());
        assert_eq!(w.position(), dest);
        assert!(matches!(w.advance_one_tick(&mut r).unwrap(), TickEvent::Retargeted { .. }));
    }

    #[test]
    fn certain_waiting_never_leaves() {
        let config = WalkerConfig::new(1.0, PolicyConfig::uniform(5.0)).with_waiting(1.0);
        let mut w = walker(&config);
        let mut r = rng(12);
        tick_until(&mut w, &mut r, 20, |e| e == TickEvent::StartedWaiting);

        assert!(w.waiting());
        assert_eq!(w.phase(), WalkerPhase::OnTargetWaiting);
        let position = w.position();
        let target = *w.target().unwrap();
        for _ in 0..100 {
            assert_eq!(w.advance_one_tick(&mut r).unwrap(), TickEvent::Waited);
            assert_eq!(w.position(), position);
            assert_eq!(*w.target().unwrap(), target);
        }
    }

    #[test]
    fn waiting_walker_eventually_retargets() {
        let config = WalkerConfig::new(1.0, PolicyConfig::uniform(5.0)).with_waiting(0.5);
        let mut w = walker(&config);
        let mut r = rng(13);
        tick_until(&mut w, &mut r, 1_000, |e| e == TickEvent::StartedWaiting);
        tick_until(&mut w, &mut r, 1_000, |e| e == TickEvent::TargetCleared);
        assert!(!w.waiting());
        assert_eq!(w.phase(), WalkerPhase::NoTarget);
    }

    #[test]
    fn bounded_policy_truncates_trips() {
        // A near-zero bound ends every trip after its first step.
        let config = WalkerConfig::new(
            0.05,
            bounded(BoundingDistribution::Constant { value: 1e-9 }, 1.0),
        );
        let mut w = walker(&config);
        let mut r = rng(31);

        let (mut trips, mut truncated) = (0u32, 0u32);
        while trips < 1_000 {
            match w.advance_one_tick(&mut r).unwrap() {
                TickEvent::Retargeted { .. } => trips += 1,
                TickEvent::TripTruncated => {
                    truncated += 1;
                    let t = w.target().unwrap();
                    assert!(w.is_on_target());
                    assert_eq!(t.distance, w.state().trip_length());
                    assert!(t.distance <= 0.05 + 1e-12);
                }
                _ => {}
            }
        }
        assert!(truncated as f64 / trips as f64 >= 0.95, "{truncated}/{trips}");
    }

    #[test]
    fn truncation_does_not_move() {
        let config = WalkerConfig::new(
            0.05,
            bounded(BoundingDistribution::Constant { value: 1e-9 }, 1.0),
        );
        let mut w = walker(&config);
        let mut r = rng(32);
        w.advance_one_tick(&mut r).unwrap();
        w.advance_one_tick(&mut r).unwrap();
        let before = w.position();
        let traveled = w.state().distance_traveled();
        if w.advance_one_tick(&mut r).unwrap() == TickEvent::TripTruncated {
            assert_eq!(w.position(), before);
            assert_eq!(w.state().distance_traveled(), traveled);
        }
    }

    #[test]
    fn overflowing_bound_is_a_sampling_error() {
        let config = WalkerConfig::new(
            1.0,
            bounded(BoundingDistribution::Uniform { low: 1e308, high: 1.5e308 }, 10.0),
        );
        let mut w = walker(&config);
        let mut r = rng(7);
        w.advance_one_tick(&mut r).unwrap();

        let before = w.state().clone();
        let err = w.advance_one_tick(&mut r).unwrap_err();
        assert!(matches!(err, WalkerError::Sampling { .. }), "{err:?}");
        assert_eq!(*w.state(), before);
    }

    #[test]
    fn homesick_levy_never_redirects_mid_trip() {
        let mut w = walker(&WalkerConfig::new(0.5, homesick(0.5)));
        let mut r = rng(41);
        for _ in 0..5_000 {
            assert_ne!(w.advance_one_tick(&mut r).unwrap(), TickEvent::RedirectedHome);
        }
    }

    #[test]
    fn rapid_redirect_replaces_trip() {
        let policy = RetargetPolicy::from_config(&rapid(LevyConfig::default(), 1.0)).unwrap();
        let mut state = WalkerState::new(Position::ORIGIN, 1.0).unwrap();
        state.position = Position::new(2.0, 0.0);
        state.target = Some(Target::from_heading(
            state.position,
            Heading { bearing: 0.0, distance: 10.0, homeward: false },
            state.origin,
        ));
        state.trip_length = 3.0;
        let mut r = rng(1);

        assert_eq!(advance(&mut state, &policy, None, &mut r).unwrap(), TickEvent::RedirectedHome);
        let t = state.target().unwrap();
        assert!(t.homeward);
        assert_eq!(t.destination, Position::ORIGIN);
        assert_eq!(state.position(), Position::new(2.0, 0.0));
        assert_eq!(state.trip_length(), 0.0);
        assert_eq!(state.trips_started(), 1);

        // Already homeward: no further redirects.
        assert!(matches!(
            advance(&mut state, &policy, None, &mut r).unwrap(),
            TickEvent::Moved { .. }
        ));
        assert!(matches!(
            advance(&mut state, &policy, None, &mut r).unwrap(),
            TickEvent::Arrived { .. }
        ));
        assert_eq!(state.position(), Position::ORIGIN);
    }

    #[test]
    fn rapid_interruption_rate_matches_per_tick_alpha() {
        // Trips of ~19.5–20 units at velocity 1 take 20 moving ticks, so a
        // trip survives with probability 0.99^20.
        let levy = LevyConfig { location: 19.5, scale: 1e-6 };
        let mut w = walker(&WalkerConfig::new(1.0, rapid(levy, 0.01)));
        let mut r = rng(77);

        let (mut outbound, mut redirected) = (0u32, 0u32);
        for _ in 0..1_000_000 {
            if outbound >= 5_000 {
                break;
            }
            match w.advance_one_tick(&mut r).unwrap() {
                TickEvent::Retargeted { homeward: false } => outbound += 1,
                TickEvent::RedirectedHome => redirected += 1,
                _ => {}
            }
        }
        assert!(outbound >= 5_000);
        let rate = redirected as f64 / outbound as f64;
        let expected = 1.0 - 0.99f64.powi(20);
        assert!(rate > 0.1, "interruption rate {rate}");
        assert!((rate - expected).abs() < 0.03, "interruption rate {rate}, expected {expected}");
    }

    #[test]
    fn uniform_walk_matches_replayed_draws() {
        let config = WalkerConfig::new(1.0, PolicyConfig::uniform(5.0));
        let mut w = walker(&config);
        let mut r = rng(2024);
        let ticks = 20u64;
        for _ in 0..ticks {
            w.advance_one_tick(&mut r).unwrap();
        }

        // Each trip: one retarget tick, ceil(d) moving ticks, one clear tick.
        let mut replay = rng(2024);
        let (mut t, mut trips) = (0u64, 0u64);
        while t < ticks {
            let _bearing = replay.bearing();
            let d = 5.0 * (1.0 - replay.uniform());
            trips += 1;
            t += 2 + d.ceil() as u64;
        }

        assert_eq!(w.state().trips_started(), trips);
        assert!(w.position().distance_to(Position::ORIGIN) <= ticks as f64);
        assert!(w.state().distance_traveled() <= ticks as f64);
    }

    #[test]
    fn same_seed_same_trajectory() {
        let config = WalkerConfig::new(0.7, rapid(LevyConfig::default(), 0.05)).with_waiting(0.3);
        let run = |seed| {
            let mut w = walker(&config);
            let mut r = SimRng::new(seed);
            (0..500).map(|_| w.advance_one_tick(&mut r).unwrap()).collect::<Vec<_>>()
        };
        assert_eq!(run(9), run(9));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn steps_never_exceed_velocity(
            seed in any::<u64>(),
            velocity in 0.1f64..10.0,
            max in 0.5f64..50.0,
        ) {
            let mut w = walker(&WalkerConfig::new(velocity, PolicyConfig::uniform(max)));
            let mut r = rng(seed);
            for _ in 0..200 {
                let before = w.position();
                let event = w.advance_one_tick(&mut r).unwrap();
                let moved = before.distance_to(w.position());
                prop_assert!(event.step() <= velocity + 1e-12);
                prop_assert!(moved <= velocity + 1e-9);
                if let TickEvent::Arrived { .. } = event {
                    prop_assert_eq!(w.position(), w.target().unwrap().destination);
                }
                if event.acquired_target() {
                    prop_assert_eq!(moved, 0.0);
                }
            }
        }

        #[test]
        fn odometer_sums_steps(seed in any::<u64>(), velocity in 0.1f64..5.0) {
            let mut w = walker(&WalkerConfig::new(velocity, PolicyConfig::uniform_levy()));
            let mut r = rng(seed);
            let mut total = 0.0;
            for _ in 0..100 {
                total += w.advance_one_tick(&mut r).unwrap().step();
            }
            prop_assert!((w.state().distance_traveled() - total).abs() <= 1e-9 * total.max(1.0));
        }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod serde_config {
    use super::*;

    #[test]
    fn walker_config_from_json() {
        let json = r#"{
            "velocity": 1.5,
            "wait_probability": 0.8,
            "policy": {
                "kind": "bounded_uniform_levy",
                "bounding": { "kind": "normal", "mean": 100.0, "std_dev": 12.5 }
            }
        }"#;
        let config: WalkerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.velocity, 1.5);
        assert_eq!(config.wait_probability, Some(0.8));
        assert_eq!(
            config.policy,
            bounded(BoundingDistribution::Normal { mean: 100.0, std_dev: 12.5 }, 1.0)
        );
        assert!(Walker::new(Position::ORIGIN, &config).is_ok());
    }

    #[test]
    fn levy_parameters_default() {
        let json = r#"{ "kind": "homesick_levy", "home_probability": 0.2,
                        "levy": { "scale": 2.0 } }"#;
        let policy: PolicyConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            policy,
            PolicyConfig::HomesickLevy {
                levy:             LevyConfig { location: 0.0, scale: 2.0 },
                home_probability: 0.2,
            }
        );
    }

    #[test]
    fn unknown_fields_rejected() {
        let policy = r#"{ "kind": "uniform", "max_distance": 5.0, "maximum": 3.0 }"#;
        assert!(serde_json::from_str::<PolicyConfig>(policy).is_err());

        let walker = r#"{ "velocity": 1.0, "speed": 2.0,
                          "policy": { "kind": "uniform_levy" } }"#;
        assert!(serde_json::from_str::<WalkerConfig>(walker).is_err());

        let kind = r#"{ "kind": "teleport" }"#;
        assert!(serde_json::from_str::<PolicyConfig>(kind).is_err());
    }

    #[test]
    fn report_serializes_flat_fields() {
        let mut w = walker(&WalkerConfig::new(1.0, PolicyConfig::uniform(5.0)));
        let report = serde_json::to_value(w.report()).unwrap();
        assert_eq!(report["phase"], "no_target");
        assert!(report["target"].is_null());
        assert_eq!(report["x"], 0.0);

        w.advance_one_tick(&mut rng(1)).unwrap();
        let report = w.report();
        assert_eq!(report.phase, "moving");
        let target = report.target.unwrap();
        assert!(!target.homeward);
        assert!((target.remaining - w.target().unwrap().distance).abs() < 1e-12);
    }
}
