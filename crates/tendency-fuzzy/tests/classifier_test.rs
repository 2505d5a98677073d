use tendency_core::config::MembershipConfig;
use tendency_core::{Pole, Tendency};
use tendency_fuzzy::{Band, CrispPoleClassifier, FuzzyPoleClassifier, MembershipModel};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

fn model(config: MembershipConfig) -> MembershipModel {
    MembershipModel::from_config(&config).unwrap()
}

/// Bands mirrored about 5.5 on the 0–11 universe.
fn symmetric_config() -> MembershipConfig {
    MembershipConfig {
        pole1_pure: [0.0, 0.0, 1.0, 3.0],
        pole1_leaning: [2.0, 3.0, 4.0, 6.0],
        pole2_leaning: [5.0, 7.0, 8.0, 9.0],
        pole2_pure: [8.0, 10.0, 11.0, 11.0],
        ..MembershipConfig::default()
    }
}

#[test]
fn universe_extremes_resolve_to_pure_poles() {
    let fuzzy = FuzzyPoleClassifier::default();
    let low = fuzzy.breakdown(0.0);
    assert_eq!(low.pole1_pure, 1.0);
    assert_eq!(low.tendency, Tendency::Pole1);
    assert_eq!(fuzzy.classify(11.0), Tendency::Pole2);
}

#[test]
fn score_4_5_follows_computed_degrees() {
    let fuzzy = FuzzyPoleClassifier::default();
    let b = fuzzy.breakdown(4.5);

    assert!(approx(b.pole1_leaning, 0.75));
    assert_eq!(b.pole1_pure, 0.0);
    assert_eq!(b.pole2_leaning, 0.0);
    assert_eq!(b.pole2_pure, 0.0);

    let expected = if b.pole1_total > b.pole2_total {
        Tendency::Pole1
    } else if b.pole2_total > b.pole1_total {
        Tendency::Pole2
    } else {
        Tendency::Undetermined
    };
    assert_eq!(b.tendency, expected);
    assert_eq!(b.tendency, Tendency::Pole1);
}

#[test]
fn score_5_5_leans_to_pole_2_with_defaults() {
    let fuzzy = FuzzyPoleClassifier::default();
    let b = fuzzy.breakdown(5.5);
    assert!(approx(b.pole1_total, 0.25));
    assert!(approx(b.pole2_total, 0.5));
    assert_eq!(b.tendency, Tendency::Pole2);
}

#[test]
fn equal_nonzero_totals_are_undetermined() {
    let fuzzy = FuzzyPoleClassifier::new(model(symmetric_config()));
    let b = fuzzy.breakdown(5.5);
    assert_eq!(b.pole1_total, 0.25);
    assert_eq!(b.pole2_total, 0.25);
    assert_eq!(b.tendency, Tendency::Undetermined);
}

#[test]
fn no_membership_at_all_is_undetermined() {
    let gapped = MembershipConfig {
        pole1_pure: [0.0, 0.0, 1.0, 3.0],
        pole1_leaning: [0.0, 1.0, 2.0, 3.0],
        pole2_leaning: [8.0, 9.0, 10.0, 11.0],
        pole2_pure: [8.0, 10.0, 11.0, 11.0],
        ..MembershipConfig::default()
    };
    let fuzzy = FuzzyPoleClassifier::new(model(gapped));
    let b = fuzzy.breakdown(5.0);
    assert_eq!(b.pole1_total, 0.0);
    assert_eq!(b.pole2_total, 0.0);
    assert_eq!(b.tendency, Tendency::Undetermined);
}

#[test]
fn out_of_universe_scores_are_clamped() {
    let fuzzy = FuzzyPoleClassifier::default();
    let b = fuzzy.breakdown(-2.0);
    assert_eq!(b.evaluated_at, 0.0);
    assert_eq!(b.tendency, Tendency::Pole1);
    assert_eq!(fuzzy.classify(42.0), Tendency::Pole2);
}

#[test]
fn breakdown_agrees_with_classify() {
    let fuzzy = FuzzyPoleClassifier::default();
    for i in 0..=110 {
        let score = i as f64 / 10.0;
        assert_eq!(fuzzy.breakdown(score).tendency, fuzzy.classify(score));
    }
}

#[test]
fn breakdown_totals_sum_their_bands() {
    let fuzzy = FuzzyPoleClassifier::default();
    let b = fuzzy.breakdown(2.5);
    let m = fuzzy.model();
    assert_eq!(b.pole1_pure, m.membership(Band::Pole1Pure, 2.5));
    assert_eq!(b.pole1_total, b.pole1_pure + b.pole1_leaning);
    assert_eq!(b.pole2_total, b.pole2_pure + b.pole2_leaning);
}

#[test]
fn crisp_midpoint_belongs_to_pole_2() {
    let crisp = CrispPoleClassifier::default();
    assert_eq!(crisp.midpoint(), 5.5);
    assert_eq!(crisp.classify(5.5), Pole::Pole2);
    assert_eq!(crisp.classify(5.4999), Pole::Pole1);
    assert_eq!(crisp.classify(0.0), Pole::Pole1);
    assert_eq!(crisp.classify(11.0), Pole::Pole2);
}

#[test]
fn crisp_midpoint_is_configurable() {
    let crisp = CrispPoleClassifier::new(3.0);
    assert_eq!(crisp.classify(2.99), Pole::Pole1);
    assert_eq!(crisp.classify(3.0), Pole::Pole2);
}

#[test]
fn crisp_reference_at_5_5_with_fuzzy_system_at_5_5() {
    let fuzzy = FuzzyPoleClassifier::default();
    let crisp = CrispPoleClassifier::default();

    let reference = crisp.classify(5.5);
    assert_eq!(reference, Pole::Pole2);

    let system = fuzzy.classify(5.5);
    let matched = system.agrees_with(reference);
    assert_eq!(matched, system == Tendency::Pole2);
    assert!(matched);
}
