#[macro_use]
extern crate assert_float_eq;

use bac_simulator_rs::kinetics::{
    absorbed_amount, elimination_rate, volume_of_distribution, VDA_FEMALE_MAX, VDA_FEMALE_MIN,
    VDA_MALE_MAX, VDA_MALE_MIN,
};
use bac_simulator_rs::models::Sex;

#[test]
fn test_vda_always_within_clamps() {
    let weights = [1.0, 30.0, 55.0, 80.0, 120.0, 250.0, 600.0];
    let heights = [30.0, 120.0, 160.0, 180.0, 210.0, 300.0];

    for &w in &weights {
        for &h in &heights {
            let female = volume_of_distribution(Sex::Female, w, h);
            assert!(
                (VDA_FEMALE_MIN..=VDA_FEMALE_MAX).contains(&female),
                "female vda {} out of range for {} kg / {} cm",
                female,
                w,
                h
            );

            let male = volume_of_distribution(Sex::Male, w, h);
            assert!(
                (VDA_MALE_MIN..=VDA_MALE_MAX).contains(&male),
                "male vda {} out of range for {} kg / {} cm",
                male,
                w,
                h
            );
        }
    }
}

#[test]
fn test_vda_extremes_hit_bounds() {
    assert_float_absolute_eq!(volume_of_distribution(Sex::Female, 500.0, 50.0), 0.44, 1e-12);
    assert_float_absolute_eq!(volume_of_distribution(Sex::Female, 5.0, 300.0), 0.80, 1e-12);
    assert_float_absolute_eq!(volume_of_distribution(Sex::Male, 500.0, 50.0), 0.60, 1e-12);
    assert_float_absolute_eq!(volume_of_distribution(Sex::Male, 5.0, 300.0), 0.87, 1e-12);
}

#[test]
fn test_absorbed_amount_monotonic() {
    assert_eq!(absorbed_amount(30.0, 1.0, 0.0), 0.0);

    let mut previous = 0.0;
    for step in 0..200 {
        let hours = step as f64 * 0.1;
        let absorbed = absorbed_amount(30.0, 1.0, hours);
        assert!(absorbed >= previous, "absorption decreased at {} h", hours);
        assert!(absorbed <= 30.0);
        previous = absorbed;
    }
}

#[test]
fn test_absorbed_amount_never_negative() {
    assert_eq!(absorbed_amount(30.0, 2.0, -0.5), 0.0);
    assert_eq!(absorbed_amount(0.0, 2.0, 3.0), 0.0);
}

#[test]
fn test_elimination_rate_monotonic_and_sex_ordered() {
    let mut previous_female = 0.0;
    let mut previous_male = 0.0;

    for step in 0..40 {
        let bac = step as f64 * 0.1;
        let female = elimination_rate(Sex::Female, bac);
        let male = elimination_rate(Sex::Male, bac);

        assert!(female >= previous_female);
        assert!(male >= previous_male);
        assert!(female > male, "female rate should exceed male at BAC {}", bac);

        previous_female = female;
        previous_male = male;
    }

    assert_float_absolute_eq!(elimination_rate(Sex::Female, 0.0), 0.17, 1e-12);
    assert_float_absolute_eq!(elimination_rate(Sex::Male, 0.0), 0.15, 1e-12);
}
