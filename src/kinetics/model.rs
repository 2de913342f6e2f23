use crate::kinetics::constants::*;
use crate::models::Sex;

/// Volume of distribution as a fraction of body weight (Seidl method).
///
/// Clamped to the plausible range for each sex.
pub fn volume_of_distribution(sex: Sex, weight_kg: f64, height_cm: f64) -> f64 {
    match sex {
        Sex::Female => (VDA_INTERCEPT - VDA_FEMALE_WEIGHT_COEF * weight_kg
            + VDA_FEMALE_HEIGHT_COEF * height_cm)
            .clamp(VDA_FEMALE_MIN, VDA_FEMALE_MAX),
        Sex::Male => (VDA_INTERCEPT - VDA_MALE_WEIGHT_COEF * weight_kg
            + VDA_MALE_HEIGHT_COEF * height_cm)
            .clamp(VDA_MALE_MIN, VDA_MALE_MAX),
    }
}

/// Alcohol elimination rate (permille per hour) at the given concentration.
pub fn elimination_rate(sex: Sex, current_bac: f64) -> f64 {
    let base = match sex {
        Sex::Female => AER_FEMALE_BASE,
        Sex::Male => AER_MALE_BASE,
    };
    base + AER_BAC_SLOPE * current_bac
}

/// Grams of one intake absorbed after `elapsed_hours`.
///
/// First-order saturation toward the full amount, floored at zero so a
/// negative elapsed time never yields a negative amount.
pub fn absorbed_amount(intake_grams: f64, absorption_rate: f64, elapsed_hours: f64) -> f64 {
    let absorbed = intake_grams * (1.0 - (-absorption_rate * elapsed_hours).exp());
    absorbed.max(0.0)
}

/// Raw concentration from absorbed grams and eliminated permille.
///
/// Not clamped; the engine applies the zero threshold.
#[inline]
pub fn concentration(absorbed_grams: f64, weight_kg: f64, vda: f64, eliminated: f64) -> f64 {
    absorbed_grams / (weight_kg * vda) - eliminated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vda_male_unclamped() {
        // 0.31 - 0.384 + 0.828
        let vda = volume_of_distribution(Sex::Male, 80.0, 180.0);
        assert!((vda - 0.754).abs() < 1e-9);
    }

    #[test]
    fn test_vda_female_unclamped() {
        // 0.31 - 0.384 + 0.7425
        let vda = volume_of_distribution(Sex::Female, 60.0, 165.0);
        assert!((vda - 0.6685).abs() < 1e-9);
    }

    #[test]
    fn test_vda_clamped() {
        assert_eq!(volume_of_distribution(Sex::Male, 300.0, 100.0), VDA_MALE_MIN);
        assert_eq!(volume_of_distribution(Sex::Male, 1.0, 250.0), VDA_MALE_MAX);
        assert_eq!(volume_of_distribution(Sex::Female, 300.0, 100.0), VDA_FEMALE_MIN);
        assert_eq!(volume_of_distribution(Sex::Female, 1.0, 250.0), VDA_FEMALE_MAX);
    }

    #[test]
    fn test_elimination_rate() {
        assert!((elimination_rate(Sex::Male, 0.0) - 0.15).abs() < 1e-12);
        assert!((elimination_rate(Sex::Female, 0.0) - 0.17).abs() < 1e-12);
        assert!((elimination_rate(Sex::Male, 1.0) - 0.20).abs() < 1e-12);
    }

    #[test]
    fn test_absorbed_amount_bounds() {
        assert_eq!(absorbed_amount(30.0, 1.0, 0.0), 0.0);
        assert_eq!(absorbed_amount(30.0, 1.0, -2.0), 0.0); // clock anomaly
        let one_hour = absorbed_amount(30.0, 1.0, 1.0);
        assert!((one_hour - 30.0 * (1.0 - (-1.0f64).exp())).abs() < 1e-9);
        assert!(absorbed_amount(30.0, 1.0, 100.0) <= 30.0);
    }

    #[test]
    fn test_concentration() {
        // 30 g into 60 L-equivalent, nothing eliminated
        assert!((concentration(30.0, 80.0, 0.75, 0.0) - 0.5).abs() < 1e-12);
        assert!((concentration(30.0, 80.0, 0.75, 0.2) - 0.3).abs() < 1e-12);
    }
}
