//! Daily calorie target derivation.

/// Derives a daily calorie target from body metrics.
///
/// Mifflin-St Jeor resting energy for women, reduced by ten kilocalories
/// per kilogram of weight still to lose:
///
/// `10·w + 6.25·h − 5·age − 161 − 10·(w − desired)`
///
/// The result is rounded to the nearest kilocalorie and floored at zero.
pub fn daily_calorie_target(
    height_cm: i32,
    age_years: i32,
    current_weight_kg: f64,
    desired_weight_kg: f64,
) -> i32 {
    let base = 10.0 * current_weight_kg + 6.25 * f64::from(height_cm)
        - 5.0 * f64::from(age_years)
        - 161.0;
    let deficit = 10.0 * (current_weight_kg - desired_weight_kg);
    (base - deficit).round().max(0.0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_for_typical_metrics() {
        // 10*80 + 6.25*170 - 5*30 - 161 - 10*(80-70) = 1451.5 -> 1452
        assert_eq!(daily_calorie_target(170, 30, 80.0, 70.0), 1452);
    }

    #[test]
    fn test_no_deficit_when_at_desired_weight() {
        // 10*60 + 6.25*165 - 5*25 - 161 = 1345.25 -> 1345
        assert_eq!(daily_calorie_target(165, 25, 60.0, 60.0), 1345);
    }

    #[test]
    fn test_target_never_negative() {
        // 10*25 + 6.25*100 - 5*120 - 161 - 10*(25-5) = -86 -> floored at 0
        assert_eq!(daily_calorie_target(100, 120, 25.0, 5.0), 0);
    }
}
