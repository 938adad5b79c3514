use crate::percentile::round_to;

const CM_PER_INCH: f64 = 2.54;
const INCHES_PER_FOOT: f64 = 12.0;

/// Height in centimetres from feet and inches, rounded to 1 decimal.
pub fn feet_inches_to_cm(feet: u32, inches: f64) -> f64 {
    round_to(
        (f64::from(feet) * INCHES_PER_FOOT + inches) * CM_PER_INCH,
        1,
    )
}

/// Whole feet plus the remaining inches, rounded to 1 decimal.
pub fn cm_to_feet_inches(cm: f64) -> (u32, f64) {
    let total_inches = cm / CM_PER_INCH;
    let feet = (total_inches / INCHES_PER_FOOT).floor();
    let inches = round_to(total_inches % INCHES_PER_FOOT, 1);

    (feet as u32, inches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_inches_to_cm() {
        assert_eq!(feet_inches_to_cm(4, 7.0), 139.7);
        assert_eq!(feet_inches_to_cm(5, 0.0), 152.4);
        assert_eq!(feet_inches_to_cm(1, 0.0), 30.5);
    }

    #[test]
    fn test_cm_to_feet_inches() {
        assert_eq!(cm_to_feet_inches(170.0), (5, 6.9));
        assert_eq!(cm_to_feet_inches(152.4), (5, 0.0));
        assert_eq!(cm_to_feet_inches(100.0), (3, 3.4));
    }

    #[test]
    fn test_round_trip_within_a_millimetre() {
        for &cm in &[50.0, 99.9, 138.0, 170.0, 199.5] {
            let (feet, inches) = cm_to_feet_inches(cm);

            let back = feet_inches_to_cm(feet, inches);

            assert!(
                (back - cm).abs() <= 0.1 + 1e-9,
                "{} cm -> {} ft {} in -> {} cm",
                cm,
                feet,
                inches,
                back
            );
        }
    }
}
