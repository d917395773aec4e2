use crate::types::{AxisDomain, PlottedPoint};

/// Fraction of the value span added above and below the data.
const PADDING_RATIO: f64 = 0.1;

/// Vertical axis bounds for the selected variations over the whole series.
///
/// The lower bound never goes below zero. When there is nothing to scan the
/// default `[0, 100]` domain is returned instead of infinite bounds.
pub fn compute_domain(points: &[PlottedPoint], selected: &[String]) -> AxisDomain {
    if points.is_empty() {
        return AxisDomain::DEFAULT;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for point in points {
        for id in selected {
            if let Some(value) = point.value(id).filter(|v| !v.is_nan()) {
                min = min.min(value);
                max = max.max(value);
            }
        }
    }

    if !min.is_finite() || !max.is_finite() {
        return AxisDomain::DEFAULT;
    }

    let padding = (max - min) * PADDING_RATIO;
    AxisDomain {
        min: (min - padding).floor().max(0.0),
        max: (max + padding).ceil(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use quickcheck_macros::quickcheck;

    fn point(values: &[(&str, f64)]) -> PlottedPoint {
        PlottedPoint {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            values: values.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(compute_domain(&[], &ids(&["A"])), AxisDomain::DEFAULT);
    }

    #[test]
    fn test_empty_selection() {
        let points = vec![point(&[("A", 12.0)])];
        assert_eq!(compute_domain(&points, &[]), AxisDomain::DEFAULT);
    }

    #[test]
    fn test_padding_and_rounding() {
        let points = vec![point(&[("A", 10.0), ("B", 20.0)]), point(&[("A", 15.0)])];
        // span 10 -> padding 1
        assert_eq!(
            compute_domain(&points, &ids(&["A", "B"])),
            AxisDomain { min: 9.0, max: 21.0 }
        );
    }

    #[test]
    fn test_lower_bound_is_clamped_to_zero() {
        let points = vec![point(&[("A", 0.5)]), point(&[("A", 40.0)])];
        let domain = compute_domain(&points, &ids(&["A"]));
        assert_eq!(domain.min, 0.0);
        assert_eq!(domain.max, 44.0);
    }

    #[test]
    fn test_unselected_and_nan_values_are_ignored() {
        let points = vec![point(&[("A", 30.0), ("B", 90.0), ("C", f64::NAN)])];
        let domain = compute_domain(&points, &ids(&["A", "C"]));
        assert_eq!(domain, AxisDomain { min: 30.0, max: 30.0 });
    }

    #[test]
    fn test_only_nan_values_fall_back_to_default() {
        let points = vec![point(&[("A", f64::NAN)])];
        assert_eq!(compute_domain(&points, &ids(&["A"])), AxisDomain::DEFAULT);
    }

    #[quickcheck]
    fn domain_contains_every_value(values: Vec<u16>) -> bool {
        let points: Vec<PlottedPoint> = values
            .iter()
            .map(|v| point(&[("A", f64::from(*v) / 10.0)]))
            .collect();
        let domain = compute_domain(&points, &ids(&["A"]));
        if points.is_empty() {
            return domain == AxisDomain::DEFAULT;
        }
        let min = values.iter().map(|v| f64::from(*v) / 10.0).fold(f64::INFINITY, f64::min);
        let max = values.iter().map(|v| f64::from(*v) / 10.0).fold(f64::NEG_INFINITY, f64::max);
        domain.min <= min && domain.max >= max && domain.min >= 0.0
    }
}
