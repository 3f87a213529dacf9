/// Maps a value to its class index given ascending class start values.
///
/// Class `i` covers `[breaks[i], breaks[i+1])`; the last class has no upper
/// bound. Coincident starts collapse to the lowest index, so a value sitting
/// on a repeated boundary lands in the lower-indexed class.
///
/// `None` for missing or non-finite values, empty breaks, or values below
/// `breaks[0]`.
pub fn classify(value: Option<f64>, breaks: &[f64]) -> Option<usize> {
    let v = value.filter(|v| v.is_finite())?;
    // number of starts <= v
    let above = breaks.partition_point(|b| *b <= v);
    if above == 0 {
        return None;
    }
    let start = breaks[above - 1];
    Some(breaks.partition_point(|b| *b < start))
}

/// Classifies every value, preserving order.
pub fn classify_all(values: &[Option<f64>], breaks: &[f64]) -> Vec<Option<usize>> {
    values.iter().map(|v| classify(*v, breaks)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlier_gets_its_own_class() {
        let b = [1.0, 100.0];
        assert_eq!(classify(Some(6.0), &b), Some(0));
        assert_eq!(classify(Some(100.0), &b), Some(1));
        assert_eq!(classify(Some(1.0), &b), Some(0));
    }

    #[test]
    fn last_class_is_unbounded() {
        assert_eq!(classify(Some(1e300), &[0.0, 10.0, 20.0]), Some(2));
    }

    #[test]
    fn unclassified_cases() {
        let b = [10.0, 20.0];
        assert_eq!(classify(None, &b), None);
        assert_eq!(classify(Some(f64::NAN), &b), None);
        assert_eq!(classify(Some(f64::INFINITY), &b), None);
        assert_eq!(classify(Some(9.999), &b), None);
        assert_eq!(classify(Some(15.0), &[]), None);
    }

    #[test]
    fn repeated_boundary_resolves_low() {
        assert_eq!(classify(Some(5.0), &[5.0, 5.0]), Some(0));
        assert_eq!(classify(Some(5.0), &[1.0, 5.0, 5.0, 9.0]), Some(1));
        assert_eq!(classify(Some(6.0), &[1.0, 5.0, 5.0, 9.0]), Some(1));
    }

    #[test]
    fn classify_all_keeps_order() {
        let got = classify_all(&[Some(25.0), None, Some(10.0)], &[10.0, 20.0]);
        assert_eq!(got, vec![Some(1), None, Some(0)]);
    }
}
