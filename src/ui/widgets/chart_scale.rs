/// Vertical bounds for a price chart.
///
/// The range does not start at zero; it is padded around the observed
/// minimum and maximum so small seasonal swings stay visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    pub lo: f64,
    pub hi: f64,
}

impl ChartScale {
    pub fn from_values(values: impl IntoIterator<Item = f64>, padding: f64) -> Option<Self> {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })?;

        let span = max - min;
        let pad = if span > 0.0 {
            span * padding
        } else {
            (min.abs() * padding).max(1.0)
        };

        Some(Self {
            lo: min - pad,
            hi: max + pad,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_range() {
        let scale = ChartScale::from_values([2000.0, 2400.0], 0.1).unwrap();
        assert_eq!(scale.lo, 1960.0);
        assert_eq!(scale.hi, 2440.0);
    }

    #[test]
    fn test_flat_series_still_has_span() {
        let scale = ChartScale::from_values([2500.0, 2500.0], 0.1).unwrap();
        assert!(scale.hi > scale.lo);
        assert_eq!(scale.lo + scale.hi, 5000.0);
    }

    #[test]
    fn test_empty_and_nan() {
        assert!(ChartScale::from_values(Vec::<f64>::new(), 0.1).is_none());
        assert!(ChartScale::from_values([f64::NAN], 0.1).is_none());
    }
}
