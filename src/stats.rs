//! Numeric Transforms
//!
//! The small set of statistics used by the chart builders: ordinary
//! least-squares trend fitting, means, element-wise differences, Pearson
//! correlation and stable value ranking. All functions are pure and make
//! no assumptions about where the series came from.

/// Fitted values of an ordinary least-squares line through `values`,
/// regressing against index position (0, 1, 2, ...).
///
/// Returns `None` for fewer than 2 points - a trend through a single
/// observation is meaningless and callers skip the overlay.
pub fn linear_trend(values: &[f64]) -> Option<Vec<f64>> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    let n_f = n as f64;
    let sum_x: f64 = (0..n).map(|i| i as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values.iter().enumerate().map(|(i, v)| i as f64 * v).sum();
    let sum_x2: f64 = (0..n).map(|i| (i as f64).powi(2)).sum();

    let denominator = n_f * sum_x2 - sum_x.powi(2);
    if denominator == 0.0 {
        return None;
    }

    let slope = (n_f * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n_f;

    Some((0..n).map(|i| intercept + slope * i as f64).collect())
}

/// Arithmetic mean, or `None` on empty input (reference line skipped).
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Element-wise difference `a[i] - b[i]` of two equal-length series.
///
/// Used for net migration (arrivals - departures) and natural increase
/// (births - deaths).
pub fn difference(a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_assert_eq!(a.len(), b.len(), "difference expects equal-length series");
    a.iter().zip(b.iter()).map(|(x, y)| x - y).collect()
}

/// Calculate Pearson correlation coefficient
///
/// Returns a value between -1 and 1:
/// - 1: perfect positive correlation
/// - 0: no correlation
/// - -1: perfect negative correlation
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }

    let n = x.len() as f64;

    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|a| a * a).sum();
    let sum_y2: f64 = y.iter().map(|b| b * b).sum();

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x.powi(2)) * (n * sum_y2 - sum_y.powi(2))).sqrt();

    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Pairwise Pearson correlation across columns.
///
/// The result is symmetric with diagonal entries exactly 1.0. A column
/// with zero variance correlates at 0.0 with everything else but still
/// carries 1.0 on the diagonal.
pub fn correlation_matrix(columns: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = columns.len();
    let mut matrix = vec![vec![0.0; n]; n];

    for i in 0..n {
        matrix[i][i] = 1.0;
        for j in (i + 1)..n {
            let r = pearson(&columns[i], &columns[j]);
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }

    matrix
}

/// Sort (label, value) pairs descending by value.
///
/// The sort is stable: equal values keep their original relative order.
pub fn rank_descending(pairs: &[(String, f64)]) -> Vec<(String, f64)> {
    let mut ranked = pairs.to_vec();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pearson_perfect_positive() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
        let r = pearson(&x, &y);
        assert!((r - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![10.0, 8.0, 6.0, 4.0, 2.0];
        let r = pearson(&x, &y);
        assert!((r + 1.0).abs() < 0.001);
    }

    #[test]
    fn test_pearson_empty() {
        let x: Vec<f64> = vec![];
        let y: Vec<f64> = vec![];
        assert_eq!(pearson(&x, &y), 0.0);
    }

    #[test]
    fn test_pearson_constant_series() {
        // Zero variance -> degenerate denominator -> 0.0
        let x = vec![3.0, 3.0, 3.0, 3.0];
        let y = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(pearson(&x, &y), 0.0);
    }

    #[test]
    fn test_linear_trend_exact_line() {
        // Points already on a line fit themselves exactly
        let values = vec![2.0, 4.0, 6.0, 8.0];
        let fitted = linear_trend(&values).unwrap();
        for (f, v) in fitted.iter().zip(values.iter()) {
            assert!((f - v).abs() < 1e-9);
        }
    }

    #[test]
    fn test_linear_trend_slope_direction() {
        let declining = vec![100.0, 95.0, 92.0, 85.0, 80.0];
        let fitted = linear_trend(&declining).unwrap();
        assert!(fitted.first().unwrap() > fitted.last().unwrap());
    }

    #[test]
    fn test_linear_trend_too_few_points() {
        assert!(linear_trend(&[]).is_none());
        assert!(linear_trend(&[5.0]).is_none());
    }

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_difference_elementwise() {
        let arrivals = vec![28.5, 24.2, 26.8];
        let departures = vec![26.8, 23.5, 25.2];
        let net = difference(&arrivals, &departures);
        for i in 0..arrivals.len() {
            assert!((net[i] - (arrivals[i] - departures[i])).abs() < 1e-9);
        }
    }

    #[test]
    fn test_correlation_matrix_properties() {
        let columns = vec![
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![2.0, 4.0, 5.9, 8.1, 10.0],
            vec![5.0, 4.0, 3.0, 2.0, 1.0],
        ];
        let matrix = correlation_matrix(&columns);

        for i in 0..3 {
            assert!((matrix[i][i] - 1.0).abs() < 1e-9);
            for j in 0..3 {
                assert_eq!(matrix[i][j], matrix[j][i]);
                assert!(matrix[i][j] >= -1.0 && matrix[i][j] <= 1.0);
            }
        }
    }

    #[test]
    fn test_correlation_matrix_constant_column_diagonal() {
        let columns = vec![vec![7.0, 7.0, 7.0], vec![1.0, 2.0, 3.0]];
        let matrix = correlation_matrix(&columns);
        assert_eq!(matrix[0][0], 1.0);
        assert_eq!(matrix[0][1], 0.0);
    }

    #[test]
    fn test_rank_descending_order() {
        let pairs = vec![
            ("a".to_string(), 3.0),
            ("b".to_string(), 9.0),
            ("c".to_string(), 1.0),
        ];
        let ranked = rank_descending(&pairs);
        let values: Vec<f64> = ranked.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![9.0, 3.0, 1.0]);
    }

    #[test]
    fn test_rank_descending_stable_ties() {
        let pairs = vec![
            ("first".to_string(), 5.0),
            ("second".to_string(), 5.0),
            ("third".to_string(), 7.0),
        ];
        let ranked = rank_descending(&pairs);
        assert_eq!(ranked[0].0, "third");
        // Tied values keep input order
        assert_eq!(ranked[1].0, "first");
        assert_eq!(ranked[2].0, "second");
    }
}
