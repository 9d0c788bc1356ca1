//! Accumulated prediction history and its chart projection.

/// One successful prediction, recorded in submission order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryPoint {
    pub year: i32,
    pub predicted_price: f64,
}

/// Insertion-ordered series of every successful prediction in the session.
///
/// The series is never mutated in place: [`PredictionHistory::append`]
/// returns the next value and leaves the prior one untouched, so a handle
/// held by an earlier render can never observe a later append. Repeated
/// submissions for the same year produce repeated points — no dedup, no
/// sort, no merge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictionHistory {
    points: Vec<HistoryPoint>,
}

impl PredictionHistory {
    /// Returns the next series with one point added at the end.
    #[must_use]
    pub fn append(&self, year: i32, predicted_price: f64) -> PredictionHistory {
        let mut points = self.points.clone();
        points.push(HistoryPoint {
            year,
            predicted_price,
        });
        PredictionHistory { points }
    }

    /// The empty series.
    pub fn clear() -> PredictionHistory {
        PredictionHistory::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[HistoryPoint] {
        &self.points
    }

    /// Index-aligned projection for the line chart: `labels[i]` is the year
    /// of the i-th submission and `values[i]` its predicted price.
    pub fn to_chart_series(&self) -> ChartSeries {
        ChartSeries {
            labels: self.points.iter().map(|p| p.year).collect(),
            values: self.points.iter().map(|p| p.predicted_price).collect(),
        }
    }
}

/// Chart-ready pair of equal-length, index-aligned sequences.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub labels: Vec<i32>,
    pub values: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order_and_prior_points() {
        let empty = PredictionHistory::default();
        let one = empty.append(2020, 850000.0);
        let two = one.append(2021, 900000.0);

        assert_eq!(two.len(), 2);
        assert_eq!(
            two.points()[0],
            HistoryPoint {
                year: 2020,
                predicted_price: 850000.0
            }
        );
        assert_eq!(
            two.points()[1],
            HistoryPoint {
                year: 2021,
                predicted_price: 900000.0
            }
        );

        // Earlier values are unaffected by later appends.
        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn test_append_keeps_repeated_years() {
        let series = PredictionHistory::default()
            .append(2020, 850000.0)
            .append(2020, 860000.0);

        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[0].predicted_price, 850000.0);
        assert_eq!(series.points()[1].predicted_price, 860000.0);
    }

    #[test]
    fn test_chart_series_is_index_aligned_at_every_length() {
        let mut series = PredictionHistory::default();
        let years = [2013, 2021, 2017, 2021];
        let prices = [700000.0, 900000.0, 800000.0, 910000.0];

        for (i, (&year, &price)) in years.iter().zip(prices.iter()).enumerate() {
            let chart = series.to_chart_series();
            assert_eq!(chart.labels.len(), i);
            assert_eq!(chart.values.len(), i);

            series = series.append(year, price);

            let chart = series.to_chart_series();
            assert_eq!(chart.labels.len(), i + 1);
            assert_eq!(chart.values.len(), i + 1);
            assert_eq!(chart.labels[i], year);
            assert_eq!(chart.values[i], price);
        }

        let chart = series.to_chart_series();
        assert_eq!(chart.labels, vec![2013, 2021, 2017, 2021]);
        assert_eq!(chart.values, vec![700000.0, 900000.0, 800000.0, 910000.0]);
    }

    #[test]
    fn test_clear_returns_empty_series() {
        assert!(PredictionHistory::clear().is_empty());
        assert_eq!(PredictionHistory::clear().to_chart_series(), ChartSeries::default());
    }
}
