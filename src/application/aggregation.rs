// Time-range aggregation - Trailing window selection, re-bucketing and ranking
use crate::domain::metrics::{Aggregation, NamedValue, PieSlice, TimeSeriesPoint};
use crate::domain::time_range::TimeRange;

/// Select the trailing window of `series` for `range`, re-bucketing long ranges.
///
/// `series` must be ascending by date. A series shorter than the window is
/// returned unmodified. Buckets are fixed-size runs of consecutive points
/// aligned to the newest sample, so only the oldest bucket can be partial;
/// each bucket carries the date of its first point.
pub fn select_range(
    series: &[TimeSeriesPoint],
    range: TimeRange,
    aggregation: Aggregation,
) -> Vec<TimeSeriesPoint> {
    let window = range.window_days();
    if series.len() < window {
        return series.to_vec();
    }

    let trailing = &series[series.len() - window..];
    let bucket_days = range.bucket_days();
    if bucket_days <= 1 {
        return trailing.to_vec();
    }

    let mut buckets: Vec<TimeSeriesPoint> = trailing
        .rchunks(bucket_days)
        .map(|chunk| merge_bucket(chunk, aggregation))
        .collect();
    buckets.reverse();
    buckets
}

/// Number of points `select_range` yields for a series of `series_len` points.
pub fn selected_len(series_len: usize, range: TimeRange) -> usize {
    if series_len < range.window_days() {
        series_len
    } else {
        range.window_size()
    }
}

fn merge_bucket(chunk: &[TimeSeriesPoint], aggregation: Aggregation) -> TimeSeriesPoint {
    let total: f64 = chunk.iter().map(|p| p.value).sum();
    let value = match aggregation {
        Aggregation::Sum => total,
        Aggregation::Mean => total / chunk.len() as f64,
    };
    TimeSeriesPoint::new(chunk[0].date, value)
}

/// The `n` largest entries, descending by value. Ties keep input order.
pub fn top_n(data: &[NamedValue], n: usize) -> Vec<NamedValue> {
    let mut ranked = data.to_vec();
    // sort_by is stable
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked.truncate(n);
    ranked
}

/// Percentage share of each entry in the total, input order preserved.
pub fn share_of_total(data: &[NamedValue]) -> Vec<PieSlice> {
    let total: f64 = data.iter().map(|d| d.value).sum();

    data.iter()
        .map(|d| PieSlice {
            name: d.name.clone(),
            value: d.value,
            share: if total > 0.0 { d.value / total * 100.0 } else { 0.0 },
        })
        .collect()
}
