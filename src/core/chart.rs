use crate::domain::model::ChartSpec;
use std::fmt::Display;

/// Turns an ordered count mapping into a render-ready chart descriptor.
/// Pure structural transform: no aggregation or filtering happens here.
///
/// The label font size follows the readability heuristic the charts were
/// tuned with: `min(310 / key_count, 15)`, so more bars get smaller labels,
/// clamped at 15. An empty mapping yields empty labels/values and the
/// clamp value; callers render nothing.
pub fn build_chart_spec<K: Display>(
    mapping: &[(K, u64)],
    title: &str,
    x_label: &str,
    y_label: &str,
    color: &str,
    edge_color: &str,
) -> ChartSpec {
    let labels: Vec<String> = mapping.iter().map(|(key, _)| key.to_string()).collect();
    let values: Vec<u64> = mapping.iter().map(|(_, count)| *count).collect();

    let label_font_size = if mapping.is_empty() {
        15.0
    } else {
        (310.0 / mapping.len() as f32).min(15.0)
    };

    ChartSpec {
        title: title.to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        color: color.to_string(),
        edge_color: edge_color.to_string(),
        labels,
        values,
        label_font_size,
    }
}
