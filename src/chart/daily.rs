use crate::reading::Measurement;

use super::{month_range_buttons, Axis, Figure, Layout, Title, Trace, TraceKind};

/// Every reading as a line with markers, zoomable from 3 months to 2 years.
pub fn daily_figure(measurements: &[Measurement], site: &str) -> Figure {
    let trace = Trace {
        kind: TraceKind::Scatter,
        x: measurements
            .iter()
            .map(|m| m.date.format("%Y-%m-%d").to_string())
            .collect(),
        y: measurements.iter().map(|m| m.mm).collect(),
        mode: Some("lines+markers".to_string()),
        hovertemplate: Some("%{x|%d/%m/%Y}<br>%{y} mm<extra></extra>".to_string()),
        ..Default::default()
    };

    let layout = Layout {
        title: Title::new(format!("Relevès pluviométriques - {}", site)),
        xaxis: Axis::date_range(month_range_buttons(&[3, 6, 9, 12, 24])),
        yaxis: Axis::bare(),
        ..Default::default()
    };

    Figure {
        data: vec![trace],
        layout,
    }
}
