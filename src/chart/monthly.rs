use crate::aggregate::{format_mm, Month, Period, Total};

use super::{month_range_buttons, Axis, ColorAxis, Figure, Layout, Marker, Title, Trace, TraceKind};

/// Monthly totals as coloured bars with French month ticks.
pub fn monthly_figure(months: &[Total<Month>], site: &str) -> Figure {
    let x: Vec<String> = months
        .iter()
        .map(|m| m.period.start().format("%Y-%m-%d").to_string())
        .collect();
    let y: Vec<f64> = months.iter().map(|m| m.mm).collect();

    let trace = Trace {
        kind: TraceKind::Bar,
        x: x.clone(),
        text: Some(y.iter().copied().map(format_mm).collect()),
        textposition: Some("inside".to_string()),
        marker: Some(Marker::by_value(&y)),
        hovertemplate: Some("%{x|%m/%Y}<br>%{y} mm<extra></extra>".to_string()),
        y,
        ..Default::default()
    };

    let xaxis = Axis {
        tickformat: Some("%b %Y".to_string()),
        tickmode: Some("array".to_string()),
        tickvals: Some(x),
        ticktext: Some(months.iter().map(|m| m.period.label()).collect()),
        ..Axis::date_range(month_range_buttons(&[3, 6, 9, 12]))
    };

    let layout = Layout {
        title: Title::new(format!("Pluviométrie mensuelle - {}", site)),
        xaxis,
        yaxis: Axis::bare(),
        coloraxis: Some(ColorAxis::haline_reversed()),
        ..Default::default()
    };

    Figure {
        data: vec![trace],
        layout,
    }
}
