use serde_json::{json, Value};

use crate::aggregate::{format_mm, Period, Quarter, Total};

use super::{
    Axis, ColorAxis, Figure, Layout, Marker, MenuButton, Title, Trace, TraceKind, UpdateMenu,
};

/// Quarterly totals as bars, with a drop-down to show a single year.
pub fn quarterly_figure(quarters: &[Total<Quarter>], site: &str) -> Figure {
    let (x, y, text) = columns(quarters.iter());

    let trace = Trace {
        kind: TraceKind::Bar,
        x,
        text: Some(text),
        textposition: Some("inside".to_string()),
        marker: Some(Marker::by_value(&y)),
        hovertemplate: Some("%{x}<br>%{y} mm<extra></extra>".to_string()),
        y,
        ..Default::default()
    };

    let layout = Layout {
        title: Title::new(format!("Pluviométrie trimestrielle - {}", site)),
        xaxis: Axis::default(),
        yaxis: Axis {
            title: Title::new("Mm"),
            ..Default::default()
        },
        coloraxis: Some(ColorAxis::haline_reversed()),
        updatemenus: vec![UpdateMenu {
            buttons: year_buttons(quarters),
            direction: "down".to_string(),
            showactive: true,
        }],
    };

    Figure {
        data: vec![trace],
        layout,
    }
}

/// One button per year in chronological order, then `Tout` for every year.
fn year_buttons(quarters: &[Total<Quarter>]) -> Vec<MenuButton> {
    let mut years: Vec<i32> = quarters.iter().map(|q| q.period.year()).collect();
    years.dedup();

    let mut buttons: Vec<MenuButton> = years
        .into_iter()
        .map(|year| {
            let subset = quarters.iter().filter(|q| q.period.year() == year);
            restyle_button(year.to_string(), subset)
        })
        .collect();
    buttons.push(restyle_button("Tout".to_string(), quarters.iter()));

    buttons
}

fn restyle_button<'a>(
    label: String,
    quarters: impl Iterator<Item = &'a Total<Quarter>>,
) -> MenuButton {
    let (x, y, text) = columns(quarters);

    // Each value is wrapped once more: one entry per trace.
    let restyle: Value = json!({
        "x": [x],
        "y": [y],
        "text": [text],
        "marker.color": [y],
    });

    MenuButton {
        args: vec![restyle],
        label,
        method: "update".to_string(),
    }
}

fn columns<'a>(
    quarters: impl Iterator<Item = &'a Total<Quarter>>,
) -> (Vec<String>, Vec<f64>, Vec<String>) {
    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut text = Vec::new();

    for quarter in quarters {
        x.push(quarter.period.label());
        y.push(quarter.mm);
        text.push(format_mm(quarter.mm));
    }

    (x, y, text)
}
