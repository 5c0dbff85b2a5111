//! Plotly figure documents for the three rainfall charts.
//!
//! Figures are plain serde structures that serialize to the JSON consumed by
//! `Plotly.newPlot`; rendering happens in the browser.

pub mod daily;
pub mod monthly;
pub mod page;
pub mod quarterly;

use serde::Serialize;
use serde_json::Value;

use crate::{
    aggregate::{aggregate, Month, Quarter},
    reading::Measurement,
};

pub use daily::daily_figure;
pub use monthly::monthly_figure;
pub use quarterly::quarterly_figure;

pub const DEFAULT_SITE: &str = "AUREIL - 71, route de Saint-Antoine";

/// cmocean `haline`, reversed: pale yellow for light rain, deep blue for heavy.
const HALINE: [&str; 12] = [
    "rgb(41, 24, 107)",
    "rgb(42, 35, 160)",
    "rgb(15, 71, 153)",
    "rgb(18, 95, 142)",
    "rgb(38, 116, 137)",
    "rgb(53, 136, 136)",
    "rgb(65, 157, 133)",
    "rgb(81, 178, 124)",
    "rgb(111, 196, 107)",
    "rgb(160, 209, 73)",
    "rgb(210, 217, 56)",
    "rgb(253, 238, 153)",
];

/// The three charts published on every run.
#[derive(Debug, Clone)]
pub struct Charts {
    pub daily: Figure,
    pub monthly: Figure,
    pub quarterly: Figure,
}

impl Charts {
    pub fn build(measurements: &[Measurement], site: &str) -> Self {
        let months = aggregate::<Month>(measurements);
        let quarters = aggregate::<Quarter>(measurements);

        Charts {
            daily: daily_figure(measurements, site),
            monthly: monthly_figure(&months, site),
            quarterly: quarterly_figure(&quarters, site),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    #[default]
    Scatter,
    Bar,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coloraxis: Option<String>,
}

impl Marker {
    /// Colours each bar by its value on the layout's shared colour axis.
    pub fn by_value(values: &[f64]) -> Self {
        Marker {
            color: Some(values.to_vec()),
            coloraxis: Some("coloraxis".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Title { text: text.into() }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coloraxis: Option<ColorAxis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updatemenus: Vec<UpdateMenu>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Axis {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showticklabels: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticktext: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangeselector: Option<RangeSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangeslider: Option<RangeSlider>,
}

impl Axis {
    /// An axis with no title and no tick labels.
    pub fn bare() -> Self {
        Axis {
            showticklabels: Some(false),
            ..Default::default()
        }
    }

    /// A date axis with zoom shortcuts and a range slider.
    pub fn date_range(buttons: Vec<RangeButton>) -> Self {
        Axis {
            kind: Some("date".to_string()),
            rangeselector: Some(RangeSelector { buttons }),
            rangeslider: Some(RangeSlider { visible: true }),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RangeSelector {
    pub buttons: Vec<RangeButton>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RangeSlider {
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeButton {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    pub label: String,
    pub step: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stepmode: Option<String>,
}

impl RangeButton {
    /// Zooms to the last `count` months.
    pub fn months_back(count: u32, label: impl Into<String>) -> Self {
        RangeButton {
            count: Some(count),
            label: label.into(),
            step: "month".to_string(),
            stepmode: Some("backward".to_string()),
        }
    }

    /// Shows the whole series.
    pub fn all(label: impl Into<String>) -> Self {
        RangeButton {
            count: None,
            label: label.into(),
            step: "all".to_string(),
            stepmode: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorAxis {
    pub colorscale: Vec<(f64, String)>,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

impl ColorAxis {
    pub fn haline_reversed() -> Self {
        let steps = (HALINE.len() - 1) as f64;
        let colorscale = HALINE
            .iter()
            .rev()
            .enumerate()
            .map(|(i, color)| (i as f64 / steps, color.to_string()))
            .collect();

        ColorAxis {
            colorscale,
            colorbar: ColorBar { title: Title::new("Mm") },
        }
    }
}

/// A drop-down whose buttons restyle the figure in place.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateMenu {
    pub buttons: Vec<MenuButton>,
    pub direction: String,
    pub showactive: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuButton {
    pub args: Vec<Value>,
    pub label: String,
    pub method: String,
}

/// Range selector buttons shared by the daily and monthly charts.
pub(crate) fn month_range_buttons(months: &[u32]) -> Vec<RangeButton> {
    let mut buttons: Vec<RangeButton> = months
        .iter()
        .map(|&count| match count {
            24 => RangeButton::months_back(count, "2 dernières années"),
            _ => RangeButton::months_back(count, format!("{} derniers mois", count)),
        })
        .collect();
    buttons.push(RangeButton::all("Tout"));

    buttons
}

// -- Tests -------------------------------------------------------------------
