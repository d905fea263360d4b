use indexmap::IndexMap;
use tracing::debug;

use crate::core::{ALL_SITES, Dataset};
use crate::render::{
    CallbackBinding, Component, ComponentProperty, Dropdown, PageLayout, RangeSlider,
    SelectOption, Style,
};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

pub const PIE_ENDPOINT: &str = "/api/pie";
pub const SCATTER_ENDPOINT: &str = "/api/scatter";

/// Fixed payload control domain, independent of the loaded data.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;

fn style(pairs: &[(&str, &str)]) -> Style {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect()
}

fn site_dropdown(dataset: &Dataset) -> Dropdown {
    let options = std::iter::once(SelectOption {
        label: "All Sites".to_owned(),
        value: ALL_SITES.to_owned(),
    })
    .chain(dataset.distinct_sites().into_iter().map(|site| SelectOption {
        label: site.to_owned(),
        value: site.to_owned(),
    }))
    .collect();

    Dropdown {
        id: SITE_DROPDOWN_ID.to_owned(),
        options,
        value: ALL_SITES.to_owned(),
        placeholder: "Select a Launch Site".to_owned(),
        searchable: true,
        style: style(&[
            ("width", "100%"),
            ("padding", "3px"),
            ("font-size", "20px"),
            ("textAlignLast", "center"),
        ]),
    }
}

fn payload_slider(dataset: &Dataset) -> RangeSlider {
    let (low, high) = match dataset.payload_extent() {
        Some((min, max)) => (min, max),
        None => (PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX),
    };
    let marks: IndexMap<String, String> = (0..=10_000u32)
        .step_by(1_000)
        .map(|tick| (tick.to_string(), tick.to_string()))
        .collect();

    RangeSlider {
        id: PAYLOAD_SLIDER_ID.to_owned(),
        min: PAYLOAD_SLIDER_MIN,
        max: PAYLOAD_SLIDER_MAX,
        step: PAYLOAD_SLIDER_STEP,
        marks,
        value: [low, high],
    }
}

fn callbacks() -> Vec<CallbackBinding> {
    vec![
        CallbackBinding {
            output: ComponentProperty::new(PIE_CHART_ID, "figure"),
            inputs: vec![ComponentProperty::new(SITE_DROPDOWN_ID, "value")],
            endpoint: PIE_ENDPOINT.to_owned(),
        },
        CallbackBinding {
            output: ComponentProperty::new(SCATTER_CHART_ID, "figure"),
            inputs: vec![
                ComponentProperty::new(SITE_DROPDOWN_ID, "value"),
                ComponentProperty::new(PAYLOAD_SLIDER_ID, "value"),
            ],
            endpoint: SCATTER_ENDPOINT.to_owned(),
        },
    ]
}

/// Builds the static dashboard page from the loaded dataset.
///
/// The site options follow first-seen order. The payload slider spans a
/// fixed 0-10000 kg domain, but its initial interval is the dataset's own
/// payload extent, so the initial handles may sit outside the control's
/// range for heavier datasets.
#[must_use]
pub fn build_layout(dataset: &Dataset) -> PageLayout {
    let dropdown = site_dropdown(dataset);
    let slider = payload_slider(dataset);
    debug!(
        site_options = dropdown.options.len(),
        initial_low = slider.value[0],
        initial_high = slider.value[1],
        "built dashboard layout"
    );

    let root = Component::Container {
        children: vec![
            Component::Heading {
                text: DASHBOARD_TITLE.to_owned(),
                style: style(&[
                    ("textAlign", "center"),
                    ("color", "#503D36"),
                    ("font-size", "40px"),
                ]),
            },
            Component::Container {
                children: vec![Component::Dropdown(dropdown)],
                style: style(&[("width", "80%"), ("margin", "0 auto")]),
            },
            Component::LineBreak,
            Component::Container {
                children: vec![Component::Graph {
                    id: PIE_CHART_ID.to_owned(),
                }],
                style: Style::new(),
            },
            Component::LineBreak,
            Component::Paragraph {
                text: "Payload range (Kg):".to_owned(),
                style: style(&[("textAlign", "center")]),
            },
            Component::RangeSlider(slider),
            Component::LineBreak,
            Component::Container {
                children: vec![Component::Graph {
                    id: SCATTER_CHART_ID.to_owned(),
                }],
                style: Style::new(),
            },
        ],
        style: Style::new(),
    };

    PageLayout {
        title: DASHBOARD_TITLE.to_owned(),
        root,
        callbacks: callbacks(),
    }
}
