use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Inline CSS declarations in insertion order.
pub type Style = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<SelectOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
    pub style: Style,
}

/// Two-handle range selector.
///
/// `min`/`max` bound the control while `value` is the initially selected
/// interval; the two are configured independently and `value` may fall
/// outside `[min, max]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSlider {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: IndexMap<String, String>,
    pub value: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum Component {
    Container {
        children: Vec<Component>,
        style: Style,
    },
    Heading {
        text: String,
        style: Style,
    },
    Paragraph {
        text: String,
        style: Style,
    },
    LineBreak,
    Dropdown(Dropdown),
    RangeSlider(RangeSlider),
    Graph {
        id: String,
    },
}

/// `(component id, property)` pair a callback reads or writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentProperty {
    pub id: String,
    pub property: String,
}

impl ComponentProperty {
    #[must_use]
    pub fn new(id: &str, property: &str) -> Self {
        Self {
            id: id.to_owned(),
            property: property.to_owned(),
        }
    }
}

/// Declares which endpoint recomputes `output` whenever any of `inputs` changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackBinding {
    pub output: ComponentProperty,
    pub inputs: Vec<ComponentProperty>,
    pub endpoint: String,
}

/// Static page description built once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub title: String,
    pub root: Component,
    pub callbacks: Vec<CallbackBinding>,
}

impl PageLayout {
    /// All components, depth-first in document order.
    #[must_use]
    pub fn components(&self) -> Vec<&Component> {
        let mut out = Vec::new();
        let mut stack = vec![&self.root];
        while let Some(component) = stack.pop() {
            out.push(component);
            if let Component::Container { children, .. } = component {
                stack.extend(children.iter().rev());
            }
        }
        out
    }

    #[must_use]
    pub fn dropdown(&self, id: &str) -> Option<&Dropdown> {
        self.components().into_iter().find_map(|component| match component {
            Component::Dropdown(dropdown) if dropdown.id == id => Some(dropdown),
            _ => None,
        })
    }

    #[must_use]
    pub fn range_slider(&self, id: &str) -> Option<&RangeSlider> {
        self.components().into_iter().find_map(|component| match component {
            Component::RangeSlider(slider) if slider.id == id => Some(slider),
            _ => None,
        })
    }

    #[must_use]
    pub fn graph_ids(&self) -> Vec<&str> {
        self.components()
            .into_iter()
            .filter_map(|component| match component {
                Component::Graph { id } => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }
}
