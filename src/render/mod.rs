mod chart;
mod layout;
mod page;
mod plotly;

pub use chart::{
    ChartData, ChartDescription, PieSlice, ScatterEncoding, ScatterPoint, ScatterSeries,
};
pub use layout::{
    CallbackBinding, Component, ComponentProperty, Dropdown, PageLayout, RangeSlider,
    SelectOption, Style,
};
pub use page::render_page;
pub use plotly::{PlotlyAxis, PlotlyFigure, PlotlyLayout, PlotlyLegend, PlotlyText, PlotlyTrace};
