//! Selected-period state and the pure frame builder that turns a table into
//! per-entity fills and a legend.

use crate::cache::BreaksCache;
use crate::error::BreaksError;
use crate::legend::{self, format_grouped, LegendRow};
use crate::model::{Breaks, ClassRange, Color, Palette};
use crate::table::PriceTable;
use serde::Serialize;
use tracing::warn;

pub const NO_DATA_TEXT: &str = "Data not available";

#[derive(Clone, Debug, PartialEq)]
pub struct MapState {
    periods: Vec<String>,
    selected: usize,
    palette: Palette,
}

impl MapState {
    /// Class count is the palette length.
    pub fn new(periods: Vec<String>, palette: Palette) -> MapState {
        MapState { periods, selected: 0, palette }
    }

    pub fn for_table(table: &PriceTable, palette: Palette) -> MapState {
        MapState::new(table.periods().to_vec(), palette)
    }

    pub fn periods(&self) -> &[String] { &self.periods }
    pub fn palette(&self) -> &Palette { &self.palette }
    pub fn classes(&self) -> usize { self.palette.num_classes() }
    pub fn selected_index(&self) -> usize { self.selected }

    pub fn selected_period(&self) -> Option<&str> {
        self.periods.get(self.selected).map(String::as_str)
    }

    pub fn select(&mut self, idx: usize) -> bool {
        if idx >= self.periods.len() {
            return false;
        }
        self.selected = idx;
        true
    }

    pub fn next(&mut self) -> bool {
        if self.selected + 1 >= self.periods.len() {
            return false;
        }
        self.selected += 1;
        true
    }

    pub fn prev(&mut self) -> bool {
        if self.selected == 0 {
            return false;
        }
        self.selected -= 1;
        true
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntityFill {
    pub entity: String,
    pub value: Option<f64>,
    pub class: Option<usize>,
    pub color: Color,
    pub popup: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub period: Option<String>,
    pub title: &'static str,
    pub breaks: Option<Breaks>,
    pub ranges: Vec<ClassRange>,
    pub legend: Vec<LegendRow>,
    pub fills: Vec<EntityFill>,
    /// Set when breaks could not be computed; every fill is then no-data.
    #[serde(serialize_with = "ser_fallback")]
    pub fallback: Option<BreaksError>,
}

impl Frame {
    pub fn fill(&self, entity: &str) -> Option<&EntityFill> {
        self.fills.iter().find(|f| f.entity == entity)
    }

    pub fn color_of(&self, entity: &str) -> Option<Color> { self.fill(entity).map(|f| f.color) }
}

fn ser_fallback<S: serde::Serializer>(e: &Option<BreaksError>, s: S) -> Result<S::Ok, S::Error> {
    match e {
        Some(e) => s.serialize_some(&serde_json::json!({ "code": e.code(), "message": e.to_string() })),
        None => s.serialize_none(),
    }
}

pub fn popup_text(entity: &str, value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}: ${}", entity, format_grouped(v)),
        None => format!("{}: {}", entity, NO_DATA_TEXT),
    }
}

/// Builds the frame for the selected period. Never fails: a period whose
/// values cannot be classified renders every entity in the no-data color.
pub fn render(table: &PriceTable, state: &MapState) -> Frame {
    render_with(table, state, |values, k| Breaks::compute(values, k))
}

/// Same as [`render`], reusing breaks from `cache` when the period's values repeat.
pub fn render_cached(table: &PriceTable, state: &MapState, cache: &mut BreaksCache) -> Frame {
    render_with(table, state, |values, k| cache.compute(values, k))
}

fn render_with<F>(table: &PriceTable, state: &MapState, mut compute: F) -> Frame
where
    F: FnMut(&[f64], usize) -> Result<Breaks, BreaksError>,
{
    let period = state.selected_period().map(str::to_string);
    let col = period.as_deref().and_then(|p| table.period_index(p));
    let values = period.as_deref().map(|p| table.values_for(p)).unwrap_or_default();

    let (breaks, fallback) = match compute(&values, state.classes()) {
        Ok(b) => (Some(b), None),
        Err(e) => {
            warn!(period = ?period, error = %e, "falling back to no-data fills");
            (None, Some(e))
        }
    };
    let palette = state.palette();
    let ranges = breaks.as_ref().map(|b| b.ranges(palette)).unwrap_or_default();

    let fills = table
        .rows()
        .iter()
        .map(|row| {
            let value = col.and_then(|j| row.values[j]);
            let class = breaks.as_ref().and_then(|b| b.classify(value));
            EntityFill {
                entity: row.entity.clone(),
                value,
                class,
                color: palette.color_for(class),
                popup: popup_text(&row.entity, value),
            }
        })
        .collect();

    Frame {
        period,
        title: legend::LEGEND_TITLE,
        legend: legend::legend_rows(&ranges),
        breaks,
        ranges,
        fills,
        fallback,
    }
}
