//! Filter Panel Widget
//! Left side panel with the three categorical multi-selects.

use crate::data::filter::{distinct_stops, distinct_strings};
use crate::data::FilterSelection;
use egui::{Color32, RichText, ScrollArea};
use polars::prelude::DataFrame;
use std::collections::BTreeSet;

/// Actions triggered by the filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPanelAction {
    None,
    SelectionChanged,
}

/// Left side panel listing every observed Airline, Source and stop count as
/// a checkbox. The value lists are fixed at startup; only the selection
/// changes afterwards.
pub struct FilterPanel {
    airline_values: Vec<String>,
    source_values: Vec<String>,
    stop_values: Vec<i64>,
    status: String,
}

impl FilterPanel {
    pub fn from_dataset(df: &DataFrame) -> Self {
        Self {
            airline_values: distinct_strings(df, "Airline"),
            source_values: distinct_strings(df, "Source"),
            stop_values: distinct_stops(df),
            status: "Ready".to_string(),
        }
    }

    pub fn set_status(&mut self, status: String) {
        self.status = status;
    }

    /// Draw the panel.
    pub fn show(&mut self, ui: &mut egui::Ui, selection: &mut FilterSelection) -> FilterPanelAction {
        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("✈ FareView")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Flight Price Explorer")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(RichText::new("📊 Filters").size(14.0).strong());

        let mut changed = false;
        changed |= value_group(
            ui,
            "Airline",
            &self.airline_values,
            &mut selection.airlines,
            |v| v.clone(),
        );
        changed |= value_group(
            ui,
            "Source",
            &self.source_values,
            &mut selection.sources,
            |v| v.clone(),
        );
        changed |= value_group(ui, "Stops", &self.stop_values, &mut selection.stops, |v| {
            if *v == 0 {
                "non-stop".to_string()
            } else {
                format!("{} stop(s)", v)
            }
        });

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        if changed {
            FilterPanelAction::SelectionChanged
        } else {
            FilterPanelAction::None
        }
    }
}

/// One checkbox group with Select All / Clear All shortcuts. Returns whether
/// the selection changed this frame.
fn value_group<T: Ord + Clone>(
    ui: &mut egui::Ui,
    label: &str,
    values: &[T],
    selected: &mut BTreeSet<T>,
    label_of: impl Fn(&T) -> String,
) -> bool {
    let mut changed = false;

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).size(13.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("None").clicked() {
                selected.clear();
                changed = true;
            }
            if ui.small_button("All").clicked() {
                *selected = values.iter().cloned().collect();
                changed = true;
            }
        });
    });

    egui::Frame::none()
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .rounding(5.0)
        .inner_margin(5.0)
        .show(ui, |ui| {
            ScrollArea::vertical()
                .id_salt(format!("filter_group_{label}"))
                .max_height(140.0)
                .show(ui, |ui| {
                    for value in values {
                        let mut checked = selected.contains(value);
                        if ui.checkbox(&mut checked, label_of(value)).changed() {
                            if checked {
                                selected.insert(value.clone());
                            } else {
                                selected.remove(value);
                            }
                            changed = true;
                        }
                    }
                });
        });

    changed
}
