//! Chart Tabs Widget
//! Central tabbed area: Overview, Price Analysis and Time Analysis.

use crate::charts::ChartPlotter;
use crate::gui::app::DashboardViews;
use crate::stats::AirlinePriceSummary;
use egui::{RichText, ScrollArea};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Price,
    Time,
}

/// Tab selector plus the chart content for the active tab.
pub struct ChartTabs {
    tab: Tab,
}

impl Default for ChartTabs {
    fn default() -> Self {
        Self { tab: Tab::Overview }
    }
}

impl ChartTabs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, views: &DashboardViews, row_count: usize) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.tab, Tab::Overview, "📈 Overview");
            ui.selectable_value(&mut self.tab, Tab::Price, "💰 Price Analysis");
            ui.selectable_value(&mut self.tab, Tab::Time, "🕒 Time Analysis");
        });
        ui.separator();

        if row_count == 0 {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No flights match the current filters").size(18.0));
            });
            return;
        }

        ScrollArea::vertical().show(ui, |ui| match self.tab {
            Tab::Overview => {
                ui.label(RichText::new("Flight Distribution").size(16.0).strong());
                ui.add_space(8.0);

                ui.columns(2, |cols| {
                    cols[0].label(RichText::new("Flights by Airline").strong());
                    ChartPlotter::draw_count_bars(&mut cols[0], "airline", &views.airline_counts);

                    cols[1].label(RichText::new("Flights by Source").strong());
                    ChartPlotter::draw_count_bars(&mut cols[1], "source", &views.source_counts);
                });

                ui.add_space(12.0);
                ui.label(RichText::new("Price by Airline").size(16.0).strong());
                ui.add_space(4.0);
                draw_summary_table(ui, &views.summary);
            }
            Tab::Price => {
                ui.label(RichText::new("Price Comparison").size(16.0).strong());
                ui.add_space(8.0);

                ui.columns(2, |cols| {
                    cols[0].label(RichText::new("Price vs Stops").strong());
                    ChartPlotter::draw_price_by_stops(&mut cols[0], &views.price_by_stops);

                    cols[1].label(RichText::new("Avg Price per Airline").strong());
                    ChartPlotter::draw_mean_price_bars(&mut cols[1], &views.mean_price);
                });
            }
            Tab::Time => {
                ui.label(RichText::new("Time vs Price").size(16.0).strong());
                ui.add_space(8.0);
                ChartPlotter::draw_duration_scatter(ui, &views.scatter);
            }
        });
    }
}

/// Descriptive Price statistics per airline.
fn draw_summary_table(ui: &mut egui::Ui, summary: &[AirlinePriceSummary]) {
    egui::Frame::none()
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .rounding(5.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            egui::Grid::new("airline_price_summary")
                .striped(true)
                .min_col_width(60.0)
                .spacing([10.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Airline").strong().size(11.0));
                    ui.label(RichText::new("N").strong().size(11.0));
                    ui.label(RichText::new("Mean").strong().size(11.0));
                    ui.label(RichText::new("Median").strong().size(11.0));
                    ui.label(RichText::new("Std").strong().size(11.0));
                    ui.label(RichText::new("Min").strong().size(11.0));
                    ui.label(RichText::new("Max").strong().size(11.0));
                    ui.end_row();

                    for row in summary {
                        ui.label(RichText::new(&row.airline).size(11.0));
                        ui.label(RichText::new(row.count.to_string()).size(11.0));
                        ui.label(RichText::new(format!("{:.1}", row.mean)).size(11.0));
                        ui.label(RichText::new(format!("{:.1}", row.median)).size(11.0));
                        ui.label(RichText::new(format!("{:.1}", row.std)).size(11.0));
                        ui.label(RichText::new(format!("{:.0}", row.min)).size(11.0));
                        ui.label(RichText::new(format!("{:.0}", row.max)).size(11.0));
                        ui.end_row();
                    }
                });
        });
}
