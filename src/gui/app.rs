//! FareView Main Application
//! Main window with filter panel and tabbed chart area.

use crate::data::FilterSelection;
use crate::gui::{ChartTabs, FilterPanel, FilterPanelAction};
use crate::stats::{
    airline_price_summary, category_counts, duration_price_points, mean_price_by_airline,
    price_by_stops, AirlinePriceSummary, CategoryCounts, ScatterPoint,
};
use egui::SidePanel;
use polars::prelude::*;

/// All chart-ready aggregates for the current Filtered View. Rebuilt as a
/// whole on every selection change, never mutated in place.
#[derive(Default)]
pub struct DashboardViews {
    pub airline_counts: CategoryCounts,
    pub source_counts: CategoryCounts,
    pub price_by_stops: Vec<(i64, Vec<f64>)>,
    pub mean_price: Vec<(String, f64)>,
    pub scatter: Vec<ScatterPoint>,
    pub summary: Vec<AirlinePriceSummary>,
}

impl DashboardViews {
    pub fn compute(view: &DataFrame) -> PolarsResult<Self> {
        Ok(Self {
            airline_counts: category_counts(view, "Airline")?,
            source_counts: category_counts(view, "Source")?,
            price_by_stops: price_by_stops(view)?,
            mean_price: mean_price_by_airline(view)?,
            scatter: duration_price_points(view)?,
            summary: airline_price_summary(view)?,
        })
    }
}

/// Main application window.
pub struct FareViewApp {
    /// Normalized record set, read-only for the process lifetime.
    dataset: DataFrame,
    selection: FilterSelection,
    filter_panel: FilterPanel,
    chart_tabs: ChartTabs,

    /// Current Filtered View and its derived aggregates.
    filtered: DataFrame,
    views: DashboardViews,
}

impl FareViewApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, dataset: DataFrame) -> Self {
        let selection = FilterSelection::all_from(&dataset);
        let filter_panel = FilterPanel::from_dataset(&dataset);
        let filtered = dataset.clone();

        let mut app = Self {
            dataset,
            selection,
            filter_panel,
            chart_tabs: ChartTabs::new(),
            filtered,
            views: DashboardViews::default(),
        };
        app.recompute_views();
        app
    }

    /// Rebuild the Filtered View and every aggregate from the current
    /// selection. Runs synchronously; the next interaction waits for it.
    fn refilter(&mut self) {
        match self.selection.apply(&self.dataset) {
            Ok(view) => {
                self.filtered = view;
                self.recompute_views();
            }
            Err(e) => {
                log::error!("filter failed: {e}");
                self.filter_panel.set_status(format!("Error: {e}"));
            }
        }
    }

    fn recompute_views(&mut self) {
        match DashboardViews::compute(&self.filtered) {
            Ok(views) => {
                self.views = views;
                self.filter_panel.set_status(format!(
                    "{} of {} flights",
                    self.filtered.height(),
                    self.dataset.height()
                ));
            }
            Err(e) => {
                log::error!("aggregation failed: {e}");
                self.views = DashboardViews::default();
                self.filter_panel.set_status(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for FareViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - filters
        SidePanel::left("filter_panel")
            .min_width(240.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.filter_panel.show(ui, &mut self.selection);

                    if action == FilterPanelAction::SelectionChanged {
                        self.refilter();
                    }
                });
            });

        // Central panel - tabbed charts
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_tabs.show(ui, &self.views, self.filtered.height());
        });
    }
}
