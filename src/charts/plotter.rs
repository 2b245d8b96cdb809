//! Chart Plotter Module
//! Creates interactive visualizations using egui_plot.

use crate::stats::{CategoryCounts, ScatterPoint};
use egui::Color32;
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot, PlotPoints, Points};
use std::collections::BTreeMap;

/// Color palette for categorical series
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(255, 87, 34),   // Deep Orange
    Color32::from_rgb(121, 85, 72),   // Brown
];

const CHART_HEIGHT: f32 = 320.0;

/// Draws the dashboard charts with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Color for the i-th categorical series.
    pub fn series_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Vertical bar chart of per-category counts.
    /// X-axis: one slot per label, Y-axis: number of flights.
    pub fn draw_count_bars(ui: &mut egui::Ui, id: &str, counts: &CategoryCounts) {
        let bars: Vec<Bar> = counts
            .counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                Bar::new(i as f64, count as f64)
                    .width(0.6)
                    .fill(Self::series_color(i))
                    .name(&counts.labels[i])
            })
            .collect();

        let labels = counts.labels.clone();

        Plot::new(format!("count_bars_{id}"))
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .y_axis_label("Flights")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }

    /// Bar chart of the mean Price per airline.
    pub fn draw_mean_price_bars(ui: &mut egui::Ui, means: &[(String, f64)]) {
        let bars: Vec<Bar> = means
            .iter()
            .enumerate()
            .map(|(i, (airline, mean))| {
                Bar::new(i as f64, *mean)
                    .width(0.6)
                    .fill(Self::series_color(i))
                    .name(airline)
            })
            .collect();

        let labels: Vec<String> = means.iter().map(|(airline, _)| airline.clone()).collect();

        Plot::new("mean_price_bars")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .y_axis_label("Avg Price")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }

    /// Box plot of the Price distribution per stop count.
    /// X-axis: stop count, Y-axis: price.
    pub fn draw_price_by_stops(ui: &mut egui::Ui, buckets: &[(i64, Vec<f64>)]) {
        Plot::new("price_by_stops")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Stops")
            .y_axis_label("Price")
            .show(ui, |plot_ui| {
                for (idx, (stops, values)) in buckets.iter().enumerate() {
                    if values.is_empty() {
                        continue;
                    }

                    let color = Self::series_color(idx);

                    let mut sorted = values.clone();
                    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

                    let n = sorted.len();
                    let q1 = sorted[n / 4];
                    let median = sorted[n / 2];
                    let q3 = sorted[3 * n / 4];
                    let iqr = q3 - q1;
                    let whisker_low = sorted
                        .iter()
                        .copied()
                        .find(|&v| v >= q1 - 1.5 * iqr)
                        .unwrap_or(q1);
                    let whisker_high = sorted
                        .iter()
                        .rev()
                        .copied()
                        .find(|&v| v <= q3 + 1.5 * iqr)
                        .unwrap_or(q3);

                    let box_elem = BoxElem::new(
                        *stops as f64,
                        BoxSpread::new(whisker_low, q1, median, q3, whisker_high),
                    )
                    .box_width(0.5)
                    .fill(color.gamma_multiply(0.3))
                    .stroke(egui::Stroke::new(1.5, color));

                    plot_ui.box_plot(
                        BoxPlot::new(vec![box_elem]).name(format!("{} stops", stops)),
                    );
                }
            });
    }

    /// Scatter of Price against Duration_mins, one series per stop count.
    pub fn draw_duration_scatter(ui: &mut egui::Ui, points: &[ScatterPoint]) {
        let mut by_stops: BTreeMap<i64, Vec<[f64; 2]>> = BTreeMap::new();
        for p in points {
            by_stops
                .entry(p.stops)
                .or_default()
                .push([p.duration_mins, p.price]);
        }

        Plot::new("duration_scatter")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Duration (mins)")
            .y_axis_label("Price")
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                for (idx, (stops, pts)) in by_stops.into_iter().enumerate() {
                    let label = if stops == 0 {
                        "non-stop".to_string()
                    } else {
                        format!("{} stops", stops)
                    };

                    plot_ui.points(
                        Points::new(PlotPoints::from_iter(pts))
                            .radius(2.5)
                            .color(Self::series_color(idx))
                            .name(label),
                    );
                }
            });
    }
}
