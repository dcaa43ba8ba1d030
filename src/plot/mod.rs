//! SVG box-plot sink (plotters backend).
//!
//! Draws one vertical box per (bucket, period) group from the raw values of
//! the filtered dataset. Quartiles are recomputed here by plotters' own
//! `Quartiles` (the library convention for box plots); the sink consumes no
//! summary-table internals.

use std::collections::BTreeMap;
use std::path::Path;

use plotters::prelude::*;

use crate::dataset::CleanedDataset;

static DEFAULT_FONT: FontFamily = FontFamily::SansSerif;
static SIZE: (u32, u32) = (960, 540);
static BOX_WIDTH: u32 = 20;

const DARK_BLUE: RGBColor = RGBColor(31, 120, 180);

/// Renders the grouped box-and-whisker chart to an SVG file.
///
/// Does nothing when the dataset is empty.
pub fn grouped_boxplot(dataset: &CleanedDataset, title: &str, path: &Path) {
    let mut groups = BTreeMap::new();
    for row in dataset.long_rows() {
        groups
            .entry((row.bucket, row.period))
            .or_insert_with(Vec::new)
            .push(row.value);
    }
    if groups.is_empty() {
        return;
    }

    let labels: Vec<String> = groups
        .keys()
        .map(|&(bucket, period)| format!("{} / {}", bucket, period))
        .collect();
    let values: Vec<Vec<f64>> = groups.into_iter().map(|(_, values)| values).collect();

    let y_range = plotters::data::fitting_range(values.iter().flatten());
    let y_range = y_range.start as f32..y_range.end as f32;

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).unwrap();

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (DEFAULT_FONT, 20))
        .margin(10)
        .x_label_area_size(70)
        .y_label_area_size(70)
        .build_cartesian_2d(labels[..].into_segmented(), y_range)
        .unwrap();

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("turnover")
        .draw()
        .unwrap();

    chart
        .draw_series(labels.iter().zip(&values).map(|(label, values)| {
            Boxplot::new_vertical(SegmentValue::CenterOf(label), &Quartiles::new(values))
                .width(BOX_WIDTH)
                .style(&DARK_BLUE)
        }))
        .unwrap();

    root.present().unwrap();
}
