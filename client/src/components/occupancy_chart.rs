//! Donut chart card for one parking area's occupancy.

use leptos::prelude::*;

use crate::state::dashboard::ParkingLot;
use crate::util::donut::{self, INNER_RADIUS, OUTER_RADIUS, PADDING_ANGLE_DEG};

const CENTER_X: f64 = 275.0;
const CENTER_Y: f64 = 100.0;

/// Card with a titled donut chart and a vertical legend.
#[component]
pub fn OccupancyChart(lot: ParkingLot) -> impl IntoView {
    let values: Vec<f64> = lot.slices.iter().map(|s| s.value).collect();
    let arcs = donut::donut_arcs(&values, PADDING_ANGLE_DEG);

    let segments = arcs
        .into_iter()
        .enumerate()
        .map(|(i, arc)| {
            let d = donut::arc_path(CENTER_X, CENTER_Y, INNER_RADIUS, OUTER_RADIUS, arc);
            view! { <path class="occupancy-chart__slice" d=d fill=donut::slice_color(i)></path> }
        })
        .collect_view();

    let legend = lot
        .slices
        .into_iter()
        .enumerate()
        .map(|(i, slice)| {
            let swatch = format!("background-color: {};", donut::slice_color(i));
            view! {
                <li class="occupancy-chart__legend-item">
                    <span class="occupancy-chart__swatch" style=swatch></span>
                    <span class="occupancy-chart__legend-label">{slice.label}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="card occupancy-chart">
            <h6 class="occupancy-chart__title">{lot.title}</h6>
            <div class="occupancy-chart__body">
                <svg class="occupancy-chart__svg" width="550" height="250" viewBox="0 0 550 250">
                    {segments}
                </svg>
                <ul class="occupancy-chart__legend">{legend}</ul>
            </div>
        </div>
    }
}
