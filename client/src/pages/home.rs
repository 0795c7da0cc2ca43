//! Home page: occupancy charts and the recent-access table.

use leptos::prelude::*;

use crate::components::access_table::AccessTable;
use crate::components::content_wrapper::{Align, ContentWrapper};
use crate::components::occupancy_chart::OccupancyChart;
use crate::state::dashboard::SharedDashboardSource;

/// Renders whatever the `DashboardSource` in context provides.
#[component]
pub fn HomePage() -> impl IntoView {
    let source = expect_context::<SharedDashboardSource>();
    let lots = source.parking_lots();
    let records = source.access_log();

    view! {
        <ContentWrapper align=Align::Top>
            <div class="paper home-page">
                <h4 class="page-title home-page__title">"Página Inicial"</h4>
                <div class="home-page__charts">
                    {lots
                        .into_iter()
                        .map(|lot| view! { <div class="home-page__chart"><OccupancyChart lot=lot/></div> })
                        .collect_view()}
                </div>
                <AccessTable records=records/>
            </div>
        </ContentWrapper>
    }
}
