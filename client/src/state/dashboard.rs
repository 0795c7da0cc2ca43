//! Home-page datasets behind an injectable provider.
//!
//! DESIGN
//! ======
//! Pages read chart and table data from a `DashboardSource` found in Leptos
//! context instead of compile-time constants. `StaticDashboard` supplies the
//! placeholder figures until a live source exists.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One labelled value of a parking-lot occupancy chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OccupancySlice {
    pub label: String,
    pub value: f64,
}

/// Occupancy breakdown for a single parking area.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParkingLot {
    pub title: String,
    pub slices: Vec<OccupancySlice>,
}

impl ParkingLot {
    fn free_and_taken(title: &str, free: f64, taken: f64) -> Self {
        Self {
            title: title.to_owned(),
            slices: vec![
                OccupancySlice { label: "Livres".to_owned(), value: free },
                OccupancySlice { label: "Ocupadas".to_owned(), value: taken },
            ],
        }
    }
}

/// A vehicle entering and leaving through the gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRecord {
    pub user: String,
    pub plate: String,
    pub entered_at: String,
    pub left_at: String,
}

/// Capability the home page depends on for its data.
pub trait DashboardSource: Send + Sync {
    fn parking_lots(&self) -> Vec<ParkingLot>;
    fn access_log(&self) -> Vec<AccessRecord>;
}

/// Shared handle placed in Leptos context.
pub type SharedDashboardSource = Arc<dyn DashboardSource>;

/// Placeholder figures shown until real occupancy data is wired in.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticDashboard;

impl DashboardSource for StaticDashboard {
    fn parking_lots(&self) -> Vec<ParkingLot> {
        vec![
            ParkingLot::free_and_taken("Campus", 800.0, 200.0),
            ParkingLot::free_and_taken("Bolsão", 300.0, 700.0),
        ]
    }

    fn access_log(&self) -> Vec<AccessRecord> {
        const ROWS: [(&str, &str, &str, &str); 5] = [
            ("Usuário 1", "EXI-7254", "06/05/19 15:59:22", "06/05/19 18:49:22"),
            ("Usuário 2", "ABC-1234", "06/05/19 15:44:32", "06/05/19 19:59:22"),
            ("Usuário 3", "ABC-4321", "06/05/19 14:50:13", "06/05/19 15:59:22"),
            ("Usuário 4", "CBA-1234", "06/05/19 14:36:53", "06/05/19 17:59:22"),
            ("Usuário 5", "CBA-4321", "06/05/19 14:33:30", "06/05/19 22:59:22"),
        ];
        ROWS.iter()
            .map(|(user, plate, entered_at, left_at)| AccessRecord {
                user: (*user).to_owned(),
                plate: (*plate).to_owned(),
                entered_at: (*entered_at).to_owned(),
                left_at: (*left_at).to_owned(),
            })
            .collect()
    }
}
