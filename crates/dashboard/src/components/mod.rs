//! Reusable view components.

pub mod charts;
pub mod data_table;

pub use charts::{AreaChart, BarChart, DashboardCharts, LineChart};
pub use data_table::{TableColumn, shoe_columns};
