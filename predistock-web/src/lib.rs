//! Web front end for PrediStock.
//!
//! Serves the dashboard page (`/`), the same report as JSON
//! (`/api/dashboard`), brokerage redirects (`/buy/:symbol`), and a liveness
//! probe (`/healthz`). Pages are MiniJinja templates with HTML auto-escaping;
//! charts are Plotly figures embedded as JSON.

pub mod cli;
mod error;
mod page;
mod routes;

pub use crate::error::WebError;
pub use crate::page::{HOME_URL, PageView, Pages, ReportView};
pub use crate::routes::{AppState, DashboardParams, router};
