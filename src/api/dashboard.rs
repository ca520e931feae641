//! Dashboard Endpoint

use crate::models::DashboardSnapshot;
use super::{ApiError, ApiRequest, Transport};

pub const DASHBOARD_ENDPOINT: &str = "/escalas/api/dashboard";

/// Single attempt, no retry.
pub async fn fetch_dashboard<T: Transport>(transport: &T) -> Result<DashboardSnapshot, ApiError> {
    transport
        .send(ApiRequest::get(DASHBOARD_ENDPOINT))
        .await?
        .into_json()
}
