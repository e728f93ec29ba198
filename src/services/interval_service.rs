use crate::models::{
    check_week_shape, validate_intervals, NormalizedInterval, ServiceError, WeekdayInterval,
};
use crate::services::SchedulingBackend;
use std::sync::Arc;

pub struct TimeIntervalService {
    backend: Arc<dyn SchedulingBackend>,
}

impl TimeIntervalService {
    pub fn new(backend: Arc<dyn SchedulingBackend>) -> Self {
        Self { backend }
    }

    /// Validates one availability submission and forwards the normalized
    /// intervals to the scheduling backend.
    pub async fn submit(
        &self,
        intervals: &[WeekdayInterval],
    ) -> Result<Vec<NormalizedInterval>, ServiceError> {
        // Business logic: shape first, then the availability pipeline
        check_week_shape(intervals)?;
        let normalized = validate_intervals(intervals)?;

        self.backend.submit_time_intervals(&normalized).await?;

        tracing::info!(
            "Time intervals submitted: {} enabled day(s)",
            normalized.len()
        );
        Ok(normalized)
    }
}
