use crate::api::types::ActivityQuery;
use crate::display::ReservationStatus;
use crate::models::{ActivityDetail, ActivityPage, DailySchedule, ReservationPage, ReviewPage};
use anyhow::Result;
use async_trait::async_trait;

/// Read-only view of the activity booking API
#[async_trait]
pub trait ActivityApi: Send + Sync {
    async fn list_activities(&self, query: &ActivityQuery) -> Result<ActivityPage>;

    async fn get_activity(&self, id: i64) -> Result<ActivityDetail>;

    /// Days of `year`-`month` that still have slots, with their slots
    async fn available_schedule(
        &self,
        id: i64,
        year: i32,
        month: u32,
    ) -> Result<Vec<DailySchedule>>;

    async fn reviews(&self, id: i64, page: u32, size: u32) -> Result<ReviewPage>;

    async fn my_reservations(&self, status: Option<ReservationStatus>) -> Result<ReservationPage>;
}
