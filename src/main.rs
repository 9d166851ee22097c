use activity_scout::api::{ActivityApi, ActivityQuery, ApiClient};
use activity_scout::display::{format_relative_time, ReviewHeadline};
use activity_scout::geocoding::{GeocodeQuery, Geocoder, NaverGeocodeSdk, ReadinessPoller, SdkSlot};
use activity_scout::models::{Activity, GeocodeResult, TimeSlot};
use activity_scout::schedule::filter_available;
use activity_scout::AppConfig;
use anyhow::Result;
use chrono::{Datelike, Local};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// One line of the saved report
#[derive(Debug, Serialize)]
struct ActivityReport {
    id: i64,
    title: String,
    address: String,
    headline: String,
    updated: String,
    open_slots_today: Option<Vec<TimeSlot>>,
    coordinates: Option<GeocodeResult>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🧭 Activity Scout");
    info!("=================");

    let config = AppConfig::from_env();
    let api = ApiClient::from_config(&config)?;

    let slot = SdkSlot::new();
    let poller = ReadinessPoller::spawn(
        slot.clone(),
        config.readiness_poll_interval,
        config.readiness_deadline,
    );
    match config.map_credentials() {
        Some((id, secret)) => {
            let sdk = NaverGeocodeSdk::new(
                &config.geocode_endpoint,
                id,
                secret,
                config.request_timeout,
            )?;
            slot.install(Arc::new(sdk));
            poller.flag().wait_ready().await;
        }
        None => warn!("No map credentials configured, coordinates will be skipped"),
    }
    let geocodes = GeocodeQuery::new(Geocoder::new(slot), poller.flag(), config.retry_policy());

    info!("Fetching activities from {}...", config.api_base_url);
    let page = api.list_activities(&ActivityQuery::default()).await?;
    info!("✅ Fetched {} of {} activities\n", page.activities.len(), page.total_count);

    let mut reports = Vec::with_capacity(page.activities.len());
    for (i, activity) in page.activities.iter().enumerate() {
        let report = build_report(&api, &geocodes, activity).await;

        println!("{}. {} ({}원)", i + 1, report.title, activity.price);
        println!("   {}", report.headline);
        println!("   Updated: {}", report.updated);
        println!("   Address: {}", report.address);
        if let Some(coords) = &report.coordinates {
            println!("   Coordinates: {:.6}, {:.6}", coords.x, coords.y);
        }
        match &report.open_slots_today {
            Some(slots) if !slots.is_empty() => {
                let times: Vec<_> = slots
                    .iter()
                    .map(|s| format!("{}~{}", s.start_time, s.end_time))
                    .collect();
                println!("   Open today: {}", times.join(", "));
            }
            Some(_) => println!("   Open today: none left"),
            None => println!("   Open today: no schedule"),
        }
        println!();

        reports.push(report);
    }

    let json = serde_json::to_string_pretty(&reports)?;
    tokio::fs::write("activity_report.json", json).await?;
    info!("💾 Saved {} activities to activity_report.json", reports.len());

    Ok(())
}

async fn build_report(
    api: &ApiClient,
    geocodes: &GeocodeQuery,
    activity: &Activity,
) -> ActivityReport {
    let today = Local::now().date_naive();

    let schedule = api
        .available_schedule(activity.id, today.year(), today.month())
        .await;
    let open_slots_today = match schedule {
        Ok(days) => {
            let slots = days.into_iter().find(|day| day.date == today).map(|day| day.times);
            filter_available(slots.as_deref(), today)
        }
        Err(e) => {
            warn!("Schedule unavailable for activity {}: {:#}", activity.id, e);
            None
        }
    };

    let coordinates = match geocodes.fetch(&activity.address).await {
        Ok(coords) => coords,
        Err(e) => {
            warn!("Could not geocode '{}': {}", activity.address, e);
            None
        }
    };

    ActivityReport {
        id: activity.id,
        title: activity.title.clone(),
        address: activity.address.clone(),
        headline: ReviewHeadline::new(activity.rating, activity.review_count).to_string(),
        updated: format_relative_time(&activity.updated_at.to_rfc3339()),
        open_slots_today,
        coordinates,
    }
}
