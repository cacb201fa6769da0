//! Per-username handlers: profile, image and existence check.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;
use log::{error, info};

use super::super::types::{ApiState, CheckResponse, ImageBody, ImageResponse, ResponseEnvelope};
use crate::config::snapcode_url;
use crate::error_handling::{ErrorType, ExtractionError, InfoType, ProcessingStats, WarningType};
use crate::extract::{Extraction, SNAPCODE_SOURCE, STORY_AVATAR_SOURCE};
use crate::models::ExtractedRecord;
use crate::utils::elapsed_ms;

const IMAGE_NOT_FOUND: &str = "Profile image not found";

/// Full profile record for a username.
pub async fn profile_handler(
    State(state): State<ApiState>,
    Path(username): Path<String>,
) -> Json<ResponseEnvelope<ExtractedRecord>> {
    let start = Instant::now();
    state.requests_served.fetch_add(1, Ordering::Relaxed);

    let envelope = match scrape_profile(&state, username.clone()).await {
        Ok(record) => ResponseEnvelope::ok(record, state.owner(), elapsed_ms(start)),
        Err(e) => ResponseEnvelope::failure(e.to_string(), state.owner()),
    };
    info!(
        "Served profile for {} in {:.2} ms (success={})",
        username,
        elapsed_ms(start),
        envelope.success
    );
    Json(envelope)
}

/// Profile picture and snapcode only.
pub async fn image_handler(
    State(state): State<ApiState>,
    Path(username): Path<String>,
) -> Json<ImageResponse> {
    let start = Instant::now();
    state.requests_served.fetch_add(1, Ordering::Relaxed);

    let response = match scrape_profile(&state, username.clone()).await {
        Ok(record) if record.exists => ImageResponse {
            success: true,
            username: record.username,
            body: ImageBody::Found {
                profile_picture_url: record.profile_picture_url,
                snapcode_url: record.snapcode_url,
            },
            owner: state.owner(),
        },
        _ => ImageResponse {
            success: false,
            username: username.clone(),
            body: ImageBody::Missing {
                error: IMAGE_NOT_FOUND,
            },
            owner: state.owner(),
        },
    };
    info!(
        "Served image for {} in {:.2} ms (success={})",
        username,
        elapsed_ms(start),
        response.success
    );
    Json(response)
}

/// Existence check without scraping.
pub async fn check_handler(
    State(state): State<ApiState>,
    Path(username): Path<String>,
) -> Json<CheckResponse> {
    state.requests_served.fetch_add(1, Ordering::Relaxed);

    let response = match state.fetcher.check_exists(&username).await {
        Ok(exists) => CheckResponse {
            success: true,
            snapcode_url: Some(snapcode_url(&username)),
            username,
            exists,
            owner: state.owner(),
        },
        Err(_) => CheckResponse {
            success: false,
            username,
            exists: false,
            snapcode_url: None,
            owner: state.owner(),
        },
    };
    Json(response)
}

/// Fetches both pages and runs the extractor off the async runtime.
///
/// Only a fault inside the extractor itself surfaces as an error; fetch failures
/// have already become absent pages.
async fn scrape_profile(
    state: &ApiState,
    username: String,
) -> Result<ExtractedRecord, ExtractionError> {
    let (profile, story) = state.fetcher.fetch_pages(&username).await;
    let extractor = Arc::clone(&state.extractor);
    let outcome = tokio::task::spawn_blocking(move || {
        extractor.extract_detailed(&username, &profile, &story)
    })
    .await;

    match outcome {
        Ok(extraction) => {
            record_extraction_stats(&state.stats, &extraction);
            Ok(extraction.record)
        }
        Err(e) => {
            state.stats.increment_error(ErrorType::ExtractionFailure);
            error!("Extraction task failed: {}", e);
            Err(ExtractionError::from(e))
        }
    }
}

fn record_extraction_stats(stats: &ProcessingStats, extraction: &Extraction) {
    let record = &extraction.record;
    if record.exists {
        stats.increment_info(InfoType::ProfileFound);
        if record.display_name.is_none() {
            stats.increment_warning(WarningType::MissingTitle);
        }
        if record.description.is_none() {
            stats.increment_warning(WarningType::MissingMetaDescription);
        }
    } else {
        stats.increment_info(InfoType::ProfileNotFound);
    }
    if record.has_stories {
        stats.increment_info(InfoType::StoriesFound);
    }
    match extraction.picture_source {
        Some(STORY_AVATAR_SOURCE) => stats.increment_info(InfoType::StoryAvatarUsed),
        Some(SNAPCODE_SOURCE) => stats.increment_warning(WarningType::MissingProfilePicture),
        _ => {}
    }
}
