//! WASM bindings for cadence-engine.
//!
//! Exposes create/update validation, slot suggestion, and free-window
//! computation to JavaScript via `wasm-bindgen`, so the interactive activity
//! form previews conflicts with the exact rules the server enforces. All
//! complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p cadence-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/cadence-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/cadence_engine_wasm.wasm
//! ```

use cadence_engine::activity::{Activity, ActivityId};
use cadence_engine::validate::{CreateRequest, UpdateRequest};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: JSON in, JSON out
// ---------------------------------------------------------------------------

/// Parse a JSON array of activity objects (camelCase fields).
fn parse_activities_json(json: &str) -> Result<Vec<Activity>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid activities JSON: {}", e)))
}

fn parse_activity_id(id: &str) -> Result<ActivityId, JsValue> {
    id.parse()
        .map_err(|_| JsValue::from_str(&format!("Invalid activity id '{}'", id)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Validate a new-activity request against the existing schedule.
///
/// `request_json` is a create request (`dayOfWeek` accepts a single weekday
/// name or an array); `existing_json` is a JSON array of the user's stored
/// activities. Returns a JSON decision object tagged with
/// `status: "accepted" | "rejected"`; the rejected shape carries the
/// conflicting activity's title/day/time and an optional `suggestedTime`.
#[wasm_bindgen(js_name = "checkCreate")]
pub fn check_create(request_json: &str, existing_json: &str) -> Result<String, JsValue> {
    let request: CreateRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid create request JSON: {}", e)))?;
    let existing = parse_activities_json(existing_json)?;

    let decision = cadence_engine::validate_create(&request, &existing)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_json(&decision)
}

/// Validate an edit to the stored activity with id `activity_id`.
///
/// `request_json` holds only the changed fields; absent fields keep their
/// stored values, and an explicit `"specificDate": null` clears the date and
/// turns the activity back into a weekly series. Same decision shape as
/// [`check_create`].
#[wasm_bindgen(js_name = "checkUpdate")]
pub fn check_update(
    activity_id: &str,
    request_json: &str,
    existing_json: &str,
) -> Result<String, JsValue> {
    let id = parse_activity_id(activity_id)?;
    let request: UpdateRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid update request JSON: {}", e)))?;
    let existing = parse_activities_json(existing_json)?;

    let decision = cadence_engine::validate_update(id, &request, &existing)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_json(&decision)
}

/// Propose an alternative "HH:MM" start for a draft activity, or null.
///
/// `candidate_json` is a full activity object; `exclude_id` (optional) skips
/// the draft's own stored row when editing. Returns a JSON string value or
/// JSON null when the slot is already clear or no nearby slot opened up.
#[wasm_bindgen(js_name = "suggestSlot")]
pub fn suggest_slot(
    candidate_json: &str,
    existing_json: &str,
    exclude_id: Option<String>,
) -> Result<String, JsValue> {
    let candidate: Activity = serde_json::from_str(candidate_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid candidate JSON: {}", e)))?;
    let existing = parse_activities_json(existing_json)?;
    let exclude = exclude_id
        .as_deref()
        .map(parse_activity_id)
        .transpose()?;

    let suggestion = cadence_engine::suggest_slot(&candidate, &existing, exclude)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_json(&suggestion)
}

/// Find free windows between two "HH:MM" bounds, given one day's activities.
///
/// `activities_json` must already be narrowed to a single weekday. Returns a
/// JSON array of `{start, end, durationMinutes}` objects.
#[wasm_bindgen(js_name = "freeWindows")]
pub fn free_windows(
    activities_json: &str,
    window_start: &str,
    window_end: &str,
) -> Result<String, JsValue> {
    let activities = parse_activities_json(activities_json)?;

    let windows = cadence_engine::free_windows(&activities, window_start, window_end)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_json(&windows)
}
