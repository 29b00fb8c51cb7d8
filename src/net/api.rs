//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<T, String>` with a display-ready message.
//! Callers surface the string inline; there are no retries and no panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CareTask, Garden, NewGarden, NewSeedBatch, NutrientOptimization, PlantVariety};

#[cfg(any(test, feature = "hydrate"))]
fn garden_endpoint(garden_id: &str) -> String {
    format!("/api/gardens/{garden_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn optimization_endpoint(garden_id: &str) -> String {
    format!("/api/gardens/{garden_id}/nutrient-optimization")
}

#[cfg(any(test, feature = "hydrate"))]
fn care_tasks_endpoint(garden_id: &str) -> String {
    format!("/api/gardens/{garden_id}/care-tasks")
}

#[cfg(any(test, feature = "hydrate"))]
fn complete_task_endpoint(task_id: &str) -> String {
    format!("/api/care-tasks/{task_id}/complete")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Fetch all gardens from `GET /api/gardens`.
///
/// # Errors
///
/// Returns a display string if the request fails or the response is not JSON.
pub async fn fetch_gardens() -> Result<Vec<Garden>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/gardens")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("garden list", resp.status()));
        }
        resp.json::<Vec<Garden>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a garden via `POST /api/gardens`.
///
/// # Errors
///
/// Returns a display string if the request fails or is rejected.
pub async fn create_garden(payload: &NewGarden) -> Result<Garden, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/gardens")
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("create garden", resp.status()));
        }
        resp.json::<Garden>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Delete a garden via `DELETE /api/gardens/{garden_id}`.
///
/// # Errors
///
/// Returns a display string if the request fails or is rejected.
pub async fn delete_garden(garden_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&garden_endpoint(garden_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete garden", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = garden_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the selectable plant varieties from `GET /api/plant-varieties`.
///
/// # Errors
///
/// Returns a display string if the request fails or the response is not JSON.
pub async fn fetch_plant_varieties() -> Result<Vec<PlantVariety>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/plant-varieties")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("variety list", resp.status()));
        }
        resp.json::<Vec<PlantVariety>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a seed batch via `POST /api/seed-batches`.
///
/// # Errors
///
/// Returns a display string if the request fails or is rejected.
pub async fn create_seed_batch(payload: &NewSeedBatch) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/seed-batches")
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("create seed batch", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Fetch the pre-computed nutrient optimization for a garden from
/// `GET /api/gardens/{garden_id}/nutrient-optimization`.
///
/// # Errors
///
/// Returns a display string if the request fails or the response is not JSON.
pub async fn fetch_nutrient_optimization(garden_id: &str) -> Result<NutrientOptimization, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&optimization_endpoint(garden_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("optimization fetch", resp.status()));
        }
        resp.json::<NutrientOptimization>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = garden_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch care tasks for a garden from
/// `GET /api/gardens/{garden_id}/care-tasks`.
///
/// # Errors
///
/// Returns a display string if the request fails or the response is not JSON.
pub async fn fetch_care_tasks(garden_id: &str) -> Result<Vec<CareTask>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&care_tasks_endpoint(garden_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("task list", resp.status()));
        }
        resp.json::<Vec<CareTask>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = garden_id;
        Err("not available on server".to_owned())
    }
}

/// Mark a care task completed via `POST /api/care-tasks/{task_id}/complete`.
///
/// Returns the updated task record.
///
/// # Errors
///
/// Returns a display string if the request fails or is rejected.
pub async fn complete_task(task_id: &str) -> Result<CareTask, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&complete_task_endpoint(task_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("complete task", resp.status()));
        }
        resp.json::<CareTask>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = task_id;
        Err("not available on server".to_owned())
    }
}
