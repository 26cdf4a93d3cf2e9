//! REST Command Wrappers
//!
//! Frontend bindings to the board API, organized by domain. Requests are
//! same-origin; the base comes from the window location.

mod board;
mod member;
mod task;

use serde::de::DeserializeOwned;
use serde::Serialize;

// Re-export all public items
pub use board::*;
pub use member::*;
pub use task::*;

fn api_url(path: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| "no window origin".to_string())?;
    Ok(format!("{}{}", origin, path))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = api_url(path)?;
    let response = reqwest::get(&url).await.map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("GET {} failed: {}", path, response.status()));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let url = api_url(path)?;
    let response = reqwest::Client::new()
        .post(&url)
        .json(body)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("POST {} failed: {}", path, response.status()));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

async fn post_empty<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let url = api_url(path)?;
    let response = reqwest::Client::new()
        .post(&url)
        .json(body)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("POST {} failed: {}", path, response.status()));
    }
    Ok(())
}

async fn patch_empty<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let url = api_url(path)?;
    let response = reqwest::Client::new()
        .patch(&url)
        .json(body)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("PATCH {} failed: {}", path, response.status()));
    }
    Ok(())
}

async fn delete_empty(path: &str) -> Result<(), String> {
    let url = api_url(path)?;
    let response = reqwest::Client::new()
        .delete(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("DELETE {} failed: {}", path, response.status()));
    }
    Ok(())
}
