//! REST API helpers for communicating with the recipe service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Pages map errors to their own
//! user-facing message; the detail is logged here to the browser console.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use recipes::endpoints::DEFAULT_API_BASE;
use recipes::{
    ApiError, Endpoints, LoginRequest, LoginResponse, Recipe, RegisterRequest, RegisterResponse,
    SaveRecipeRequest, SavedRecipeIds,
};
#[cfg(feature = "hydrate")]
use serde::{Serialize, de::DeserializeOwned};

/// Recipe API base baked in at WASM build time, if any.
const CONFIGURED_API_BASE: Option<&str> = option_env!("RECIPE_API_URL");

/// Endpoints resolved against the configured (or default) API base.
pub fn endpoints() -> Endpoints {
    endpoints_for(CONFIGURED_API_BASE)
}

fn endpoints_for(configured: Option<&str>) -> Endpoints {
    Endpoints::new(configured.unwrap_or(DEFAULT_API_BASE))
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    ApiError::check_status(resp.status())?;
    let body = resp.text().await.map_err(network_error)?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let result = try_get_json(url).await;
    if let Err(e) = &result {
        log::warn!("GET {url} failed: {e}");
    }
    result
}

#[cfg(feature = "hydrate")]
async fn try_get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url).send().await.map_err(network_error)?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug)]
enum Method {
    Post,
    Put,
}

#[cfg(feature = "hydrate")]
async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: Method,
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let result = try_send_json(method, url, body).await;
    if let Err(e) = &result {
        log::warn!("{method:?} {url} failed: {e}");
    }
    result
}

#[cfg(feature = "hydrate")]
async fn try_send_json<B: Serialize, T: DeserializeOwned>(
    method: Method,
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let builder = match method {
        Method::Post => gloo_net::http::Request::post(url),
        Method::Put => gloo_net::http::Request::put(url),
    };
    let resp = builder
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    read_json(resp).await
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure, non-2xx status or bad body.
pub async fn register(request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(Method::Post, &endpoints().register(), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Log in via `POST /auth/login`, returning the user id.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure, non-2xx status or bad body.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(Method::Post, &endpoints().login(), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Fetch every recipe from `GET /recipes`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure, non-2xx status or bad body.
pub async fn fetch_recipes() -> Result<Vec<Recipe>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&endpoints().recipes()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Fetch a user's saved recipes from `GET /recipes/saved/{user_id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure, non-2xx status or bad body.
pub async fn fetch_saved_recipes(user_id: &str) -> Result<Vec<Recipe>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&endpoints().saved_recipes(user_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(unavailable())
    }
}

/// Fetch the ids of a user's saved recipes from
/// `GET /recipes/savedRecipes/ids/{user_id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure, non-2xx status or bad body.
pub async fn fetch_saved_recipe_ids(user_id: &str) -> Result<SavedRecipeIds, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&endpoints().saved_recipe_ids(user_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(unavailable())
    }
}

/// Save a recipe for a user via `PUT /recipes`; returns the updated id list.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure, non-2xx status or bad body.
pub async fn save_recipe(request: &SaveRecipeRequest) -> Result<SavedRecipeIds, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(Method::Put, &endpoints().recipes(), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}
