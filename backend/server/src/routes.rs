use std::sync::Arc;

use axum::{
    Json,
    extract::{self, Path, Query, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use dataset::SUGGESTION_LIMIT;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::AppError, state::State};

pub const WELCOME_MESSAGE: &str = "Welcome to Indian Food Nutrition API";

#[derive(Serialize)]
pub struct Welcome {
    pub message: &'static str,
    pub status: &'static str,
    pub total_foods: usize,
    pub endpoints: Endpoints,
    pub example_searches: [&'static str; 3],
}

#[derive(Serialize)]
pub struct Endpoints {
    pub foods_list: &'static str,
    pub search_food: &'static str,
    pub get_food: &'static str,
    pub suggestions: &'static str,
}

#[derive(Serialize)]
struct Foods<'a> {
    foods: &'a [String],
}

#[derive(Serialize)]
struct Suggestions<'a> {
    suggestions: Vec<&'a str>,
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    total_foods: usize,
}

#[derive(Deserialize)]
pub struct SearchParams {
    dish: Option<String>,
}

#[derive(Deserialize)]
pub struct SuggestionParams {
    q: Option<String>,
}

pub async fn welcome_handler(extract::State(state): extract::State<Arc<State>>) -> Json<Welcome> {
    Json(Welcome {
        message: WELCOME_MESSAGE,
        status: "running",
        total_foods: state.dataset.len(),
        endpoints: Endpoints {
            foods_list: "/foods",
            search_food: "/search?dish=DISH_NAME",
            get_food: "/food/DISH_NAME",
            suggestions: "/suggestions?q=QUERY",
        },
        example_searches: [
            "/search?dish=Naan",
            "/search?dish=Chapati/Roti",
            "/search?dish=Masala dosa",
        ],
    })
}

pub async fn foods_handler(extract::State(state): extract::State<Arc<State>>) -> Response {
    Json(Foods {
        foods: state.dataset.list_all(),
    })
    .into_response()
}

pub async fn food_handler(
    extract::State(state): extract::State<Arc<State>>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let entry = state.dataset.get_exact(&name)?;

    Ok(Json(entry).into_response())
}

pub async fn search_handler(
    extract::State(state): extract::State<Arc<State>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params?;

    // whole-name match, padding is not stripped
    let dish = params
        .dish
        .as_deref()
        .filter(|dish| !dish.is_empty())
        .ok_or(AppError::InvalidRequest("dish"))?;

    let entry = state.dataset.get_exact(dish).inspect_err(|_| {
        debug!("No dish matching {dish}");
    })?;

    Ok(Json(entry).into_response())
}

pub async fn suggestions_handler(
    extract::State(state): extract::State<Arc<State>>,
    params: Result<Query<SuggestionParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params?;
    let query = params.q.as_deref().unwrap_or_default().trim();

    Ok(Json(Suggestions {
        suggestions: state.dataset.suggest(query, SUGGESTION_LIMIT),
    })
    .into_response())
}

pub async fn health_handler(extract::State(state): extract::State<Arc<State>>) -> Response {
    Json(Health {
        status: "healthy",
        total_foods: state.dataset.len(),
    })
    .into_response()
}

pub async fn fallback_handler() -> AppError {
    AppError::UnknownRoute
}
