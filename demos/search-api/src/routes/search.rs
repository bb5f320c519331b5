use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use scryfall_sorter::{CardView, Organized, SortMode};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub sort_by: Option<String>,
}

/// GET /api/search?q=draw+a+card&sort_by=color
///
/// Search card rules text and return the results grouped by the requested
/// sort mode. Unknown or missing `sort_by` values group by type.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, AppError> {
    let query = params
        .q
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::bad_request("Missing required query parameter: q"))?;

    let mode = SortMode::parse(params.sort_by.as_deref().unwrap_or_default());
    let organized = state.sorter.organize(&query, mode).await?;

    Ok(Json(render(&query, &organized)))
}

/// GET /api/sort-modes
///
/// List the accepted `sort_by` keys with their display labels.
pub async fn sort_modes() -> Json<Value> {
    let modes: Vec<Value> = SortMode::ALL
        .iter()
        .map(|m| json!({ "key": m.key(), "label": m.label() }))
        .collect();
    Json(json!({ "data": modes, "default": SortMode::default().key() }))
}

fn render(query: &str, organized: &Organized) -> Value {
    let categories: Vec<Value> = organized
        .categories
        .iter()
        .map(|category| {
            let cards: Vec<CardView> = category.cards.iter().map(CardView::from).collect();
            json!({ "label": category.label, "cards": cards })
        })
        .collect();

    json!({
        "query": query,
        "sort_by": organized.sort_mode.key(),
        "sort_label": organized.sort_label(),
        "has_categories": organized.has_categories(),
        "card_count": organized.card_count(),
        "category_count": organized.category_count(),
        "categories": categories,
    })
}
