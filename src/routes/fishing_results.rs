use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use crate::error::ApiError;
use crate::models::FishingResult;
use crate::species;
use crate::store::FishingResultStore;

// Raw query pairs in request order. Repeated names are allowed.
pub type QueryPairs = Vec<(String, String)>;

// First value given for `name`
fn first_param(pairs: &QueryPairs, name: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.clone())
}

// Query parameters for checkout and return
pub struct CatchQuery {
    id: Option<String>,
    key: Option<String>,
}

impl CatchQuery {
    fn from_pairs(pairs: &QueryPairs) -> Self {
        CatchQuery {
            id: first_param(pairs, "id"),
            key: first_param(pairs, "key"),
        }
    }
}

// GET /fishing-results - List all results
pub async fn get_fishing_results(
    State(store): State<FishingResultStore>,
) -> Json<Vec<FishingResult>> {
    Json(store.list().await)
}

// GET /fishing-result?id=1 - Get result by ID
pub async fn get_fishing_result_by_id(
    State(store): State<FishingResultStore>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<FishingResult>, ApiError> {
    let id = first_param(&pairs, "id").unwrap_or_default();
    let result = store
        .find_by_id(&id)
        .await
        .map_err(|_| ApiError::LookupMiss)?;

    Ok(Json(result))
}

// POST /fishing-results - Append a result, echoing it back
pub async fn create_fishing_result(
    State(store): State<FishingResultStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<FishingResult>), ApiError> {
    let new_result: FishingResult = serde_json::from_slice(&body)
        .map_err(|e| ApiError::MalformedBody(e.to_string()))?;

    store.append(new_result.clone()).await;
    tracing::info!(id = %new_result.id, angler = %new_result.angler, "fishing result created");

    Ok((StatusCode::CREATED, Json(new_result)))
}

// PATCH /fishing-results/checkout?id=1&key=1 - Take one unit of a catch
pub async fn checkout_fishing_result(
    State(store): State<FishingResultStore>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<FishingResult>, ApiError> {
    let (id, fish_name) = resolve_catch(&store, CatchQuery::from_pairs(&pairs)).await?;
    let updated = store.checkout(&id, fish_name).await?;
    tracing::debug!(%id, fish_name, "catch checked out");

    Ok(Json(updated))
}

// PATCH /fishing-results/return?id=1&key=1 - Put one unit of a catch back
pub async fn return_fishing_result(
    State(store): State<FishingResultStore>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<FishingResult>, ApiError> {
    let (id, fish_name) = resolve_catch(&store, CatchQuery::from_pairs(&pairs)).await?;
    let updated = store.give_back(&id, fish_name).await?;
    tracing::debug!(%id, fish_name, "catch returned");

    Ok(Json(updated))
}

/// Validate `id` and `key` in order, yielding the record id and species name.
///
/// The record must exist before `key` is even looked at, so a missing record
/// wins over a missing or malformed key.
pub async fn resolve_catch(
    store: &FishingResultStore,
    params: CatchQuery,
) -> Result<(String, &'static str), ApiError> {
    let id = params.id.ok_or(ApiError::MissingParameter("id"))?;
    store.find_by_id(&id).await?;

    let key = params.key.ok_or(ApiError::MissingParameter("key"))?;
    let code: i64 = key
        .parse()
        .map_err(|_| ApiError::InvalidParameter("key"))?;
    let fish_name = species::lookup(code).ok_or(ApiError::UnknownSpecies(code))?;

    Ok((id, fish_name))
}
