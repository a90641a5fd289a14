use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::intent::{RatingBands, parse_page};
use crate::results::{ActorResponse, BrowseResponse, SearchResponse, WatchResponse};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::Value;
use std::collections::HashMap;

type Params = Query<HashMap<String, String>>;
type Reply<T> = Result<Json<T>, GatewayError>;

fn param<'a>(params: &'a HashMap<String, String>, key: &str, default: &'a str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or(default)
}

fn page(params: &HashMap<String, String>) -> u32 {
    parse_page(params.get("page").map(String::as_str))
}

/// Logs failures before they become an error response
fn reply<T>(route: &str, result: Result<T, GatewayError>) -> Reply<T> {
    result.map(Json).map_err(|e| {
        ::log::error!("{} failed: {}", route, e);
        e
    })
}

pub async fn index() -> Json<Value> {
    Json(serde_json::json!({
        "message": "thirai api",
        "endpoints": {
            "search": "/search/:language?q=movie_title",
            "browse": "/language/:language?category=recent|popular&page=1",
            "actors": "/actors/:language/:actorcode?page=1",
            "genre": "/genre/:language?action=0-4&comedy=0-4&romance=0-4&storyline=0-4&performance=0-4&ratecount=1&page=1",
            "decade": "/decade/:language/:decade?page=1",
            "year": "/year/:language/:year?page=1",
            "watch": "/watch?url=einthusan_page_url",
        },
        "example_usage": "Try /year/tamil/2025 or /genre/hindi?action=4&ratecount=5",
    }))
}

pub async fn search(
    State(gateway): State<Gateway>,
    Path(language): Path<String>,
    Query(params): Params,
) -> Reply<SearchResponse> {
    let q = param(&params, "q", "");
    ::log::info!("search language={} q='{}'", language, q);
    reply("search", gateway.search(&language, q).await)
}

pub async fn browse(
    State(gateway): State<Gateway>,
    Path(language): Path<String>,
    Query(params): Params,
) -> Reply<BrowseResponse> {
    let category = param(&params, "category", "recent").to_lowercase();
    let page = page(&params);
    ::log::info!("browse language={} category={} page={}", language, category, page);
    reply("browse", gateway.browse(&language, &category, page).await)
}

pub async fn actor(
    State(gateway): State<Gateway>,
    Path((language, actor_code)): Path<(String, String)>,
    Query(params): Params,
) -> Reply<ActorResponse> {
    let page = page(&params);
    ::log::info!("actor language={} actor={} page={}", language, actor_code, page);
    reply("actor", gateway.actor(&language, &actor_code, page).await)
}

pub async fn genre(
    State(gateway): State<Gateway>,
    Path(language): Path<String>,
    Query(params): Params,
) -> Reply<BrowseResponse> {
    let defaults = RatingBands::default();
    let bands = RatingBands {
        action: param(&params, "action", &defaults.action).to_string(),
        comedy: param(&params, "comedy", &defaults.comedy).to_string(),
        romance: param(&params, "romance", &defaults.romance).to_string(),
        storyline: param(&params, "storyline", &defaults.storyline).to_string(),
        performance: param(&params, "performance", &defaults.performance).to_string(),
        ratecount: param(&params, "ratecount", &defaults.ratecount).to_string(),
    };
    let page = page(&params);
    ::log::info!("genre language={} bands={:?} page={}", language, bands, page);
    reply("genre", gateway.genre(&language, bands, page).await)
}

pub async fn decade(
    State(gateway): State<Gateway>,
    Path((language, decade)): Path<(String, String)>,
    Query(params): Params,
) -> Reply<BrowseResponse> {
    let page = page(&params);
    ::log::info!("decade language={} decade={} page={}", language, decade, page);
    reply("decade", gateway.decade(&language, &decade, page).await)
}

pub async fn year(
    State(gateway): State<Gateway>,
    Path((language, year)): Path<(String, String)>,
    Query(params): Params,
) -> Reply<BrowseResponse> {
    let page = page(&params);
    ::log::info!("year language={} year={} page={}", language, year, page);
    reply("year", gateway.year(&language, &year, page).await)
}

pub async fn watch(State(gateway): State<Gateway>, Query(params): Params) -> Reply<WatchResponse> {
    let url = param(&params, "url", "");
    ::log::info!("watch url={}", url);
    reply("watch", gateway.watch(url).await)
}
