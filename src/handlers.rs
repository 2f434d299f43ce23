use std::convert::Infallible;
use tracing::instrument;
use warp::http::StatusCode;

#[instrument(name = "handlers.tree_page", level = "info", skip(page))]
pub(crate) fn tree_page(page: String) -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::html(page))
}

#[instrument(name = "handlers.get_version", level = "info")]
pub(crate) fn get_version() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::with_status(
        warp::reply::json(&env!("CARGO_PKG_VERSION").to_string()),
        StatusCode::OK,
    ))
}
