use crate::handlers;
use warp::Filter;

pub(crate) fn routes(
    page: String,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    tree_page(page).or(version())
}

fn tree_page(
    page: String,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path::end()
        .and(warp::get())
        .map(move || handlers::tree_page(page.clone()))
}

fn version() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path!("version")
        .and(warp::get())
        .map(handlers::get_version)
}
