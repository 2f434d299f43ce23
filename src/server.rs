use crate::errors::DirviewErrorType;
use crate::listing;
use crate::render::{render_page, OverlayState};
use crate::routes;
use crate::tree::TreeNode;

use tokio::signal;

const DEFAULT_PORT: u16 = 8080;

pub struct Server {
    page: String,
    port: u16,
}

impl Server {
    pub async fn start(&self) {
        let (addr, serving) = warp::serve(routes::routes(self.page.clone()))
            .bind_with_graceful_shutdown(([127, 0, 0, 1], self.port), async {
                signal::ctrl_c().await.unwrap()
            });
        tracing::info!("Serving directory tree on http://{}", addr);
        serving.await;
    }
}

/// Runs the startup orchestration once: fetch the listing, populate the
/// root, pick the overlay state, render. The renderer always runs, so a
/// failed fetch still produces a page around an empty tree.
pub async fn build_page(backend_url: &str) -> String {
    let client = reqwest::Client::new();
    let mut root = TreeNode::root();
    let overlay = match listing::fetch_entries(&client, backend_url).await {
        Ok(entries) => {
            tracing::info!("Fetched {} listing entries from {}", entries.len(), backend_url);
            listing::populate(&mut root, entries);
            OverlayState::Hidden
        }
        // A non-success status leaves the overlay in its loading state;
        // only transport and parse failures flip it to the error state.
        Err(e) if e.error_type == DirviewErrorType::BadStatus => {
            tracing::warn!("{}", e);
            OverlayState::Loading
        }
        Err(e) => {
            tracing::error!("Failed to load path listing: {}", e);
            OverlayState::Error
        }
    };
    render_page(&root, overlay)
}

pub async fn get_server(port: Option<u16>, backend_url: &str) -> Server {
    Server {
        page: build_page(backend_url).await,
        port: port.unwrap_or(DEFAULT_PORT),
    }
}
