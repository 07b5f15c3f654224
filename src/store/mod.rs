//! main file for the storefront application

pub(crate) mod api;
pub(crate) mod controller;
pub(crate) mod model;
pub(crate) mod shell;
pub(crate) mod state;
pub(crate) mod util;

use crate::store::api::client::ApiClient;
use crate::store::controller::catalog;
use crate::store::model::config::StoreConfig;
use crate::store::model::lesson::{SortKey, SortOrder};
use crate::store::state::StoreState;
use log::warn;

/// Run the interactive storefront session.
pub(crate) async fn browse(config: StoreConfig) -> Result<(), anyhow::Error> {
    let api = ApiClient::new(config);
    let mut state = StoreState::new();

    // the shell stays usable on a failed first fetch, `reload` retries
    match api.fetch_lessons().await {
        Ok(lessons) => state.set_lessons(lessons),
        Err(e) => warn!("initial lesson fetch failed, {}", e),
    }

    shell::run(&mut state, &api).await
}

/// Print the catalog once and exit, for scripting.
pub(crate) async fn list_lessons(
    config: StoreConfig,
    search: Option<String>,
    sort: Option<SortKey>,
    desc: bool,
) -> Result<(), anyhow::Error> {
    let api = ApiClient::new(config);
    let mut state = StoreState::new();
    state.set_lessons(api.fetch_lessons().await?);

    if let Some(term) = search {
        state.search_term = term;
    }
    if let Some(key) = sort {
        catalog::set_sort(&mut state, key);
        if desc {
            state.sort_order = SortOrder::Desc;
        }
    }

    for line in shell::render_catalog(&state) {
        println!("{}", line);
    }
    Ok(())
}
