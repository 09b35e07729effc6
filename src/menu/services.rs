use std::collections::BTreeSet;

use sqlx::SqlitePool;
use tracing::{error, info, instrument, warn};

use super::dto::MenuSnapshot;
use super::repo;
use super::repo_types::MenuItem;
use crate::error::MenuError;
use crate::state::AppState;

/// Serves the local snapshot when there is one, otherwise fetches the menu
/// once and stores it.
#[instrument(skip(state))]
pub async fn ensure_menu_loaded(state: &AppState) -> Result<MenuSnapshot, MenuError> {
    repo::create_menu_table(&state.db).await?;

    let cached = repo::get_all_menu_items(&state.db).await?;
    if !cached.is_empty() {
        let categories = repo::get_categories(&state.db).await?;
        info!(count = cached.len(), "menu served from local snapshot");
        return Ok(MenuSnapshot {
            items: cached,
            categories,
            fetched: false,
        });
    }

    refresh_menu(state).await
}

#[instrument(skip(state))]
pub async fn refresh_menu(state: &AppState) -> Result<MenuSnapshot, MenuError> {
    repo::create_menu_table(&state.db).await?;

    let items = state.menu_source.fetch_menu().await.map_err(|e| {
        error!(error = %e, "menu fetch failed");
        e
    })?;
    repo::replace_all(&state.db, &items).await?;

    let categories = distinct_categories(&items);
    info!(count = items.len(), "menu fetched from remote");
    Ok(MenuSnapshot {
        items,
        categories,
        fetched: true,
    })
}

/// Filtered read for the home screen. Query failures are logged and read as
/// "no rows".
#[instrument(skip(db))]
pub async fn filter_menu(
    db: &SqlitePool,
    search_text: &str,
    categories: &[String],
) -> Vec<MenuItem> {
    repo::get_menu_items_by_search_and_categories(db, search_text, categories)
        .await
        .unwrap_or_else(|e| {
            error!(error = %e, "error filtering menu items");
            Vec::new()
        })
}

pub async fn all_menu_items(db: &SqlitePool) -> Vec<MenuItem> {
    repo::get_all_menu_items(db).await.unwrap_or_else(|e| {
        error!(error = %e, "error getting all menu items");
        Vec::new()
    })
}

pub async fn categories(db: &SqlitePool) -> Vec<String> {
    repo::get_categories(db).await.unwrap_or_else(|e| {
        error!(error = %e, "error getting categories");
        Vec::new()
    })
}

pub async fn has_menu_data(db: &SqlitePool) -> bool {
    repo::has_menu_data(db).await.unwrap_or_else(|e| {
        warn!(error = %e, "menu table may not exist yet");
        false
    })
}

fn distinct_categories(items: &[MenuItem]) -> Vec<String> {
    items
        .iter()
        .map(|i| i.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[tokio::test]
    async fn greek_salad_scenario() {
        let source = FakeMenuSource::serving(vec![dish(
            "Greek salad",
            12.99,
            "greekSalad.jpg",
            "salads",
        )]);
        let state = AppState::in_memory(source.clone()).await.unwrap();

        let snapshot = ensure_menu_loaded(&state).await.expect("load ok");
        assert!(snapshot.fetched);

        let rows = all_menu_items(&state.db).await;
        assert_eq!(
            rows,
            vec![MenuItem {
                name: "Greek salad".into(),
                price: 12.99,
                description: "...".into(),
                image: "greekSalad.jpg".into(),
                category: "salads".into(),
            }]
        );
        assert_eq!(categories(&state.db).await, vec!["salads"]);
    }

    #[tokio::test]
    async fn second_load_is_served_from_cache() {
        let source = FakeMenuSource::serving(little_lemon_menu());
        let state = AppState::in_memory(source.clone()).await.unwrap();

        let first = ensure_menu_loaded(&state).await.unwrap();
        let second = ensure_menu_loaded(&state).await.unwrap();

        assert_eq!(source.calls(), 1);
        assert!(first.fetched);
        assert!(!second.fetched);
        assert_eq!(first.items, second.items);
        assert_eq!(second.categories, vec!["desserts", "mains", "starters"]);
        assert_eq!(first.categories, second.categories);
    }

    #[tokio::test]
    async fn fetch_failure_is_reported_and_nothing_is_stored() {
        let source = FakeMenuSource::failing(500);
        let state = AppState::in_memory(source.clone()).await.unwrap();

        let err = ensure_menu_loaded(&state).await.unwrap_err();
        assert!(matches!(err, MenuError::HttpStatus(500)));
        assert!(!has_menu_data(&state.db).await);

        // No automatic retry; the next attempt is a fresh fetch.
        let _ = ensure_menu_loaded(&state).await;
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn refresh_replaces_snapshot() {
        let source = FakeMenuSource::serving(little_lemon_menu());
        let state = AppState::in_memory(source.clone()).await.unwrap();
        ensure_menu_loaded(&state).await.unwrap();

        source.set_items(vec![dish("Soup", 5.0, "soup.jpg", "starters")]);
        let snapshot = refresh_menu(&state).await.unwrap();

        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(all_menu_items(&state.db).await, snapshot.items);
    }

    #[tokio::test]
    async fn empty_filters_return_everything() {
        let state = AppState::in_memory(FakeMenuSource::serving(little_lemon_menu()))
            .await
            .unwrap();
        ensure_menu_loaded(&state).await.unwrap();

        assert_eq!(filter_menu(&state.db, "", &[]).await, all_menu_items(&state.db).await);
        assert_eq!(filter_menu(&state.db, "   ", &[]).await.len(), 5);
    }

    #[tokio::test]
    async fn filter_matches_text_and_category_together() {
        let state = AppState::in_memory(FakeMenuSource::serving(little_lemon_menu()))
            .await
            .unwrap();
        ensure_menu_loaded(&state).await.unwrap();
        let cats = vec!["starters".to_string()];

        for search in ["s", "SALAD", "bru", "zzz"] {
            let rows = filter_menu(&state.db, search, &cats).await;
            let all = all_menu_items(&state.db).await;
            let expected: Vec<_> = all
                .into_iter()
                .filter(|r| {
                    r.name.to_lowercase().contains(&search.to_lowercase())
                        && cats.contains(&r.category)
                })
                .collect();
            assert_eq!(rows, expected, "search {search:?}");
        }
    }

    #[tokio::test]
    async fn query_failure_reads_as_empty() {
        let state = AppState::in_memory(FakeMenuSource::serving(little_lemon_menu()))
            .await
            .unwrap();
        // Table never created.
        assert!(filter_menu(&state.db, "salad", &["starters".into()]).await.is_empty());
        assert!(all_menu_items(&state.db).await.is_empty());
        assert!(categories(&state.db).await.is_empty());
        assert!(!has_menu_data(&state.db).await);
    }
}
