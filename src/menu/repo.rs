use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::repo_types::MenuItem;

const SELECT_ITEMS: &str = "SELECT name, price, description, image, category FROM menu";

pub async fn create_menu_table(db: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS menu (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            description TEXT NOT NULL,
            image TEXT NOT NULL,
            category TEXT NOT NULL
        )
        "#,
    )
    .execute(db)
    .await?;
    Ok(())
}

/// Replaces the whole table with `items` in one transaction, so readers see
/// either the old snapshot or the new one. An empty list leaves the table alone.
pub async fn replace_all(db: &SqlitePool, items: &[MenuItem]) -> sqlx::Result<()> {
    if items.is_empty() {
        tracing::warn!("no menu items to save");
        return Ok(());
    }

    let mut tx = db.begin().await?;
    sqlx::query("DELETE FROM menu").execute(&mut *tx).await?;
    for item in items {
        sqlx::query(
            r#"
            INSERT INTO menu (name, price, description, image, category)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&item.name)
        .bind(item.price)
        .bind(&item.description)
        .bind(&item.image)
        .bind(&item.category)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    tracing::info!(count = items.len(), "menu snapshot replaced");
    Ok(())
}

pub async fn get_all_menu_items(db: &SqlitePool) -> sqlx::Result<Vec<MenuItem>> {
    sqlx::query_as::<_, MenuItem>(
        "SELECT name, price, description, image, category FROM menu ORDER BY id",
    )
    .fetch_all(db)
    .await
}

pub async fn get_menu_items_by_categories(
    db: &SqlitePool,
    categories: &[String],
) -> sqlx::Result<Vec<MenuItem>> {
    get_menu_items_by_search_and_categories(db, "", categories).await
}

/// `name LIKE %text%` AND `category IN (...)`, each clause only when its input
/// is non-empty. SQLite's LIKE is case-insensitive for ASCII.
pub async fn get_menu_items_by_search_and_categories(
    db: &SqlitePool,
    search_text: &str,
    categories: &[String],
) -> sqlx::Result<Vec<MenuItem>> {
    let search_text = search_text.trim();
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_ITEMS);

    let mut conjunction = " WHERE ";
    if !search_text.is_empty() {
        qb.push(conjunction);
        qb.push("name LIKE ");
        qb.push_bind(format!("%{}%", escape_like(search_text)));
        qb.push(r" ESCAPE '\'");
        conjunction = " AND ";
    }
    if !categories.is_empty() {
        qb.push(conjunction);
        qb.push("category IN (");
        {
            let mut separated = qb.separated(", ");
            for category in categories {
                separated.push_bind(category.clone());
            }
        }
        qb.push(")");
    }
    qb.push(" ORDER BY id");

    qb.build_query_as::<MenuItem>().fetch_all(db).await
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub async fn get_categories(db: &SqlitePool) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar::<_, String>("SELECT DISTINCT category FROM menu ORDER BY category")
        .fetch_all(db)
        .await
}

pub async fn has_menu_data(db: &SqlitePool) -> sqlx::Result<bool> {
    let row = sqlx::query_scalar::<_, String>("SELECT name FROM menu LIMIT 1")
        .fetch_optional(db)
        .await?;
    Ok(row.is_some())
}
