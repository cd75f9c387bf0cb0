use color_eyre::Result;
use sqlx::PgPool;

/// Embeds `migrations/<name>.sql` files, in apply order.
macro_rules! embed_migrations {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("../../migrations/", $name, ".sql")))),*]
    };
}

/// `(file stem, sql)` pairs. The stem is `<version>__<description>`.
const MIGRATIONS: &[(&str, &str)] = embed_migrations!["V1__init", "V2__seed_categories"];

/// `V1__init` -> `V1`.
fn version(stem: &str) -> &str {
    stem.split_once("__").map_or(stem, |(version, _)| version)
}

pub async fn run(pool: &PgPool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version TEXT PRIMARY KEY,
            applied_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(pool)
    .await?;

    for &(stem, sql) in MIGRATIONS {
        let version = version(stem);
        if applied(pool, version).await? {
            continue;
        }

        // A failed file leaves no partial schema and no version row
        let mut tx = pool.begin().await?;
        sqlx::raw_sql(sql).execute(&mut *tx).await?;
        sqlx::query("INSERT INTO schema_migrations (version) VALUES ($1)")
            .bind(version)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(version, migration = stem, "applied database migration");
    }

    Ok(())
}

pub async fn applied(pool: &PgPool, version: &str) -> Result<bool> {
    let applied: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM schema_migrations WHERE version = $1)")
            .bind(version)
            .fetch_one(pool)
            .await?;

    Ok(applied)
}
