//! Orbitcast schema initializer
//!
//! One-time setup, run out-of-band from the API server: creates the target
//! database, then the three tables in dependency order. Table creation is
//! not idempotent; re-running against an initialized database fails.

use anyhow::{Context, Result};
use orbitcast_core::DatabaseConfig;
use sqlx::{Connection, PgConnection};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

const CREATE_SATELLITES: &str = r#"
CREATE TABLE satellites (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255),
    lifetime INT,
    orbit_radius FLOAT
)
"#;

const CREATE_TV_CHANNELS: &str = r#"
CREATE TABLE tv_channels (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255),
    language VARCHAR(100),
    specifics VARCHAR(255),
    company VARCHAR(255)
)
"#;

const CREATE_BROADCASTS: &str = r#"
CREATE TABLE broadcasts (
    id SERIAL PRIMARY KEY,
    coverage_from FLOAT,
    coverage_to FLOAT,
    satellite_id INT,
    tv_channel_id INT,
    FOREIGN KEY (satellite_id) REFERENCES satellites(id),
    FOREIGN KEY (tv_channel_id) REFERENCES tv_channels(id)
)
"#;

// broadcasts last: its foreign keys reference the other two tables.
const TABLES: [(&str, &str); 3] = [
    ("satellites", CREATE_SATELLITES),
    ("tv_channels", CREATE_TV_CHANNELS),
    ("broadcasts", CREATE_BROADCASTS),
];

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run().await {
        error!("Schema initialization failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = DatabaseConfig::from_env().context("Failed to load configuration")?;

    create_database(&config).await;
    create_tables(&config).await?;

    info!("Schema initialization complete");
    Ok(())
}

/// Creates the target database, owned by the configured user. Failure is
/// logged and skipped: the database usually already exists on a re-run, and
/// a single statement needs no rollback.
async fn create_database(config: &DatabaseConfig) {
    let statement = format!(
        r#"CREATE DATABASE "{}" OWNER "{}""#,
        config.name, config.user
    );

    let result = async {
        let mut conn = PgConnection::connect(&config.admin_url()).await?;
        sqlx::query(&statement).execute(&mut conn).await?;
        conn.close().await?;
        Ok::<_, sqlx::Error>(())
    }
    .await;

    match result {
        Ok(()) => info!(
            "Database '{}' with owner '{}' created",
            config.name, config.user
        ),
        Err(e) => warn!("Skipping database creation: {}", e),
    }
}

async fn create_tables(config: &DatabaseConfig) -> Result<()> {
    let mut conn = PgConnection::connect(&config.url())
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database '{}' at {}:{}",
                config.name, config.host, config.port
            )
        })?;

    for (table, ddl) in TABLES {
        sqlx::query(ddl)
            .execute(&mut conn)
            .await
            .with_context(|| format!("Failed to create table '{}'", table))?;
        info!("Table '{}' created", table);
    }

    conn.close().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referenced_tables_are_created_before_broadcasts() {
        let position = |name: &str| TABLES.iter().position(|(t, _)| *t == name).unwrap();
        assert!(position("satellites") < position("broadcasts"));
        assert!(position("tv_channels") < position("broadcasts"));
    }

    #[test]
    fn broadcasts_ddl_declares_both_foreign_keys() {
        assert!(CREATE_BROADCASTS.contains("REFERENCES satellites(id)"));
        assert!(CREATE_BROADCASTS.contains("REFERENCES tv_channels(id)"));
    }
}
