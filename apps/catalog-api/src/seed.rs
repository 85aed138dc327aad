//! Startup snapshot of the catalog, read from two JSON array files

use domain_catalog::{Catalog, Category, Product, Record, ID_LENGTH};
use eyre::WrapErr;
use std::path::Path;
use tracing::{info, warn};

use crate::config::SeedConfig;

/// Build the catalog from the configured seed files.
///
/// A missing or malformed file is fatal; the report names the file.
pub async fn load_catalog(seed: &SeedConfig) -> eyre::Result<Catalog> {
    let products: Vec<Product> = read_records(&seed.products_path).await?;
    let categories: Vec<Category> = read_records(&seed.categories_path).await?;

    info!(
        products = products.len(),
        categories = categories.len(),
        "catalog seeded"
    );
    Ok(Catalog::new(products, categories))
}

async fn read_records<T: Record>(path: &Path) -> eyre::Result<Vec<T>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .wrap_err_with(|| format!("failed to read {} seed file {}", T::KIND, path.display()))?;

    parse_records(&raw)
        .wrap_err_with(|| format!("failed to parse {} seed file {}", T::KIND, path.display()))
}

/// Parse a JSON array of records, keeping file order.
fn parse_records<T: Record>(raw: &str) -> eyre::Result<Vec<T>> {
    let records: Vec<T> = serde_json::from_str(raw)?;

    for record in records.iter().filter(|r| r.id().chars().count() != ID_LENGTH) {
        // Still loaded; such a record is only reachable through the list route
        warn!(kind = %T::KIND, id = record.id(), "seed record id is not {ID_LENGTH} characters");
    }

    Ok(records)
}
