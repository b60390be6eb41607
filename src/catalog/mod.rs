use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::CatalogError;
use crate::models::{Brand, Product};

// ── Catalog: products + brands ───────────────────────────────────────────────

/// In-memory catalog of products and brands.
///
/// - `products` / `brands` → `Vec`, kept in source-file order
/// - `id_index`            → `indexmap::IndexMap` from id text to the position
///                           of the FIRST product carrying that id
///
/// A `Catalog` is filled once through `add_products` / `add_brands` (usually
/// by [`load`]) and then shared read-only behind an `Arc`.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    brands: Vec<Brand>,
    id_index: IndexMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch of products. No dedup: adding the same batch twice
    /// doubles every entry, while id lookups keep resolving to the first copy.
    pub fn add_products(&mut self, items: impl IntoIterator<Item = Product>) {
        for product in items {
            let position = self.products.len();
            if let Some(id) = product.id() {
                self.id_index.entry(id.into_owned()).or_insert(position);
            }
            self.products.push(product);
        }
    }

    pub fn add_brands(&mut self, items: impl IntoIterator<Item = Brand>) {
        self.brands.extend(items);
    }

    pub fn all_products(&self) -> &[Product] {
        &self.products
    }

    pub fn all_brands(&self) -> &[Brand] {
        &self.brands
    }

    /// Products whose brand equals `brand_key` exactly, in source order.
    pub fn filter_by_brand(&self, brand_key: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_brand(brand_key)).collect()
    }

    /// First product whose id equals `id`.
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.id_index.get(id).map(|&position| &self.products[position])
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn brand_count(&self) -> usize {
        self.brands.len()
    }

    /// Ids carried by more than one product, in order of first appearance.
    pub fn duplicate_product_ids(&self) -> Vec<&str> {
        let mut counts: IndexMap<&str, usize> = IndexMap::with_capacity(self.id_index.len());
        for id in self.products.iter().filter_map(|p| p.id()) {
            // Borrowed back from the index so the key outlives this loop.
            if let Some((key, _)) = self.id_index.get_key_value(id.as_ref()) {
                *counts.entry(key.as_str()).or_default() += 1;
            }
        }
        counts
            .into_iter()
            .filter(|&(_, n)| n > 1)
            .map(|(id, _)| id)
            .collect()
    }
}

// ── Loading ──────────────────────────────────────────────────────────────────

/// Read both data files concurrently and build a fully populated catalog.
///
/// Either file failing to read or parse fails the whole load; a partial
/// catalog is never returned.
pub async fn load(products_path: &Path, brands_path: &Path) -> Result<Catalog, CatalogError> {
    let (products, brands) = tokio::try_join!(
        read_records::<Product>(products_path),
        read_records::<Brand>(brands_path),
    )?;

    let mut catalog = Catalog::new();
    catalog.add_products(products);
    catalog.add_brands(brands);

    info!(
        products = catalog.product_count(),
        brands = catalog.brand_count(),
        "Catalog loaded"
    );
    Ok(catalog)
}

async fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Read {
            path: PathBuf::from(path),
            source,
        })?;

    let records: Vec<T> = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: PathBuf::from(path),
        source,
    })?;

    debug!(path = %path.display(), count = records.len(), "Read records");
    Ok(records)
}
