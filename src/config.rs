use std::path::PathBuf;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub products_path: PathBuf,
    pub brands_path: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            products_path: std::env::var("PRODUCTS_PATH")
                .unwrap_or_else(|_| "./initial-data/products.json".to_string())
                .into(),
            brands_path: std::env::var("BRANDS_PATH")
                .unwrap_or_else(|_| "./initial-data/brands.json".to_string())
                .into(),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
