use std::path::Path;

use tracing::info;

use crate::models::portfolio::Portfolio;
use crate::store::{builtin, StoreError};

/// Loads the site content. With no path the built-in content is used.
pub fn load_portfolio(path: Option<&Path>) -> Result<Portfolio, StoreError> {
    let portfolio = match path {
        Some(path) => {
            info!("Loading portfolio content from {}", path.display());
            read_content_file(path)?
        }
        None => {
            info!("Using built-in portfolio content");
            builtin::portfolio()
        }
    };

    portfolio.validate()?;
    info!(
        "Portfolio content ready: {} projects, {} experience entries",
        portfolio.projects.len(),
        portfolio.experience.len()
    );
    Ok(portfolio)
}

fn read_content_file(path: &Path) -> Result<Portfolio, StoreError> {
    let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
