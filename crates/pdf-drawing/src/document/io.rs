//! Loading page descriptions and persisting finished documents

use super::generate_pdf_bytes;
use crate::options::RenderOptions;
use crate::types::*;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Load a JSON page list
#[cfg(feature = "serde")]
pub async fn load_pages(path: impl AsRef<Path>) -> Result<Vec<Page>> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    let pages = tokio::task::spawn_blocking(move || parse_pages(&bytes)).await??;
    Ok(pages)
}

/// Parse a JSON page list
#[cfg(feature = "serde")]
pub fn parse_pages(bytes: &[u8]) -> Result<Vec<Page>> {
    serde_json::from_slice(bytes).map_err(|e| RenderError::MalformedInput(e.to_string()))
}

/// Render `pages` and write the PDF to `output_path`
pub async fn generate_pdf(
    pages: &[Page],
    options: &RenderOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let pages = pages.to_vec();
    let options = options.clone();

    let bytes = tokio::task::spawn_blocking(move || generate_pdf_bytes(&pages, &options)).await??;

    write_atomic(output_path.as_ref(), bytes).await
}

/// Save an already assembled document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, RenderError>(writer)
    })
    .await??;
    write_atomic(path.as_ref(), bytes).await
}

/// Write to a sibling staging file, then rename it over `path`
async fn write_atomic(path: &Path, bytes: Vec<u8>) -> Result<()> {
    let staging = staging_path(path);
    let persistence = |source| RenderError::Persistence {
        path: path.to_owned(),
        source,
    };

    if let Err(e) = tokio::fs::write(&staging, bytes).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(persistence(e));
    }
    if let Err(e) = tokio::fs::rename(&staging, path).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(persistence(e));
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
