//! Question image lookup.
//!
//! Image URLs in the question bank are relative to the configured base path.
//! A resolved URL `base + rest` is served from `assets_dir/rest`.

use std::path::PathBuf;

use log::debug;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot load image {url} from {}: {source}", path.display())]
    Image {
        url: String,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A successfully probed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Prefixes `url` with `base_path` unless it already starts with it.
/// Returns `None` for an empty URL.
pub fn resolve_image_url(base_path: &str, url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }

    if url.starts_with(base_path) {
        Some(url.to_string())
    } else {
        Some(format!("{}{}", base_path, url))
    }
}

/// Maps a resolved URL to the file backing it.
pub fn local_path(config: &Config, resolved: &str) -> PathBuf {
    let rest = resolved
        .strip_prefix(config.base_path.as_str())
        .unwrap_or(resolved);
    config.assets_dir.join(rest.trim_start_matches('/'))
}

/// Resolves `url` and reads the image dimensions from disk.
pub fn load_image(config: &Config, url: &str) -> Option<Result<ImageInfo, AssetError>> {
    let resolved = resolve_image_url(&config.base_path, url)?;
    let path = local_path(config, &resolved);

    let result = match image::image_dimensions(&path) {
        Ok((width, height)) => {
            debug!("[Assets] Loaded {} ({}x{})", resolved, width, height);
            Ok(ImageInfo {
                url: resolved,
                width,
                height,
            })
        }
        Err(source) => {
            debug!("[Assets] Cannot load {} from {:?}: {}", resolved, path, source);
            Err(AssetError::Image {
                url: resolved,
                path,
                source,
            })
        }
    };
    Some(result)
}
