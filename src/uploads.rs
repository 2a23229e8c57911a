use std::path::{Path, PathBuf};

const ACTOR_IMAGE_DIR: &str = "images/actors";
const IMAGE_EXT: &str = "jpg";

/// Only ids made of ASCII alphanumerics are ever turned into file names.
fn is_safe_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}

pub fn actor_image_path(static_dir: &Path, actor_id: &str) -> Option<PathBuf> {
    is_safe_id(actor_id)
        .then(|| static_dir.join(ACTOR_IMAGE_DIR).join(format!("{actor_id}.{IMAGE_EXT}")))
}

pub fn actor_image_url(actor_id: &str) -> String {
    format!("/static/{ACTOR_IMAGE_DIR}/{actor_id}.{IMAGE_EXT}")
}

pub async fn actor_image_exists(static_dir: &Path, actor_id: &str) -> bool {
    match actor_image_path(static_dir, actor_id) {
        Some(path) => tokio::fs::try_exists(path).await.unwrap_or(false),
        None => false,
    }
}

/// Writes the image to a staging file and renames it into place, so readers
/// never see a partial image.
pub async fn store_actor_image(
    static_dir: &Path,
    actor_id: &str,
    bytes: &[u8],
) -> std::io::Result<PathBuf> {
    let dest = actor_image_path(static_dir, actor_id).ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("unsafe actor id {actor_id:?}"))
    })?;
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let staging = dest.with_extension(format!("{IMAGE_EXT}.tmp"));
    tokio::fs::write(&staging, bytes).await?;
    if let Err(err) = tokio::fs::rename(&staging, &dest).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(err);
    }

    Ok(dest)
}
