//! Chat turns and legacy image analysis.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, bail, Context};
use recycle_core::chat::SendRejected;
use recycle_core::client::RecycleClient;
use recycle_core::config::ClientConfig;
use recycle_core::controller::Controller;
use recycle_core::image::{media_type_for_extension, ImageDataUrl};
use recycle_core::location::{strip_whitespace, ResolvedLocation};

use crate::terminal::{reply_text, TerminalView};

/// Read an image file into a data URL, enforcing `max_bytes`.
pub fn read_image(path: &Path, max_bytes: usize) -> anyhow::Result<ImageDataUrl> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let media_type = media_type_for_extension(ext)
        .with_context(|| format!("Unsupported image type: {}", path.display()))?;
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(ImageDataUrl::from_bytes(media_type, &bytes, max_bytes)?)
}

/// One unified-chat turn, printed as the page's chat log would show it.
pub async fn run_chat<W: Write>(
    config: ClientConfig,
    message: &str,
    image: Option<&str>,
    location: &str,
    out: W,
) -> anyhow::Result<()> {
    let max_bytes = config.max_image_bytes;
    let client = RecycleClient::new(config.clone()).context("Failed to build backend client")?;
    let mut controller = Controller::new(client, TerminalView::new(out), config);

    if !location.is_empty() {
        controller.set_location(ResolvedLocation {
            city: String::new(),
            district_key: strip_whitespace(location),
            district_label: location.to_string(),
        });
    }
    if let Some(path) = image {
        let image = read_image(Path::new(path), max_bytes)?;
        controller.attach_image(image.into_string())?;
    }

    controller.send(message).await.map_err(|rejected| match rejected {
        SendRejected::Empty => anyhow!("Nothing to send: give --message or --image"),
        SendRejected::InFlight => anyhow!("A chat turn is already in flight"),
    })?;

    match controller.state().chat.log().last() {
        Some(reply) if reply.is_error => bail!("Chat turn failed"),
        _ => Ok(()),
    }
}

/// Legacy single-image analysis.
pub async fn run_analyze<W: Write>(config: ClientConfig, path: &str, mut out: W) -> anyhow::Result<()> {
    let image = read_image(Path::new(path), config.max_image_bytes)?;
    let client = RecycleClient::new(config).context("Failed to build backend client")?;
    let reply = client.analyze_image(image.as_str()).await?;

    writeln!(
        out,
        "{}",
        reply_text(reply.response.as_deref(), reply.error.as_deref())
    )?;
    if reply.error.is_some() {
        bail!("Image analysis failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use recycle_core::error::ImageError;

    fn temp_file(name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("recycle-cmd-{}-{}", std::process::id(), name));
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_read_image_png() {
        let path = temp_file("bottle.PNG", &[0x89, b'P', b'N', b'G']);
        let image = read_image(&path, 1024).unwrap();
        assert_eq!(image.media_type(), "image/png");
        assert_eq!(image.byte_len(), 4);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_read_image_rejects_unknown_extension() {
        let path = temp_file("notes.txt", b"hello");
        assert!(read_image(&path, 1024).is_err());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_read_image_enforces_limit() {
        let path = temp_file("big.jpg", &[0u8; 64]);
        let err = read_image(&path, 16).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ImageError>(),
            Some(ImageError::TooLarge { size: 64, limit: 16 })
        ));
        fs::remove_file(path).unwrap();
    }
}
