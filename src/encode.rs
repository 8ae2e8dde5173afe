use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::source::ImageRef;

/// Read the referenced image and encode it as base64, ready for the request
/// body. The service wants the bare payload, no data-URL prefix.
pub async fn image_to_base64(image: &ImageRef) -> Result<String, std::io::Error> {
    let bytes = tokio::fs::read(image.path()).await?;
    log::debug!(
        "Encoding {} bytes from {}",
        bytes.len(),
        image.path().display()
    );
    Ok(STANDARD.encode(bytes))
}
