use super::layout::ImageDetails;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Color,
    Depth,
}

impl AssetKind {
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Color => "color",
            AssetKind::Depth => "depth",
        }
    }
}

#[derive(Clone, Debug, thiserror::Error)]
pub enum AssetError {
    /// `fetch()` rejected (network error, CORS, no window).
    #[error("fetch {path} failed: {reason}")]
    Fetch { path: String, reason: String },

    /// Server answered with a non-2xx status.
    #[error("fetch {path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    /// Reading the response body failed.
    #[error("reading body of {path} failed: {reason}")]
    Body { path: String, reason: String },

    #[error("decoding image failed: {0}")]
    Decode(String),

    #[error("image has zero size")]
    Empty,
}

/// Tightly packed RGBA8 pixels, row 0 at the top.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn details(&self) -> ImageDetails {
        ImageDetails::from_size(self.width, self.height)
    }

    /// 1×1 image used as a texture until the real one arrives.
    pub fn solid(rgba: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: rgba.to_vec(),
        }
    }
}

/// Decode PNG/JPEG bytes into RGBA8. Grayscale depth maps expand to
/// `r == g == b`, so the shader can read the red channel.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, AssetError> {
    let img = ::image::load_from_memory(bytes).map_err(|e| AssetError::Decode(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(AssetError::Empty);
    }
    Ok(DecodedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}
