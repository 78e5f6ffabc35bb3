// crates/worldatlas-core/src/flag.rs

//! # Flag Images
//!
//! [`FlagSource`] is the seam between the browse state and the network.
//! The shell uses [`HttpFlagSource`]; tests plug in stubs.

use crate::error::Result;

/// A decoded flag, as straight RGBA8 pixels (row-major, unmultiplied).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl FlagImage {
    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }

    /// Decodes PNG/JPEG/GIF/BMP/WebP bytes; the format is sniffed from content.
    #[cfg(feature = "fetch")]
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }
}

/// Anything that can turn a flag URL into pixels.
pub trait FlagSource {
    fn fetch(&self, url: &str) -> Result<FlagImage>;
}

impl<F: FlagSource + ?Sized> FlagSource for &F {
    fn fetch(&self, url: &str) -> Result<FlagImage> {
        (**self).fetch(url)
    }
}

impl<F: FlagSource + ?Sized> FlagSource for Box<F> {
    fn fetch(&self, url: &str) -> Result<FlagImage> {
        (**self).fetch(url)
    }
}

/// A source that never produces an image (offline use).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFlags;

impl FlagSource for NoFlags {
    fn fetch(&self, url: &str) -> Result<FlagImage> {
        Err(crate::AtlasError::NotFound(format!(
            "flag fetching disabled: {url}"
        )))
    }
}

// -----------------------------------------------------------------------------
// HTTP (feature "fetch")
// -----------------------------------------------------------------------------

#[cfg(feature = "fetch")]
pub use http::HttpFlagSource;

#[cfg(feature = "fetch")]
mod http {
    use super::{FlagImage, FlagSource};
    use crate::error::Result;
    use reqwest::blocking::Client;
    use tracing::debug;

    /// Blocking HTTP GET, one request per call.
    ///
    /// No retry and no timeout: a slow server holds the caller until the
    /// transfer finishes or the connection drops.
    #[derive(Debug, Clone)]
    pub struct HttpFlagSource {
        client: Client,
    }

    impl HttpFlagSource {
        pub fn new() -> Result<Self> {
            let client = Client::builder()
                .user_agent(concat!("worldatlas/", env!("CARGO_PKG_VERSION")))
                .timeout(None::<std::time::Duration>)
                .build()?;
            Ok(Self { client })
        }
    }

    impl FlagSource for HttpFlagSource {
        fn fetch(&self, url: &str) -> Result<FlagImage> {
            debug!(url, "Fetching flag");
            let bytes = self.client.get(url).send()?.error_for_status()?.bytes()?;
            FlagImage::decode(&bytes)
        }
    }
}
