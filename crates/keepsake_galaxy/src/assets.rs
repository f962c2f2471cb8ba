//! Photo manifest and texture loading
//!
//! The animator never performs I/O itself. A manifest (a JSON array of file
//! names) yields the ordered source list; a [`TextureLoader`] implementation
//! owned by the host resolves sources asynchronously and the animator drains
//! its completions each tick. Every failure degrades to a placeholder
//! visual; nothing here can stop the tick loop.

use rustc_hash::FxHashSet;
use slotmap::new_key_type;
use thiserror::Error;

new_key_type! {
    /// Handle for an in-flight texture request
    pub struct TextureRequestId;
}

/// Texture loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source could not be fetched (missing file, network failure).
    #[error("texture fetch failed: {0}")]
    Fetch(String),

    /// The fetched bytes could not be decoded as an image.
    #[error("texture decode failed: {0}")]
    Decode(String),
}

/// Manifest errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest document could not be retrieved.
    #[error("manifest unavailable: {0}")]
    Unavailable(String),

    /// The manifest is not a JSON array.
    #[error("malformed manifest: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A decoded texture as the animator sees it.
///
/// Dimensions drive the aspect-preserving billboard footprint; the pixel
/// data stays with the host's renderer. Dropping the previous value when a
/// swap replaces it is what releases the old resource.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureData {
    pub source: String,
    pub width: u32,
    pub height: u32,
}

impl TextureData {
    /// Width over height; falls back to square for degenerate dimensions.
    pub fn aspect(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

pub type LoadResult = Result<TextureData, LoadError>;

/// Asynchronous texture source resolved by the host.
///
/// `request` is fire-and-forget; completions surface later through
/// `poll_completions` in whatever order the host resolved them. A request
/// that never completes simply leaves its billboard in placeholder state.
pub trait TextureLoader {
    fn request(&mut self, source: &str) -> TextureRequestId;

    /// Drain every completion that arrived since the last poll.
    fn poll_completions(&mut self) -> Vec<(TextureRequestId, LoadResult)>;
}

impl<T: TextureLoader + ?Sized> TextureLoader for Box<T> {
    fn request(&mut self, source: &str) -> TextureRequestId {
        (**self).request(source)
    }

    fn poll_completions(&mut self) -> Vec<(TextureRequestId, LoadResult)> {
        (**self).poll_completions()
    }
}

/// Host-driven [`TextureLoader`] for tests and headless runs.
///
/// Requests park until the host calls [`ManualLoader::complete`], which
/// makes interleavings between ticks and load completions explicit.
#[derive(Default)]
pub struct ManualLoader {
    pending: slotmap::SlotMap<TextureRequestId, String>,
    completed: Vec<(TextureRequestId, LoadResult)>,
}

impl ManualLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source string of an in-flight request.
    pub fn pending_source(&self, id: TextureRequestId) -> Option<&str> {
        self.pending.get(id).map(String::as_str)
    }

    /// Requests that have not completed yet, in arbitrary order.
    pub fn pending(&self) -> impl Iterator<Item = (TextureRequestId, &str)> {
        self.pending.iter().map(|(id, src)| (id, src.as_str()))
    }

    /// Resolve a request; queued until the next `poll_completions`.
    pub fn complete(&mut self, id: TextureRequestId, result: LoadResult) {
        if self.pending.remove(id).is_some() {
            self.completed.push((id, result));
        }
    }

    /// Resolve a request with a square texture of the given edge length.
    pub fn complete_square(&mut self, id: TextureRequestId, edge: u32) {
        let Some(source) = self.pending.get(id).cloned() else {
            return;
        };
        self.complete(
            id,
            Ok(TextureData {
                source,
                width: edge,
                height: edge,
            }),
        );
    }
}

impl TextureLoader for ManualLoader {
    fn request(&mut self, source: &str) -> TextureRequestId {
        self.pending.insert(source.to_string())
    }

    fn poll_completions(&mut self) -> Vec<(TextureRequestId, LoadResult)> {
        std::mem::take(&mut self.completed)
    }
}

/// Extensions the photo orbit accepts.
const SUPPORTED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

fn is_supported_image(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Parse a photo manifest: a JSON array of image file names.
///
/// Non-string entries, empty names, and unsupported extensions are filtered
/// silently; duplicates are removed preserving first-seen order. A document
/// that is not a JSON array is an error, which callers treat the same as an
/// empty manifest.
pub fn parse_photo_manifest(json: &str) -> Result<Vec<String>, ManifestError> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;

    let mut seen = FxHashSet::default();
    let sources = entries
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::String(name) => Some(name.trim().to_string()),
            _ => None,
        })
        .filter(|name| !name.is_empty() && is_supported_image(name))
        .filter(|name| seen.insert(name.clone()))
        .collect();

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_filters_and_dedupes() {
        let json = r#"["a.jpg", "b.PNG", "a.jpg", "", "notes.txt", 42, "c.webp"]"#;
        let sources = parse_photo_manifest(json).unwrap();
        assert_eq!(sources, vec!["a.jpg", "b.PNG", "c.webp"]);
    }

    #[test]
    fn manifest_must_be_an_array() {
        assert!(matches!(
            parse_photo_manifest(r#"{"photos": []}"#),
            Err(ManifestError::Malformed(_))
        ));
    }

    #[test]
    fn empty_manifest_is_fine() {
        assert!(parse_photo_manifest("[]").unwrap().is_empty());
    }

    #[test]
    fn aspect_handles_degenerate_dimensions() {
        let tex = TextureData {
            source: "x.png".into(),
            width: 0,
            height: 100,
        };
        assert_eq!(tex.aspect(), 1.0);
    }

    #[test]
    fn manual_loader_parks_until_completed() {
        let mut loader = ManualLoader::new();
        let id = loader.request("a.jpg");
        assert!(loader.poll_completions().is_empty());

        loader.complete_square(id, 256);
        let done = loader.poll_completions();
        assert_eq!(done.len(), 1);
        assert!(done[0].1.is_ok());

        // A second completion for the same id is a no-op.
        loader.complete(id, Err(LoadError::Fetch("late".into())));
        assert!(loader.poll_completions().is_empty());
    }
}
