use serde::Serialize;

/// Metadata of the user's selected image. A plain value type (rather than a
/// `web_sys::File`) so session logic can run and be tested off-browser.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageFile {
    pub name: String,
    /// Byte size as reported by the browser File API.
    pub size_bytes: f64,
    pub mime: String,
}

impl ImageFile {
    pub fn size_mb(&self) -> f64 {
        self.size_bytes / 1024.0 / 1024.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub category: String,
    /// Percentage, 0–100.
    pub confidence: f64,
    pub insights: Vec<String>,
    pub tags: Vec<String>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mb_from_bytes() {
        let file = ImageFile {
            name: "photo.png".into(),
            size_bytes: 2.0 * 1024.0 * 1024.0,
            mime: "image/png".into(),
        };
        assert!((file.size_mb() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_size_mb_small_file() {
        let file = ImageFile {
            name: "icon.gif".into(),
            size_bytes: 512.0 * 1024.0,
            mime: "image/gif".into(),
        };
        assert_eq!(format!("{:.1}MB", file.size_mb()), "0.5MB");
    }
}
