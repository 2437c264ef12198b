//! Gallery application configuration.

/// Configuration for the gallery application.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Application name.
    pub name: String,
    /// Document title.
    pub title: String,
    /// Optional stylesheet to link in the document head.
    pub css_path: Option<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            name: "product-gallery".to_string(),
            title: "Product Gallery".to_string(),
            css_path: None,
        }
    }
}

impl GalleryConfig {
    /// Create a new configuration with the given app name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the stylesheet path.
    pub fn with_css(mut self, path: impl Into<String>) -> Self {
        self.css_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_config_default() {
        let config = GalleryConfig::default();

        assert_eq!(config.name, "product-gallery");
        assert_eq!(config.title, "Product Gallery");
        assert!(config.css_path.is_none());
    }

    #[test]
    fn test_gallery_config_new_keeps_default_title() {
        let config = GalleryConfig::new("shop");

        assert_eq!(config.name, "shop");
        assert_eq!(config.title, "Product Gallery");
    }

    #[test]
    fn test_gallery_config_builder_chain() {
        let config = GalleryConfig::new("shop")
            .with_title("Featured")
            .with_css("/pkg/gallery.css");

        assert_eq!(config.title, "Featured");
        assert_eq!(config.css_path, Some("/pkg/gallery.css".to_string()));
    }
}
