use crate::error::HttpError;
use crate::mime::MimeType;
use minijinja::Environment;
use serde_json::Value as JsonValue;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Loads static assets (and renders view templates) from a base directory.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    base_dir: PathBuf,
}

impl StaticFiles {
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        Self {
            base_dir: base.into(),
        }
    }

    fn map_path(&self, url_path: &str) -> Option<PathBuf> {
        let mut pb = self.base_dir.clone();
        for comp in Path::new(url_path.trim_start_matches('/')).components() {
            match comp {
                Component::Normal(s) => pb.push(s),
                Component::CurDir => {}
                _ => return None,
            }
        }
        Some(pb)
    }

    /// Load an asset's bytes and resolve its content type from the
    /// requested name. Missing files and traversal attempts both surface
    /// as [`HttpError::NotFound`].
    pub fn load(&self, url_path: &str) -> Result<(Vec<u8>, MimeType), HttpError> {
        let not_found = || HttpError::NotFound {
            path: url_path.to_string(),
        };
        let path = self.map_path(url_path).ok_or_else(not_found)?;
        if !path.is_file() {
            return Err(not_found());
        }
        let bytes = fs::read(&path).map_err(|_| not_found())?;
        Ok((bytes, MimeType::from_file_name(url_path)))
    }

    /// Render the template `<base>/<view>.html` with the model as
    /// context.
    pub fn render(&self, view: &str, model: &JsonValue) -> io::Result<Vec<u8>> {
        let path = self
            .map_path(&format!("{view}.html"))
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "invalid view path"))?;
        let source = fs::read_to_string(&path)?;
        let mut env = Environment::new();
        env.add_template("tpl", &source)
            .map_err(io::Error::other)?;
        let tmpl = env.get_template("tpl").map_err(io::Error::other)?;
        let rendered = tmpl.render(model).map_err(io::Error::other)?;
        Ok(rendered.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_path_prevents_traversal() {
        let sf = StaticFiles::new("tests/staticdata");
        assert!(sf.map_path("../Cargo.toml").is_none());
        assert!(sf.map_path("../../Cargo.toml").is_none());
    }

    #[test]
    fn test_load_resolves_mime_from_name() {
        let sf = StaticFiles::new("tests/staticdata");
        let (bytes, mime) = sf.load("/site.css").unwrap();
        assert_eq!(mime, MimeType::TextCss);
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let sf = StaticFiles::new("tests/staticdata");
        assert_eq!(
            sf.load("/nope.css").unwrap_err(),
            HttpError::NotFound {
                path: "/nope.css".to_string()
            }
        );
    }
}
