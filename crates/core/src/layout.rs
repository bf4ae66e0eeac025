//! Where the two revisions of a template live relative to a template root.

/// Directory names and file extension of a template tree.
///
/// The default layout is `2.0/{name}.svg` next to `3.0/{name}.svg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLayout {
    pub revision2_dir: String,
    pub revision3_dir: String,
    /// File extension without the leading dot.
    pub extension: String,
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self {
            revision2_dir: "2.0".to_string(),
            revision3_dir: "3.0".to_string(),
            extension: "svg".to_string(),
        }
    }
}

impl TemplateLayout {
    /// Relative path of an asset's revision-2 document.
    pub fn revision2_path(&self, name: &str) -> String {
        format!("{}/{}.{}", self.revision2_dir, name, self.extension)
    }

    /// Relative path of an asset's revision-3 document.
    pub fn revision3_path(&self, name: &str) -> String {
        format!("{}/{}.{}", self.revision3_dir, name, self.extension)
    }

    /// The asset name of a listed file, if it carries the template extension.
    pub fn asset_name<'s>(&self, file_name: &'s str) -> Option<&'s str> {
        let stem = file_name.strip_suffix(self.extension.as_str())?.strip_suffix('.')?;
        (!stem.is_empty()).then_some(stem)
    }
}
