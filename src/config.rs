use std::path::PathBuf;

/// Sizes (px) the browser extension manifest expects, in output order.
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Static description of the icon batch. Everything is compiled in; there is
/// no config file or environment lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output_dir: String,
    pub file_prefix: String,
    pub sizes: Vec<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: "icons".to_string(),
            file_prefix: "icon".to_string(),
            sizes: ICON_SIZES.to_vec(),
        }
    }
}

impl GeneratorConfig {
    /// `icon16.png` for size 16
    pub fn file_name(&self, size: u32) -> String {
        format!("{}{}.png", self.file_prefix, size)
    }

    /// Path as shown to the user, e.g. `icons/icon16.png`
    pub fn relative_path(&self, size: u32) -> String {
        format!("{}/{}", self.output_dir, self.file_name(size))
    }

    pub fn output_path(&self, root: &std::path::Path, size: u32) -> PathBuf {
        root.join(&self.output_dir).join(self.file_name(size))
    }
}
