use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct AudioConfig {
    /// Percent, 0 to 100.
    pub volume: u8,
    /// Where asset references that are not URLs are looked up.
    pub assets_dir: PathBuf,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: 80,
            assets_dir: PathBuf::from("assets"),
        }
    }
}
