use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// How generated code spells library and user type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    /// `Codec.INT`, with the needed imports reported alongside.
    #[default]
    Simple,
    /// `com.mojang.serialization.Codec.INT`.
    Qualified,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub style: NameStyle,
    /// Max (codec, getter) pairs `StreamCodec.composite` accepts.
    pub composite_limit: usize,
    pub indent: String,
    /// Skip the enum path when the enum already declares `CODEC`.
    pub enum_guard: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: NameStyle::Simple,
            composite_limit: 6,
            indent: "    ".to_string(),
            enum_guard: true,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        crate::path_de::from_str_with_path(&src)
    }
}
