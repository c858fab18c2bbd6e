use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_PATH: &str = "/usr/include/X11/cursorfont.h";
pub const DEFAULT_OUTPUT_PATH: &str = "cursorids.rs";
pub const DEFAULT_VALUE_TYPE: &str = "x11rb::protocol::xproto::Cursor";
pub const DEFAULT_MAP_NAME: &str = "STRING_TO_CURSOR";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub target: MappingTarget,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            target: MappingTarget::default(),
        }
    }
}

impl Config {
    pub fn new<I: Into<PathBuf>, O: Into<PathBuf>>(input_path: I, output_path: O) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            target: MappingTarget::default(),
        }
    }

    pub fn with_target(mut self, target: MappingTarget) -> Self {
        self.target = target;
        self
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

/// Describes the lookup table emitted next to the constants.
///
/// `value_type` is the Rust type of the table's values. A path such as
/// `x11rb::protocol::xproto::Cursor` is imported with a `use` line and
/// referred to by its last segment; a bare name like `u32` is used as is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingTarget {
    pub value_type: String,
    pub map_name: String,
}

impl Default for MappingTarget {
    fn default() -> Self {
        Self {
            value_type: DEFAULT_VALUE_TYPE.to_string(),
            map_name: DEFAULT_MAP_NAME.to_string(),
        }
    }
}

impl MappingTarget {
    pub fn new<T: Into<String>, N: Into<String>>(value_type: T, map_name: N) -> Self {
        Self {
            value_type: value_type.into(),
            map_name: map_name.into(),
        }
    }

    /// Path to import, if the value type lives in another module.
    pub fn import_path(&self) -> Option<&str> {
        let ty = self.value_type.trim();
        ty.contains("::").then_some(ty)
    }

    /// Name the value type is spelled with inside the generated file.
    pub fn type_name(&self) -> &str {
        let ty = self.value_type.trim();
        ty.rsplit("::").next().unwrap_or(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.input_path, PathBuf::from("/usr/include/X11/cursorfont.h"));
        assert_eq!(config.output_path, PathBuf::from("cursorids.rs"));
        assert_eq!(config.target.map_name, "STRING_TO_CURSOR");
    }

    #[test]
    fn test_value_type_split() {
        let target = MappingTarget::default();
        assert_eq!(target.import_path(), Some("x11rb::protocol::xproto::Cursor"));
        assert_eq!(target.type_name(), "Cursor");

        let bare = MappingTarget::new("u32", "CURSORS");
        assert_eq!(bare.import_path(), None);
        assert_eq!(bare.type_name(), "u32");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            "output_path = \"src/cursorids.rs\"\n\n[target]\nvalue_type = \"u16\"\n",
        )
        .unwrap();
        assert_eq!(config.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.output_path, PathBuf::from("src/cursorids.rs"));
        assert_eq!(config.target.value_type, "u16");
        assert_eq!(config.target.map_name, DEFAULT_MAP_NAME);
    }

    #[test]
    fn test_toml_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cursorfont-gen.toml");
        let config = Config::new("/tmp/cursorfont.h", "out/cursorids.rs")
            .with_target(MappingTarget::new("u32", "CURSOR_IDS"));

        fs::write(&path, config.to_toml_string().unwrap()).unwrap();
        assert_eq!(Config::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "input_path = [").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
