use std::path::PathBuf;

/// Default Solutions Enabler install location.
pub const DEFAULT_BIN_DIR: &str = "/opt/emc/SYMCLI/bin";

/// Environment variable overriding [`DEFAULT_BIN_DIR`].
pub const BIN_DIR_ENV: &str = "SYMCLI_BIN";

pub const DEFAULT_PROGRAM: &str = "symsg";

/// Where to find the SYMCLI tool, passed to the adapter at construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub bin_dir: PathBuf,
    pub program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_BIN_DIR))
    }
}

impl Config {
    pub fn new(bin_dir: PathBuf) -> Self {
        Self {
            bin_dir,
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    pub fn from_env() -> Self {
        std::env::var_os(BIN_DIR_ENV)
            .map(PathBuf::from)
            .map(Self::new)
            .unwrap_or_default()
    }

    /// `bin_dir/program` if it exists, otherwise the bare name for a `PATH` lookup.
    pub fn program_path(&self) -> PathBuf {
        let candidate = self.bin_dir.join(&self.program);
        if candidate.is_file() {
            candidate
        } else {
            PathBuf::from(&self.program)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_program_path_prefers_bin_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("symsg"), "").unwrap();

        let config = Config::new(temp.path().to_path_buf());
        assert_eq!(config.program_path(), temp.path().join("symsg"));
    }

    #[test]
    fn test_program_path_falls_back_to_path_lookup() {
        let temp = TempDir::new().unwrap();

        let config = Config::new(temp.path().to_path_buf());
        assert_eq!(config.program_path(), PathBuf::from("symsg"));
    }

    #[test]
    fn test_default_bin_dir() {
        let config = Config::default();
        assert_eq!(config.bin_dir, PathBuf::from(DEFAULT_BIN_DIR));
        assert_eq!(config.program, "symsg");
    }
}
