use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory where rendered log sheets land by default
    pub output_dir: String,
    #[serde(default = "default_carrier_name")]
    pub carrier_name: String,
    #[serde(default = "default_driver_name")]
    pub driver_name: String,
    #[serde(default = "default_export_format")]
    pub default_export_format: String,
}

fn default_carrier_name() -> String {
    "Mumo Transportation".to_string()
}
fn default_driver_name() -> String {
    "Jack Mumo".to_string()
}
fn default_export_format() -> String {
    "csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: Self::default_output_dir().to_string_lossy().to_string(),
            carrier_name: default_carrier_name(),
            driver_name: default_driver_name(),
            default_export_format: default_export_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("eldlogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".eldlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("eldlogger.conf")
    }

    /// Default directory for rendered sheets
    pub fn default_output_dir() -> PathBuf {
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration file and output directory
    pub fn init_all(is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(&config.output_dir)?;
        println!("✅ Output dir:  {}", config.output_dir);

        Ok(())
    }
}
