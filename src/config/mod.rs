use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::Result,
    utils::{app_data_dir, ensure_dir},
};

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Operator-editable application settings. The access PIN lives here, in the
/// external config file, never in source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_pin: Option<String>,
    pub currency: String,
    pub employees: Vec<String>,
    pub expense_categories: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_pin: None,
            currency: "INR".into(),
            employees: default_employees(),
            expense_categories: default_expense_categories(),
        }
    }
}

fn default_employees() -> Vec<String> {
    [
        "Vinoth", "Ravi", "Mani", "Ansari", "Kumar", "Hari", "Samuthuram", "Ramesh", "Punitha",
        "Vembu", "Devi", "Babu", "Latha", "Indhra", "Ambiga", "RY", "YS", "Poosari", "Balaji",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_expense_categories() -> Vec<String> {
    [
        "Groceries",
        "Vegetables",
        "Non-Veg",
        "Milk",
        "Banana Leaf",
        "Maintenance",
        "Electricity",
        "Rent",
        "Salary and Advance",
        "Transportation",
        "Others",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
