//! UI Configuration
//!
//! Labels, currency and seed items, embedded at build time from `config/ui.json`.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::models::{MenuItem, MenuItemId};

/// Embedded configuration source
const EMBEDDED_CONFIG: &str = include_str!("../config/ui.json");

/// Text shown by the form and table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormLabels {
    pub name_placeholder: String,
    pub price_placeholder: String,
    pub category_placeholder: String,
    pub add_button: String,
    pub save_button: String,
    pub edit_button: String,
    pub delete_button: String,
    pub name_header: String,
    pub price_header: String,
    pub category_header: String,
    pub actions_header: String,
    pub empty_table: String,
}

impl Default for FormLabels {
    fn default() -> Self {
        Self {
            name_placeholder: "Nombre del platillo".to_string(),
            price_placeholder: "Precio".to_string(),
            category_placeholder: "Categoría".to_string(),
            add_button: "Agregar Platillo".to_string(),
            save_button: "Actualizar Platillo".to_string(),
            edit_button: "Editar".to_string(),
            delete_button: "Eliminar".to_string(),
            name_header: "Nombre".to_string(),
            price_header: "Precio ($)".to_string(),
            category_header: "Categoría".to_string(),
            actions_header: "Acciones".to_string(),
            empty_table: "Sin platillos".to_string(),
        }
    }
}

/// Item present when the page opens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedItem {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub currency_symbol: String,
    pub log_level: String,
    pub labels: FormLabels,
    pub seed_items: Vec<SeedItem>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "🍽️ Gestión de Platillos".to_string(),
            currency_symbol: "$".to_string(),
            log_level: "info".to_string(),
            labels: FormLabels::default(),
            seed_items: Vec::new(),
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON document
    pub fn from_json(source: &str) -> Result<Self> {
        let config: UiConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// The build-time configuration
    pub fn load() -> Result<Self> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn seed_menu_items(&self) -> Vec<MenuItem> {
        self.seed_items
            .iter()
            .map(|seed| MenuItem::new(MenuItemId(seed.id), seed.name.clone(), seed.price, seed.category.clone()))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        for (index, seed) in self.seed_items.iter().enumerate() {
            let reason = if seed.id == u32::MAX {
                "id leaves no room for new items"
            } else if seed.name.trim().is_empty() {
                "name is empty"
            } else if seed.category.trim().is_empty() {
                "category is empty"
            } else if !seed.price.is_finite() || seed.price < 0.0 {
                "price must be a non-negative number"
            } else {
                continue;
            };
            return Err(ConfigError::InvalidSeed { index, reason: reason.to_string() });
        }
        Ok(())
    }
}
