//! Menu Models
//!
//! Data structures for menu items and the form draft.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub u32);

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A committed menu item (platillo)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl MenuItem {
    pub fn new(id: MenuItemId, name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}

/// Editable field of the draft form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Price,
    Category,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [DraftField::Name, DraftField::Price, DraftField::Category];

    /// Form control name
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Price => "price",
            DraftField::Category => "category",
        }
    }
}

/// In-progress form values, not yet committed to the list.
///
/// Fields hold the raw text of their inputs. `id` is `Some` only while an
/// existing item is being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftForm {
    pub id: Option<MenuItemId>,
    pub name: String,
    pub price: String,
    pub category: String,
}

impl DraftForm {
    /// Load an existing item for editing
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            id: Some(item.id),
            name: item.name.clone(),
            price: format_price_input(item.price),
            category: item.category.clone(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Price => &self.price,
            DraftField::Category => &self.category,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Price => self.price = value,
            DraftField::Category => self.category = value,
        }
    }

    /// True when the form holds nothing at all
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && DraftField::ALL.iter().all(|f| self.field(*f).is_empty())
    }

    /// Presence check used before creating an item
    pub fn has_required_fields(&self) -> bool {
        DraftField::ALL.iter().all(|f| !self.field(*f).is_empty())
    }
}

/// Convert price text the way a browser number coercion does:
/// blank text is zero, a finite decimal is itself, anything else is NaN.
pub fn parse_price(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() => price,
        _ => f64::NAN,
    }
}

/// Price as it should appear inside a number input
pub fn format_price_input(price: f64) -> String {
    if price.is_nan() {
        String::new()
    } else {
        price.to_string()
    }
}

/// Price as it appears in the table
pub fn format_price(price: f64, currency_symbol: &str) -> String {
    if price.is_nan() {
        return "-".to_string();
    }
    if price.fract() == 0.0 {
        format!("{}{}", currency_symbol, price)
    } else {
        format!("{}{:.2}", currency_symbol, price)
    }
}
