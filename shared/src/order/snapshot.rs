//! Summary snapshot - the read-only slice of app state the summary renders

use super::{LineItem, PromoRate};
use serde::{Deserialize, Deserializer, Serialize};

/// `{ items, promo }` as selected from the store
///
/// Missing or null fields fall back to an empty item list and no promo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SummarySnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo: Option<PromoRate>,
}

impl SummarySnapshot {
    pub fn new(items: Vec<LineItem>, promo: Option<PromoRate>) -> Self {
        Self { items, promo }
    }

    /// Promo rate with the absent case resolved to zero
    pub fn promo_rate(&self) -> PromoRate {
        self.promo.unwrap_or_default()
    }

    /// Item whose tax rate and zipcode apply to the whole order
    pub fn first_item(&self) -> Option<&LineItem> {
        self.items.first()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
