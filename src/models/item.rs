use serde::{Deserialize, Serialize};

use super::BossId;

/// One row of the output table. Field order here is the CSV column order,
/// and the header row is derived from these field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub boss_name: BossId,
    pub item_name: String,
    pub image_url: String,
}

/// Static item attached to every successfully fetched boss, independent of
/// anything on the scraped page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementalItem {
    pub item_name: String,
    pub image_url: String,
}

impl SupplementalItem {
    /// Re-stamp this item with the boss currently being processed.
    pub fn stamp(&self, boss: &BossId) -> ItemRecord {
        ItemRecord {
            boss_name: boss.clone(),
            item_name: self.item_name.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stamp_carries_the_current_boss() {
        let neso = SupplementalItem {
            item_name: "neso (big)".to_string(),
            image_url: "https://msu.io/marketplace/images/neso.png".to_string(),
        };

        let record = neso.stamp(&BossId::from("zakum-chaos"));

        assert_eq!(
            record,
            ItemRecord {
                boss_name: BossId::from("zakum-chaos"),
                item_name: "neso (big)".to_string(),
                image_url: "https://msu.io/marketplace/images/neso.png".to_string(),
            }
        );
    }
}
