// src/record.rs

/// One marketplace listing, immutable once extracted.
///
/// Fields are combined positionally from independent passes over the same
/// table: label/price from the data cells, the id from the row's link.
/// `auction_id` is `None` when the row's markup doesn't resolve to an id;
/// that never blocks the sibling fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuctionRecord {
    /// Original listing text, e.g. "5x Rare Candy".
    pub raw_label: String,
    /// Price in the game's currency unit.
    pub price: u64,
    pub auction_id: Option<String>,
    /// Parsed multiplier from the label; 1 when absent or unparseable.
    pub quantity: u32,
    /// Whitespace-normalized item name.
    pub item: String,
}

impl AuctionRecord {
    pub fn headers() -> Vec<String> {
        ["Auction", "Current Price", "Auction ID", "Quantity", "Item"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.raw_label.clone(),
            self.price.to_string(),
            self.auction_id.clone().unwrap_or_default(),
            self.quantity.to_string(),
            self.item.clone(),
        ]
    }
}
