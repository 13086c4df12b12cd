//! Market trading rules.
//!
//! A market offers a random selection of the shared item catalog. Buying
//! copies an item into the hero's inventory and leaves the stock as is;
//! sold items are gone for good.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::character::{Character, Hero, HeroError};
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::item::{InventoryError, Item};

/// Game-rule reasons a trade is declined. Nothing changes.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TradeRejection {
    #[error("requires level {required} (hero is level {level})")]
    LevelTooLow { required: u32, level: u32 },

    #[error("costs {price:.0} gold (hero has {money:.0})")]
    InsufficientGold { price: f64, money: f64 },
}

/// Errors from market operations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MarketError {
    #[error(transparent)]
    Rejected(#[from] TradeRejection),

    #[error("no item at stock index {0}")]
    UnknownStock(usize),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl From<HeroError> for MarketError {
    fn from(err: HeroError) -> Self {
        match err {
            HeroError::Inventory(err) => MarketError::Inventory(err),
            HeroError::NotEquippable(name) => MarketError::Inventory(InventoryError::NotFound(name)),
        }
    }
}

impl GameError for MarketError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MarketError::Rejected(_) => ErrorSeverity::Recoverable,
            MarketError::UnknownStock(_) => ErrorSeverity::Validation,
            MarketError::Inventory(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MarketError::Rejected(TradeRejection::LevelTooLow { .. }) => "MARKET_LEVEL_TOO_LOW",
            MarketError::Rejected(TradeRejection::InsufficientGold { .. }) => {
                "MARKET_INSUFFICIENT_GOLD"
            }
            MarketError::UnknownStock(_) => "MARKET_UNKNOWN_STOCK",
            MarketError::Inventory(err) => err.error_code(),
        }
    }
}

/// Checks whether `hero` may buy `item`.
pub fn can_buy(hero: &Hero, item: &Item) -> Result<(), TradeRejection> {
    if hero.level() < item.min_level {
        return Err(TradeRejection::LevelTooLow {
            required: item.min_level,
            level: hero.level(),
        });
    }
    if hero.money() < item.price {
        return Err(TradeRejection::InsufficientGold {
            price: item.price,
            money: hero.money(),
        });
    }
    Ok(())
}

/// Buys `item` for `hero`: deducts the price and adds a copy to the inventory.
pub fn buy(hero: &mut Hero, item: &Item) -> Result<(), TradeRejection> {
    can_buy(hero, item)?;
    if !hero.deduct_money(item.price) {
        return Err(TradeRejection::InsufficientGold {
            price: item.price,
            money: hero.money(),
        });
    }
    hero.inventory_mut().add(item.clone());
    tracing::debug!(hero = %hero.name(), item = %item.name, price = item.price, "item bought");
    Ok(())
}

/// Sells the inventory entry at `index`. Returns the gold credited.
pub fn sell(hero: &mut Hero, index: usize, config: &GameConfig) -> Result<f64, MarketError> {
    let item = hero.discard_at(index)?;
    let proceeds = sale_price(&item, config);
    hero.add_money(proceeds);
    tracing::debug!(hero = %hero.name(), item = %item.name, proceeds, "item sold");
    Ok(proceeds)
}

/// Gold paid back for an item.
pub fn sale_price(item: &Item, config: &GameConfig) -> f64 {
    item.price * config.resale_ratio
}

/// The goods on offer at one market visit.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Market {
    stock: Vec<Item>,
}

impl Market {
    /// Picks up to `market_stock_size` distinct catalog entries.
    pub fn stock(catalog: &[Item], config: &GameConfig, rng: &mut impl Rng) -> Self {
        let stock: Vec<Item> = catalog
            .choose_multiple(rng, config.market_stock_size)
            .cloned()
            .collect();
        tracing::debug!(offered = stock.len(), catalog = catalog.len(), "market stocked");
        Self { stock }
    }

    pub fn from_items(stock: Vec<Item>) -> Self {
        Self { stock }
    }

    pub fn items(&self) -> &[Item] {
        &self.stock
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Buys the stock entry at `index` for `hero`.
    pub fn buy(&self, hero: &mut Hero, index: usize) -> Result<&Item, MarketError> {
        let item = self.stock.get(index).ok_or(MarketError::UnknownStock(index))?;
        buy(hero, item)?;
        Ok(item)
    }

    pub fn sell(&self, hero: &mut Hero, index: usize, config: &GameConfig) -> Result<f64, MarketError> {
        sell(hero, index, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::HeroClass;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn hero(money: f64) -> Hero {
        Hero::new("Muamman", HeroClass::Warrior, 100.0, 900.0, 500.0, 750.0, money, 0).unwrap()
    }

    fn sword() -> Item {
        Item::weapon("Sword", 500.0, 1, 800.0, 1)
    }

    #[test]
    fn buying_deducts_price_and_copies_item() {
        let mut hero = hero(1_000.0);
        let market = Market::from_items(vec![sword()]);

        market.buy(&mut hero, 0).unwrap();
        assert_eq!(hero.money(), 500.0);
        assert!(hero.inventory().contains(&sword()));
        assert_eq!(market.items().len(), 1);
    }

    #[test]
    fn rejected_purchase_changes_nothing() {
        let mut poor = hero(100.0);
        assert_eq!(
            buy(&mut poor, &sword()),
            Err(TradeRejection::InsufficientGold { price: 500.0, money: 100.0 })
        );
        assert_eq!(poor.money(), 100.0);
        assert!(poor.inventory().is_empty());

        let mut novice = hero(10_000.0);
        let axe = Item::weapon("Axe", 550.0, 5, 850.0, 1);
        assert_eq!(
            buy(&mut novice, &axe),
            Err(TradeRejection::LevelTooLow { required: 5, level: 1 })
        );
        assert_eq!(novice.money(), 10_000.0);
    }

    #[test]
    fn selling_pays_half_and_removes_one_copy() {
        let config = GameConfig::default();
        let mut hero = hero(0.0);
        hero.inventory_mut().add(sword());
        hero.inventory_mut().add(sword());

        assert_eq!(sell(&mut hero, 1, &config).unwrap(), 250.0);
        assert_eq!(hero.money(), 250.0);
        assert_eq!(hero.inventory().len(), 1);
    }

    #[test]
    fn selling_equipped_item_unequips_it() {
        let config = GameConfig::default();
        let mut hero = hero(0.0);
        hero.inventory_mut().add(sword());
        hero.equip_from_inventory(0).unwrap();

        sell(&mut hero, 0, &config).unwrap();
        assert!(hero.equipment().weapon().is_none());
    }

    #[test]
    fn bad_indices_are_structural() {
        let config = GameConfig::default();
        let mut hero = hero(0.0);
        let market = Market::default();
        assert_eq!(market.buy(&mut hero, 0).err(), Some(MarketError::UnknownStock(0)));
        let err = sell(&mut hero, 3, &config).unwrap_err();
        assert!(matches!(err, MarketError::Inventory(InventoryError::SlotOutOfRange { .. })));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn stock_is_distinct_and_bounded() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let catalog: Vec<Item> = (0..25)
            .map(|i| Item::armor(format!("Armor{i}"), 100.0, 1, 10.0))
            .collect();

        let market = Market::stock(&catalog, &config, &mut rng);
        assert_eq!(market.items().len(), 10);
        let mut names: Vec<_> = market.items().iter().map(|item| item.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 10);

        let small = Market::stock(&catalog[..3], &config, &mut rng);
        assert_eq!(small.items().len(), 3);
    }
}
