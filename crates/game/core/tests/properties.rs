use legends_core::combat::mitigate;
use legends_core::{
    AttributeSet, Character, GameConfig, Hero, HeroClass, Item, Monster, MonsterKind, Party,
    SpellElement, TradeRejection, market,
};
use proptest::prelude::*;

fn hero_class() -> impl Strategy<Value = HeroClass> {
    prop_oneof![
        Just(HeroClass::Warrior),
        Just(HeroClass::Sorcerer),
        Just(HeroClass::Paladin),
    ]
}

fn element() -> impl Strategy<Value = SpellElement> {
    prop_oneof![
        Just(SpellElement::Fire),
        Just(SpellElement::Ice),
        Just(SpellElement::Lightning),
    ]
}

fn hero(class: HeroClass, mana: f64, money: f64) -> Hero {
    Hero::new("Prop", class, mana, 500.0, 400.0, 300.0, money, 0).unwrap()
}

proptest! {
    #[test]
    fn hp_tracks_level_after_level_ups(class in hero_class(), gains in prop::collection::vec(0u32..60, 0..8)) {
        let config = GameConfig::default();
        let mut hero = hero(class, 100.0, 0.0);
        for gain in gains {
            hero.gain_experience(gain, &config);
            prop_assert_eq!(hero.hp(), f64::from(hero.level()) * 100.0);
            prop_assert!(hero.experience() < config.experience_threshold(hero.level()));
        }
    }

    #[test]
    fn level_up_grows_mana_by_ten_percent(class in hero_class(), mana in 0.0f64..5_000.0) {
        let config = GameConfig::default();
        let mut hero = hero(class, mana, 0.0);
        hero.level_up(&config);
        prop_assert!((hero.mana() - mana * 1.1).abs() < 1e-9);
    }

    #[test]
    fn dodge_probability_stays_in_unit_range(
        dodge in 0.0f64..500.0,
        casts in prop::collection::vec((element(), 0.0f64..2.0), 0..16),
        flat in prop::collection::vec(0.0f64..200.0, 0..4),
    ) {
        let mut monster = Monster::new("Prop", MonsterKind::Spirit, 1, 100.0, 100.0, dodge).unwrap();
        prop_assert!((monster.dodge_probability() - (dodge / 100.0).min(1.0)).abs() < 1e-12);
        for (element, ratio) in casts {
            monster.weaken(element, ratio);
        }
        for amount in flat {
            monster.reduce_dodge_chance(amount);
        }
        let p = monster.dodge_probability();
        prop_assert!((0.0..=1.0).contains(&p));
        prop_assert!(monster.defense() >= 0.0 && monster.base_damage() >= 0.0);
    }

    #[test]
    fn mitigated_damage_is_never_negative(raw in -1e6f64..1e6, reduction in -1e6f64..1e6) {
        let dealt = mitigate(raw, reduction);
        prop_assert!(dealt >= 0.0);
        prop_assert!(dealt <= raw.max(0.0));
    }

    #[test]
    fn wipe_out_iff_all_fallen(damages in prop::collection::vec(0.0f64..200.0, 1..=3)) {
        let mut party = Party::new();
        for damage in &damages {
            let mut member = hero(HeroClass::Paladin, 10.0, 0.0);
            member.take_damage(*damage);
            party.add_hero(member).unwrap();
        }
        let all_down = damages.iter().all(|damage| *damage >= 100.0);
        prop_assert_eq!(party.is_wiped_out(), all_down);
    }

    #[test]
    fn buying_fails_only_on_level_or_gold(
        money in 0.0f64..2_000.0,
        price in 0.0f64..2_000.0,
        min_level in 0u32..4,
        levels in 0u32..3,
    ) {
        let config = GameConfig::default();
        let mut buyer = hero(HeroClass::Sorcerer, 10.0, money);
        for _ in 0..levels {
            buyer.level_up(&config);
        }
        let item = Item::potion("Strength_Potion", price, min_level, 75.0, AttributeSet::STRENGTH);
        let before = buyer.clone();

        let result = market::buy(&mut buyer, &item);
        let should_fail = buyer.level() < min_level || money < price;
        prop_assert_eq!(result.is_err(), should_fail);
        if let Err(rejection) = result {
            prop_assert_eq!(&buyer, &before);
            match rejection {
                TradeRejection::LevelTooLow { .. } => prop_assert!(before.level() < min_level),
                TradeRejection::InsufficientGold { .. } => prop_assert!(money < price),
            }
        } else {
            prop_assert_eq!(buyer.money(), money - price);
            prop_assert_eq!(buyer.inventory().len(), 1);
        }
    }

    #[test]
    fn selling_returns_half_price(price in 0.0f64..5_000.0, copies in 1usize..4) {
        let config = GameConfig::default();
        let mut seller = hero(HeroClass::Warrior, 10.0, 0.0);
        let item = Item::armor("Breastplate", price, 1, 600.0);
        for _ in 0..copies {
            seller.inventory_mut().add(item.clone());
        }
        let proceeds = market::sell(&mut seller, 0, &config).unwrap();
        prop_assert_eq!(proceeds, price * 0.5);
        prop_assert_eq!(seller.money(), price * 0.5);
        prop_assert_eq!(seller.inventory().len(), copies - 1);
    }
}
