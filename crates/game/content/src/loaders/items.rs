//! Item catalog loaders.
//!
//! | File | Format |
//! |------|--------|
//! | weapons | `name cost level damage hands` |
//! | armor | `name cost level reduction` |
//! | potions | `name cost level increase Attr1/Attr2` |
//! | spells | `name cost level damage mana_cost` |

use std::path::Path;

use legends_core::{AttributeSet, Item, SpellElement};

use crate::loaders::{LoadResult, field, parse_records, read_catalog};

/// Item category stored in a single catalog file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemFile {
    Weapons,
    Armor,
    Potions,
    Spells(SpellElement),
}

impl ItemFile {
    fn min_fields(self) -> usize {
        match self {
            ItemFile::Armor => 4,
            ItemFile::Weapons | ItemFile::Potions | ItemFile::Spells(_) => 5,
        }
    }
}

/// Loader for the shared item catalog.
pub struct ItemLoader;

impl ItemLoader {
    /// Load one catalog file. A missing file yields no items.
    pub fn load(path: &Path, file: ItemFile) -> LoadResult<Vec<Item>> {
        let Some(content) = read_catalog(path)? else {
            return Ok(Vec::new());
        };
        Ok(Self::parse(&path.display().to_string(), &content, file))
    }

    pub fn parse(source: &str, content: &str, file: ItemFile) -> Vec<Item> {
        parse_records(source, content, file.min_fields(), |fields| {
            let name = fields[0];
            let price = field(fields, 1, "cost")?;
            let min_level = field(fields, 2, "level")?;
            let item = match file {
                ItemFile::Weapons => Item::weapon(
                    name,
                    price,
                    min_level,
                    field(fields, 3, "damage")?,
                    field(fields, 4, "hands")?,
                ),
                ItemFile::Armor => {
                    Item::armor(name, price, min_level, field(fields, 3, "damage reduction")?)
                }
                ItemFile::Potions => Item::potion(
                    name,
                    price,
                    min_level,
                    field(fields, 3, "attribute increase")?,
                    AttributeSet::parse_list(fields[4])?,
                ),
                ItemFile::Spells(element) => Item::spell(
                    name,
                    price,
                    min_level,
                    field(fields, 3, "damage")?,
                    field(fields, 4, "mana cost")?,
                    element,
                ),
            };
            Ok(item.validated()?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legends_core::{Attribute, ItemCategory};

    #[test]
    fn parses_each_item_file() {
        let weapons = ItemLoader::parse(
            "Weaponry.txt",
            "Name/cost/level/damage/required hands\nSword 500 1 800 1\nBow 300 2 500 two\n",
            ItemFile::Weapons,
        );
        assert_eq!(weapons.len(), 1);
        assert_eq!(weapons[0].as_weapon().unwrap().hands_required, 1);

        let armor = ItemLoader::parse("Armory.txt", "Breastplate 350 3 600\n", ItemFile::Armor);
        assert_eq!(armor[0].as_armor().unwrap().damage_reduction, 600.0);

        let spells = ItemLoader::parse(
            "IceSpells.txt",
            "Snow_Cannon 500 2 650 250\n",
            ItemFile::Spells(SpellElement::Ice),
        );
        assert_eq!(spells[0].category(), ItemCategory::Spell);
        assert_eq!(spells[0].as_spell().unwrap().element, SpellElement::Ice);
    }

    #[test]
    fn potions_parse_attribute_lists() {
        let content = "\
Name/cost/required level/attribute increase/attribute affected
Mermaid_Tears 850 5 100 Health/Mana/Strength/Agility
Ambrosia 1000 8 150 All
Mystery 100 1 10 Luck
";
        let potions = ItemLoader::parse("Potions.txt", content, ItemFile::Potions);
        assert_eq!(potions.len(), 2);
        let tears = potions[0].as_potion().unwrap();
        assert!(tears.affected.affects(Attribute::Agility));
        assert!(!tears.affected.affects(Attribute::Dexterity));
        assert_eq!(potions[1].as_potion().unwrap().affected, AttributeSet::ALL);
    }

    #[test]
    fn negative_stats_are_skipped() {
        let content = "\
Name/cost/level/damage/mana cost
Flame_Tornado 700 4 850 300
Cheap_Trick -50 1 100 10
Backfire 100 1 -300 10
";
        let spells = ItemLoader::parse("FireSpells.txt", content, ItemFile::Spells(SpellElement::Fire));
        assert_eq!(spells.len(), 1);
        assert_eq!(spells[0].name, "Flame_Tornado");

        let armor = ItemLoader::parse("Armory.txt", "Cursed_Mail 100 1 -20
", ItemFile::Armor);
        assert!(armor.is_empty());
    }
}
