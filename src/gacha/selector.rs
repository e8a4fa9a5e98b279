//! Weighted reward selection.

use rand::Rng;

use super::banner::{BannerDesc, ItemDesc};

/// Stateless picker over a banner's item pool and rarity table.
///
/// Holds only static configuration; every draw is a pure function of that
/// configuration and the injected random source, so seeded tests are
/// deterministic while production feeds it an entropy-seeded generator.
pub struct RewardSelector {
    banner: &'static BannerDesc,
    total_weight: f64,
}

impl RewardSelector {
    pub fn new(banner: &'static BannerDesc) -> Self {
        debug_assert!(
            !banner.items.is_empty(),
            "banner '{}' has no items",
            banner.name
        );
        debug_assert!(
            banner.total_weight() > 0.0,
            "banner '{}' has no positive rarity weight",
            banner.name
        );
        Self {
            banner,
            total_weight: banner.total_weight(),
        }
    }

    /// Draw one item. Never fails: a rarity with no tagged items falls back
    /// to a uniform pick over the whole pool, and a degenerate all-zero
    /// weight table (excluded by the config invariant, tolerated anyway) does
    /// the same.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> &'static ItemDesc {
        if self.total_weight <= 0.0 {
            return self.uniform(rng);
        }
        let roll = rng.gen_range(0.0..self.total_weight);
        let rarity = self.rarity_for_roll(roll);
        self.item_for_rarity(rarity, rng)
    }

    /// Cumulative interval walk in declaration order. A roll exactly on an
    /// interval's upper bound belongs to that (lower) interval; zero-weight
    /// entries are skipped so they stay unreachable even for a roll of 0.
    fn rarity_for_roll(&self, roll: f64) -> &'static str {
        let mut cumulative = 0.0;
        let mut last = self.banner.rarities[0].label;
        for rarity in self.banner.rarities {
            if rarity.weight <= 0.0 {
                continue;
            }
            cumulative += rarity.weight;
            last = rarity.label;
            if roll <= cumulative {
                return rarity.label;
            }
        }
        // Float drift can leave `roll` a hair above the final bound.
        last
    }

    fn item_for_rarity<R: Rng>(&self, rarity: &str, rng: &mut R) -> &'static ItemDesc {
        let matches = self.banner.items_with_rarity(rarity);
        if matches.is_empty() {
            return self.uniform(rng);
        }
        matches[rng.gen_range(0..matches.len())]
    }

    fn uniform<R: Rng>(&self, rng: &mut R) -> &'static ItemDesc {
        &self.banner.items[rng.gen_range(0..self.banner.items.len())]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::super::SUMMON_BANNER;
    use super::super::banner::{BannerDesc, ItemDesc, RarityWeight};
    use super::*;

    static GHOST_ITEMS: [ItemDesc; 2] = [
        ItemDesc {
            id: "a",
            name: "A",
            rarity: "Common",
            file: "a",
            image: "",
            description: "",
            aura_color: "",
        },
        ItemDesc {
            id: "b",
            name: "B",
            rarity: "Common",
            file: "b",
            image: "",
            description: "",
            aura_color: "",
        },
    ];

    // "Ghost" carries all the weight but tags no items, forcing the
    // whole-pool fallback on every draw.
    static GHOST_RARITIES: [RarityWeight; 2] = [
        RarityWeight {
            label: "Ghost",
            weight: 1.0,
        },
        RarityWeight {
            label: "Common",
            weight: 0.0,
        },
    ];

    static GHOST_BANNER: BannerDesc = BannerDesc {
        name: "test-ghost",
        items: &GHOST_ITEMS,
        rarities: &GHOST_RARITIES,
        max_draws: 1,
        storage_prefix: "test_ghost",
    };

    #[test]
    fn boundary_roll_belongs_to_the_lower_interval() {
        let selector = RewardSelector::new(&SUMMON_BANNER);
        let total = SUMMON_BANNER.total_weight();
        assert_eq!(selector.rarity_for_roll(0.0), "Mythic");
        assert_eq!(selector.rarity_for_roll(0.01 * total), "Mythic");
        assert_eq!(selector.rarity_for_roll(0.02 * total), "Mythic");
        assert_eq!(selector.rarity_for_roll(0.021 * total), "Legendary");
        assert_eq!(selector.rarity_for_roll(0.5 * total), "Common");
        assert_eq!(selector.rarity_for_roll(0.99 * total), "Common");
    }

    #[test]
    fn zero_weight_rarity_is_unreachable() {
        let selector = RewardSelector::new(&SUMMON_BANNER);
        let total = SUMMON_BANNER.total_weight();
        for step in 0..=1000 {
            let roll = total * f64::from(step) / 1000.0;
            assert_ne!(selector.rarity_for_roll(roll), "Supreme");
        }
    }

    #[test]
    fn empty_rarity_falls_back_to_the_whole_pool() {
        let selector = RewardSelector::new(&GHOST_BANNER);
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..100 {
            let item = selector.draw(&mut rng);
            assert!(item.id == "a" || item.id == "b");
        }
    }

    #[test]
    fn rarity_match_is_case_insensitive() {
        let selector = RewardSelector::new(&SUMMON_BANNER);
        let mut rng = SmallRng::seed_from_u64(2);
        let item = selector.item_for_rarity("mythic", &mut rng);
        assert_eq!(item.id, "Sasuke");
    }
}
