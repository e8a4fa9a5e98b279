//! Static banner configuration: item pools, rarity weights, quota limits.
//!
//! Each promotional page variant is one `BannerDesc` declared in its own
//! `banner_*.rs` file. Everything downstream (selector, tracker, storage key
//! namespace) is parametrized by the descriptor, so adding a page is a data
//! change only.

/// One drawable reward. `file` is the opaque payload reference handed to the
/// presentation surface on a win (download identifier); the remaining fields
/// are display metadata the DOM layer forwards verbatim.
#[derive(Clone, Copy, Debug)]
pub struct ItemDesc {
    pub id: &'static str,
    pub name: &'static str,
    pub rarity: &'static str,
    pub file: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub aura_color: &'static str,
}

/// Rarity label with its draw weight.
///
/// Declaration order inside a banner's `rarities` slice is the cumulative-walk
/// order used by the selector; weights need not sum to 1. A zero weight keeps
/// the label declared (items tagged with it stay in the pool) while making it
/// unreachable by the rarity roll.
#[derive(Clone, Copy, Debug)]
pub struct RarityWeight {
    pub label: &'static str,
    pub weight: f64,
}

/// Immutable banner descriptor.
pub struct BannerDesc {
    pub name: &'static str,
    pub items: &'static [ItemDesc],
    pub rarities: &'static [RarityWeight],
    /// Draws permitted per local calendar day.
    pub max_draws: u32,
    /// Local-storage namespace; every persisted key is `{prefix}_...`.
    pub storage_prefix: &'static str,
}

impl BannerDesc {
    /// Sum of all (non-negative) declared weights.
    pub fn total_weight(&self) -> f64 {
        self.rarities.iter().map(|r| r.weight.max(0.0)).sum()
    }

    /// Items tagged with `label`. Comparison is case-insensitive because the
    /// page configs historically mixed label casing.
    pub fn items_with_rarity(&self, label: &str) -> Vec<&'static ItemDesc> {
        self.items
            .iter()
            .filter(|item| item.rarity.eq_ignore_ascii_case(label))
            .collect()
    }
}

/// All declared banners; the first entry is the default page.
pub static BANNERS: &[&BannerDesc] = &[
    &super::banner_summon::SUMMON_BANNER,
    &super::banner_mods::MODS_BANNER,
];

/// Look a banner up by name, falling back to the default for unknown names so
/// a mistyped page parameter still yields a working portal.
pub fn banner_by_name(name: &str) -> &'static BannerDesc {
    BANNERS
        .iter()
        .copied()
        .find(|banner| banner.name.eq_ignore_ascii_case(name))
        .unwrap_or(BANNERS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_banner_name_falls_back_to_default() {
        let banner = banner_by_name("no-such-banner");
        assert_eq!(banner.name, BANNERS[0].name);
    }

    #[test]
    fn banner_lookup_ignores_case() {
        let banner = banner_by_name(&BANNERS[1].name.to_ascii_uppercase());
        assert_eq!(banner.name, BANNERS[1].name);
    }

    #[test]
    fn items_with_rarity_ignores_case() {
        let banner = BANNERS[0];
        let label = banner.items[0].rarity;
        let upper = banner.items_with_rarity(&label.to_ascii_uppercase());
        let exact = banner.items_with_rarity(label);
        assert_eq!(upper.len(), exact.len());
        assert!(!exact.is_empty());
    }
}
