// "Shinobi Summon" banner definition: character pool and rarity rates for the
// main summon page.
use super::banner::{BannerDesc, ItemDesc, RarityWeight};

pub static SUMMON_CHARACTERS: [ItemDesc; 6] = [
    ItemDesc {
        id: "Sasuke",
        name: "Sasuke Uchiha",
        rarity: "Mythic",
        file: "SasukeRinnegan",
        image: "/assets/panels/panel1.png",
        description: "The Last Uchiha - Rinnegan User",
        aura_color: "#ffd700",
    },
    ItemDesc {
        id: "Obito",
        name: "Obito Uchiha",
        rarity: "Legendary",
        file: "ObitoUnmasked",
        image: "/assets/panels/panel2.png",
        description: "Masked Man - Kamui Master",
        aura_color: "#9b7bff",
    },
    ItemDesc {
        id: "Madara",
        name: "Madara Uchiha",
        rarity: "Supreme",
        file: "Madara",
        image: "/assets/panels/panel3.png",
        description: "Ghost of Uchiha - Susanoo Warrior",
        aura_color: "#39d2ff",
    },
    ItemDesc {
        id: "Naruto",
        name: "Naruto Uzumaki",
        rarity: "Common",
        file: "Naruto",
        image: "/assets/panels/panel4.png",
        description: "Nine-Tails Jinchuriki - Sage Mode",
        aura_color: "#94a6bf",
    },
    ItemDesc {
        id: "SasukeHebi",
        name: "Sasuke Hebi",
        rarity: "Elite",
        file: "SasukeHebi",
        image: "/assets/panels/panel5.png",
        description: "Curse Mark User - Chidori Master",
        aura_color: "#39d2ff",
    },
    ItemDesc {
        id: "BorutoUzumaki",
        name: "Boruto Uzumaki",
        rarity: "Legendary",
        file: "BorutoUzumaki",
        image: "/assets/panels/panel6.png",
        description: "Next Generation - Karma User",
        aura_color: "#9b7bff",
    },
];

// Supreme stays declared at weight 0: it is retired from the droppable
// rotation while Madara remains in the showcase pool (reachable only through
// the empty-category fallback, which never applies while Supreme has an item).
pub static SUMMON_RARITIES: [RarityWeight; 5] = [
    RarityWeight { label: "Mythic", weight: 0.02 },
    RarityWeight { label: "Legendary", weight: 0.08 },
    RarityWeight { label: "Elite", weight: 0.2 },
    RarityWeight { label: "Common", weight: 0.7 },
    RarityWeight { label: "Supreme", weight: 0.0 },
];

pub static SUMMON_BANNER: BannerDesc = BannerDesc {
    name: "Shinobi Summon",
    items: &SUMMON_CHARACTERS,
    rarities: &SUMMON_RARITIES,
    max_draws: 5,
    storage_prefix: "gacha",
};
