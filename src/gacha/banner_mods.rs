// "Mod Vault" banner definition: downloadable mod pool with the classic
// UR / SSR / SR / R weight split.
use super::banner::{BannerDesc, ItemDesc, RarityWeight};

pub static MOD_ITEMS: [ItemDesc; 9] = [
    ItemDesc {
        id: "m01",
        name: "Mod Alpha",
        rarity: "SSR",
        file: "ModAlpha",
        image: "assets/mod-alpha.jpg",
        description: "Full texture overhaul",
        aura_color: "#ffd86b",
    },
    ItemDesc {
        id: "m02",
        name: "Mod Celestia",
        rarity: "UR",
        file: "ModCelestia",
        image: "assets/mod-ur.jpg",
        description: "Animated celestial skin pack",
        aura_color: "#caa7ff",
    },
    ItemDesc {
        id: "m03",
        name: "Mod Beta",
        rarity: "R",
        file: "ModBeta",
        image: "assets/mod-beta.jpg",
        description: "HUD recolor",
        aura_color: "#34d399",
    },
    ItemDesc {
        id: "m04",
        name: "Mod Gamma",
        rarity: "SR",
        file: "ModGamma",
        image: "assets/mod-gamma.jpg",
        description: "Weapon trail effects",
        aura_color: "#60a5fa",
    },
    ItemDesc {
        id: "m05",
        name: "Mod Delta",
        rarity: "R",
        file: "ModDelta",
        image: "assets/mod-delta.jpg",
        description: "Ambient sound pack",
        aura_color: "#34d399",
    },
    ItemDesc {
        id: "m06",
        name: "Mod Epsilon",
        rarity: "SR",
        file: "ModEpsilon",
        image: "assets/mod-epsilon.jpg",
        description: "Particle density tweaks",
        aura_color: "#60a5fa",
    },
    ItemDesc {
        id: "m07",
        name: "Mod Zeta",
        rarity: "R",
        file: "ModZeta",
        image: "assets/mod-zeta.jpg",
        description: "Menu theme swap",
        aura_color: "#34d399",
    },
    ItemDesc {
        id: "m08",
        name: "Mod Theta",
        rarity: "SSR",
        file: "ModTheta",
        image: "assets/mod-theta.jpg",
        description: "Boss arena rework",
        aura_color: "#ffd86b",
    },
    ItemDesc {
        id: "m09",
        name: "Mod Kappa",
        rarity: "R",
        file: "ModKappa",
        image: "assets/mod-kappa.jpg",
        description: "Loading screen art",
        aura_color: "#34d399",
    },
];

pub static MOD_RARITIES: [RarityWeight; 4] = [
    RarityWeight { label: "UR", weight: 1.0 },
    RarityWeight { label: "SSR", weight: 8.0 },
    RarityWeight { label: "SR", weight: 20.0 },
    RarityWeight { label: "R", weight: 71.0 },
];

pub static MODS_BANNER: BannerDesc = BannerDesc {
    name: "Mod Vault",
    items: &MOD_ITEMS,
    rarities: &MOD_RARITIES,
    max_draws: 5,
    storage_prefix: "vault",
};
