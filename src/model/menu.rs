//! The restaurant's menu, the payload customers put on their orders.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuItem {
    BensChilli,
    BensHalfSmoke,
    BensHotDog,
    BensChilliCheeseFries,
    BensShake,
    BensHotCakes,
    BensCake,
    BensHamburger,
    BensVeggieBurger,
    BensOnionRings,
}

impl MenuItem {
    /// Every item on the menu, in menu order.
    pub const ALL: [MenuItem; 10] = [
        MenuItem::BensChilli,
        MenuItem::BensHalfSmoke,
        MenuItem::BensHotDog,
        MenuItem::BensChilliCheeseFries,
        MenuItem::BensShake,
        MenuItem::BensHotCakes,
        MenuItem::BensCake,
        MenuItem::BensHamburger,
        MenuItem::BensVeggieBurger,
        MenuItem::BensOnionRings,
    ];

    /// Picks a menu item uniformly at random.
    pub fn pick_random() -> Self {
        Self::ALL[fastrand::usize(..Self::ALL.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            MenuItem::BensChilli => "BensChilli",
            MenuItem::BensHalfSmoke => "BensHalfSmoke",
            MenuItem::BensHotDog => "BensHotDog",
            MenuItem::BensChilliCheeseFries => "BensChilliCheeseFries",
            MenuItem::BensShake => "BensShake",
            MenuItem::BensHotCakes => "BensHotCakes",
            MenuItem::BensCake => "BensCake",
            MenuItem::BensHamburger => "BensHamburger",
            MenuItem::BensVeggieBurger => "BensVeggieBurger",
            MenuItem::BensOnionRings => "BensOnionRings",
        }
    }
}

impl Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
