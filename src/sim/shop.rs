//! Upgrade shop
//!
//! Items carry an effect tag instead of a callback. The tick dispatches the
//! tag against whatever ball the state owns at purchase time, so an item can
//! never buff a ball that has already been replaced.

use serde::{Deserialize, Serialize};

use super::state::Ball;

/// Number of digit keys (`1`..=`9`) available for buying
pub const MAX_SHOP_SLOTS: usize = 9;

/// Speed boost multiplier (both axes)
pub const SPEED_BOOST_FACTOR: f32 = 1.5;
/// Jump boost multiplier (vertical axis only)
pub const JUMP_BOOST_FACTOR: f32 = 1.2;

/// What an item does to the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    SpeedBoost,
    JumpBoost,
}

impl ItemEffect {
    /// Apply to a ball. Repeated applications stack multiplicatively.
    pub fn apply(self, ball: &mut Ball) {
        match self {
            ItemEffect::SpeedBoost => ball.vel *= SPEED_BOOST_FACTOR,
            ItemEffect::JumpBoost => ball.vel.y *= JUMP_BOOST_FACTOR,
        }
    }
}

/// A shop item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub cost: u64,
    pub effect: ItemEffect,
}

impl Item {
    pub fn new(name: impl Into<String>, cost: u64, effect: ItemEffect) -> Self {
        Self {
            name: name.into(),
            cost,
            effect,
        }
    }

    pub fn affordable(&self, balance: u64) -> bool {
        balance >= self.cost
    }
}

/// Run one tick of purchases.
///
/// Items are checked in catalog order against the running balance; every
/// affordable item whose key is held is bought once. Returns the number of
/// purchases made.
pub fn purchase_pass(
    balance: &mut u64,
    items: &[Item],
    buy_held: impl Fn(usize) -> bool,
    ball: &mut Ball,
) -> u32 {
    let mut bought = 0;

    for (slot, item) in items.iter().enumerate().take(MAX_SHOP_SLOTS) {
        if item.affordable(*balance) && buy_held(slot) {
            *balance -= item.cost;
            item.effect.apply(ball);
            bought += 1;
            log::debug!("Bought {} for {} (balance {})", item.name, item.cost, balance);
        }
    }

    bought
}
