//=========================================================================
// Weapon
//=========================================================================
//
// Magazine model: firing spends one bullet, the reloader routine puts
// bullets back one at a time up to the limit.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== Weapon ==============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    damage: u32,
    current_ammunition: u32,
    ammunition_limit: u32,
    reloading_time: Duration,
}

impl Weapon {
    /// Creates a weapon with a full magazine.
    pub fn new(damage: u32, ammunition_limit: u32, reloading_time: Duration) -> Self {
        Self {
            damage,
            current_ammunition: ammunition_limit,
            ammunition_limit,
            reloading_time,
        }
    }

    /// Spends one bullet and returns the damage dealt.
    ///
    /// Returns 0 without side effects when the magazine is empty.
    pub fn fire(&mut self) -> u32 {
        if self.current_ammunition == 0 {
            return 0;
        }
        self.current_ammunition -= 1;
        self.damage
    }

    /// Adds up to `amount` bullets, never exceeding the limit.
    ///
    /// Returns true if the magazine changed.
    pub fn reload(&mut self, amount: u32) -> bool {
        let before = self.current_ammunition;
        self.current_ammunition = self
            .current_ammunition
            .saturating_add(amount)
            .min(self.ammunition_limit);
        self.current_ammunition != before
    }

    pub fn has_run_out_of_ammo(&self) -> bool {
        self.current_ammunition == 0
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn current_ammunition(&self) -> u32 {
        self.current_ammunition
    }

    pub fn ammunition_limit(&self) -> u32 {
        self.ammunition_limit
    }

    /// Interval of the reloader routine registered for this weapon.
    pub fn reloading_time(&self) -> Duration {
        self.reloading_time
    }
}

//=== WeaponFactory =======================================================

pub struct WeaponFactory;

impl WeaponFactory {
    const BASIC_DAMAGE: u32 = 1;
    const BASIC_AMMUNITION_LIMIT: u32 = 8;
    const BASIC_RELOADING_TIME: Duration = Duration::from_millis(1000);

    /// The only weapon every mode starts with.
    pub fn create_basic_weapon() -> Weapon {
        Weapon::new(
            Self::BASIC_DAMAGE,
            Self::BASIC_AMMUNITION_LIMIT,
            Self::BASIC_RELOADING_TIME,
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_weapon_starts_full() {
        let weapon = WeaponFactory::create_basic_weapon();
        assert_eq!(weapon.current_ammunition(), 8);
        assert_eq!(weapon.ammunition_limit(), 8);
        assert_eq!(weapon.damage(), 1);
        assert_eq!(weapon.reloading_time(), Duration::from_millis(1000));
    }

    #[test]
    fn fire_spends_bullets_until_empty() {
        let mut weapon = Weapon::new(2, 2, Duration::from_millis(10));
        assert_eq!(weapon.fire(), 2);
        assert_eq!(weapon.fire(), 2);
        assert!(weapon.has_run_out_of_ammo());
        assert_eq!(weapon.fire(), 0);
        assert_eq!(weapon.current_ammunition(), 0);
    }

    #[test]
    fn reload_caps_at_limit() {
        let mut weapon = Weapon::new(1, 3, Duration::from_millis(10));
        weapon.fire();
        assert!(weapon.reload(5));
        assert_eq!(weapon.current_ammunition(), 3);
        assert!(!weapon.reload(1));
    }
}
