//! # Favorite Coordinator
//!
//! Local favorite flag for the food on screen. The flag starts `Unknown`,
//! is resolved against the remote favorites list once the food is known,
//! and then flips optimistically on every toggle. Each toggle yields the
//! remote write that has to follow it; the coordinator also remembers the
//! last status the remote confirmed, which is where a rollback lands.

use crate::clients::CatalogError;
use crate::config::ToggleFailurePolicy;
use crate::model::{Food, FoodId};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FavoriteStatus {
    #[default]
    Unknown,
    NotFavorite,
    Favorite,
}

impl FavoriteStatus {
    pub fn is_favorite(self) -> bool {
        matches!(self, FavoriteStatus::Favorite)
    }

    fn flipped(self) -> Self {
        match self {
            FavoriteStatus::Favorite => FavoriteStatus::NotFavorite,
            FavoriteStatus::NotFavorite => FavoriteStatus::Favorite,
            FavoriteStatus::Unknown => FavoriteStatus::Unknown,
        }
    }
}

/// Remote write matching a local flip.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteWrite {
    Add(Food),
    Remove(FoodId),
}

impl FavoriteWrite {
    /// The status the remote holds once this write lands.
    pub fn target(&self) -> FavoriteStatus {
        match self {
            FavoriteWrite::Add(_) => FavoriteStatus::Favorite,
            FavoriteWrite::Remove(_) => FavoriteStatus::NotFavorite,
        }
    }

    /// Whether `error` means the remote was already at
    /// [`target`](Self::target): adding an existing favorite, or removing
    /// one that is gone.
    pub fn already_applied(&self, error: &CatalogError) -> bool {
        matches!(
            (self, error),
            (FavoriteWrite::Add(_), CatalogError::Conflict(_))
                | (FavoriteWrite::Remove(_), CatalogError::NotFound(_))
        )
    }
}

/// A flip that has been applied locally and still awaits its remote write.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingToggle {
    pub seq: u64,
    pub write: FavoriteWrite,
}

/// Local flag plus the last status the remote confirmed.
#[derive(Debug, Clone, Default)]
pub struct FavoriteCoordinator {
    status: FavoriteStatus,
    confirmed: FavoriteStatus,
    latest: u64,
}

impl FavoriteCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> FavoriteStatus {
        self.status
    }

    /// Last status known to be held by the remote.
    pub fn confirmed(&self) -> FavoriteStatus {
        self.confirmed
    }

    /// Back to `Unknown`. Toggles issued before the reset can no longer
    /// roll the flag back.
    pub fn reset(&mut self) {
        self.status = FavoriteStatus::Unknown;
        self.confirmed = FavoriteStatus::Unknown;
        self.latest += 1;
    }

    /// Membership test of `food_id` in the fetched favorites.
    pub fn resolve(&mut self, food_id: FoodId, favorites: &[Food]) -> FavoriteStatus {
        self.status = if favorites.iter().any(|f| f.id == food_id) {
            FavoriteStatus::Favorite
        } else {
            FavoriteStatus::NotFavorite
        };
        self.confirmed = self.status;
        self.status
    }

    /// Flips the flag and returns the write to send.
    ///
    /// Returns `None` while the status is `Unknown`.
    pub fn toggle(&mut self, food: &Food) -> Option<PendingToggle> {
        let write = match self.status {
            FavoriteStatus::Unknown => return None,
            FavoriteStatus::Favorite => FavoriteWrite::Remove(food.id),
            FavoriteStatus::NotFavorite => FavoriteWrite::Add(food.clone()),
        };
        self.status = self.status.flipped();
        self.latest += 1;
        Some(PendingToggle {
            seq: self.latest,
            write,
        })
    }

    /// Records that the remote now holds `target`.
    ///
    /// Writes land in toggle order, so the latest one to succeed is what
    /// the remote holds.
    pub fn write_succeeded(&mut self, target: FavoriteStatus) {
        self.confirmed = target;
    }

    /// Handles a failed remote write. Under [`ToggleFailurePolicy::Rollback`]
    /// the flag returns to the last confirmed status, unless a later toggle
    /// or reset already superseded `seq`. Returns whether the flag changed.
    pub fn write_failed(&mut self, seq: u64, policy: ToggleFailurePolicy) -> bool {
        if policy != ToggleFailurePolicy::Rollback
            || seq != self.latest
            || self.status == self.confirmed
        {
            return false;
        }
        self.status = self.confirmed;
        self.latest += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn food(id: u32) -> Food {
        Food {
            id: FoodId(id),
            name: format!("Food {id}"),
            description: String::new(),
            unit_price: dec!(10),
            image_url: String::new(),
            extras: vec![],
        }
    }

    #[test]
    fn test_resolve_is_membership() {
        let mut coordinator = FavoriteCoordinator::new();
        assert_eq!(coordinator.status(), FavoriteStatus::Unknown);

        let favorites = vec![food(3), food(7)];
        assert_eq!(
            coordinator.resolve(FoodId(7), &favorites),
            FavoriteStatus::Favorite
        );
        assert_eq!(
            coordinator.resolve(FoodId(1), &favorites),
            FavoriteStatus::NotFavorite
        );
        assert_eq!(
            coordinator.resolve(FoodId(1), &[]),
            FavoriteStatus::NotFavorite
        );
    }

    #[test]
    fn test_toggle_round_trip() {
        let target = food(1);
        for initial in [vec![target.clone()], vec![]] {
            let mut coordinator = FavoriteCoordinator::new();
            let start = coordinator.resolve(target.id, &initial);

            coordinator.toggle(&target).unwrap();
            assert_ne!(coordinator.status(), start);
            coordinator.toggle(&target).unwrap();
            assert_eq!(coordinator.status(), start);
        }
    }

    #[test]
    fn test_toggle_emits_matching_write() {
        let target = food(1);
        let mut coordinator = FavoriteCoordinator::new();
        coordinator.resolve(target.id, &[]);

        let add = coordinator.toggle(&target).unwrap();
        assert_eq!(add.write, FavoriteWrite::Add(target.clone()));
        let remove = coordinator.toggle(&target).unwrap();
        assert_eq!(remove.write, FavoriteWrite::Remove(FoodId(1)));
        assert!(remove.seq > add.seq);
    }

    #[test]
    fn test_toggle_rejected_while_unknown() {
        let mut coordinator = FavoriteCoordinator::new();
        assert!(coordinator.toggle(&food(1)).is_none());
        assert_eq!(coordinator.status(), FavoriteStatus::Unknown);
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let target = food(1);
        let mut coordinator = FavoriteCoordinator::new();
        coordinator.resolve(target.id, &[]);

        let pending = coordinator.toggle(&target).unwrap();
        assert!(coordinator.write_failed(pending.seq, ToggleFailurePolicy::Rollback));
        assert_eq!(coordinator.status(), FavoriteStatus::NotFavorite);
    }

    #[test]
    fn test_failed_write_kept_optimistic() {
        let target = food(1);
        let mut coordinator = FavoriteCoordinator::new();
        coordinator.resolve(target.id, &[]);

        let pending = coordinator.toggle(&target).unwrap();
        assert!(!coordinator.write_failed(pending.seq, ToggleFailurePolicy::KeepOptimistic));
        assert_eq!(coordinator.status(), FavoriteStatus::Favorite);
    }

    #[test]
    fn test_superseded_failure_does_not_roll_back() {
        let target = food(1);
        let mut coordinator = FavoriteCoordinator::new();
        coordinator.resolve(target.id, &[target.clone()]);

        let first = coordinator.toggle(&target).unwrap();
        coordinator.toggle(&target).unwrap();
        assert!(!coordinator.write_failed(first.seq, ToggleFailurePolicy::Rollback));
        assert_eq!(coordinator.status(), FavoriteStatus::Favorite);

        let stale = coordinator.toggle(&target).unwrap();
        coordinator.reset();
        assert!(!coordinator.write_failed(stale.seq, ToggleFailurePolicy::Rollback));
        assert_eq!(coordinator.status(), FavoriteStatus::Unknown);
    }

    #[test]
    fn test_rollback_lands_on_last_confirmed_write() {
        let target = food(1);
        let mut coordinator = FavoriteCoordinator::new();
        coordinator.resolve(target.id, &[]);

        let add = coordinator.toggle(&target).unwrap();
        let remove = coordinator.toggle(&target).unwrap();
        coordinator.write_succeeded(add.write.target());
        assert_eq!(coordinator.confirmed(), FavoriteStatus::Favorite);

        assert!(coordinator.write_failed(remove.seq, ToggleFailurePolicy::Rollback));
        assert_eq!(coordinator.status(), FavoriteStatus::Favorite);
    }

    #[test]
    fn test_failed_add_then_missing_remove_stays_not_favorite() {
        let target = food(1);
        let mut coordinator = FavoriteCoordinator::new();
        coordinator.resolve(target.id, &[]);

        let add = coordinator.toggle(&target).unwrap();
        let remove = coordinator.toggle(&target).unwrap();

        // The add never landed, so the remove finds nothing to delete.
        assert!(!coordinator.write_failed(add.seq, ToggleFailurePolicy::Rollback));
        let missing = CatalogError::NotFound("food_1".to_string());
        assert!(remove.write.already_applied(&missing));
        coordinator.write_succeeded(remove.write.target());

        assert_eq!(coordinator.status(), FavoriteStatus::NotFavorite);
        assert_eq!(coordinator.confirmed(), FavoriteStatus::NotFavorite);
    }

    #[test]
    fn test_already_applied_errors() {
        let add = FavoriteWrite::Add(food(1));
        let remove = FavoriteWrite::Remove(FoodId(1));
        let conflict = CatalogError::Conflict("food_1".to_string());
        let missing = CatalogError::NotFound("food_1".to_string());
        let network = CatalogError::Network("Actor closed".to_string());

        assert!(add.already_applied(&conflict));
        assert!(!add.already_applied(&missing));
        assert!(!add.already_applied(&network));
        assert!(remove.already_applied(&missing));
        assert!(!remove.already_applied(&conflict));
    }
}
