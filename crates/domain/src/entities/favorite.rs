//! Saved locations
//!
//! In-memory model of the favorites list: capped at [`FavoriteList::MAX_ENTRIES`],
//! unique by address, renames overwrite. Persisting the list is up to the
//! caller.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{FavoriteId, GpsCoordinate};

/// A saved location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    /// Unique identifier
    pub id: FavoriteId,
    /// User-chosen alias
    pub name: String,
    /// Full address as returned by geocoding
    pub address: String,
    /// Position used for forecast lookups
    pub location: GpsCoordinate,
}

/// Ordered list of saved locations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoriteList {
    favorites: Vec<Favorite>,
}

impl FavoriteList {
    /// Maximum number of saved locations
    pub const MAX_ENTRIES: usize = 6;

    /// Create an empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location
    ///
    /// # Errors
    ///
    /// Returns `FavoritesLimitReached` when the list is full and
    /// `DuplicateFavorite` when the address is already saved.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        address: impl Into<String>,
        location: GpsCoordinate,
    ) -> Result<FavoriteId, DomainError> {
        if self.favorites.len() >= Self::MAX_ENTRIES {
            return Err(DomainError::FavoritesLimitReached(Self::MAX_ENTRIES));
        }

        let address = address.into();
        if self.contains_address(&address) {
            return Err(DomainError::DuplicateFavorite(address));
        }

        let id = FavoriteId::new();
        self.favorites.push(Favorite {
            id,
            name: name.into(),
            address,
            location,
        });
        Ok(id)
    }

    /// Remove a location; unknown ids are ignored
    pub fn remove(&mut self, id: FavoriteId) {
        self.favorites.retain(|f| f.id != id);
    }

    /// Rename a location
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no favorite has this id.
    pub fn rename(&mut self, id: FavoriteId, name: impl Into<String>) -> Result<(), DomainError> {
        let favorite = self
            .favorites
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| DomainError::not_found("Favorite", id.to_string()))?;
        favorite.name = name.into();
        Ok(())
    }

    /// Check whether an address is saved
    #[must_use]
    pub fn contains_address(&self, address: &str) -> bool {
        self.favorites.iter().any(|f| f.address == address)
    }

    /// Find a saved location by address
    #[must_use]
    pub fn find_by_address(&self, address: &str) -> Option<&Favorite> {
        self.favorites.iter().find(|f| f.address == address)
    }

    /// Saved locations in insertion order
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Favorite> {
        self.favorites.iter()
    }

    /// Number of saved locations
    #[must_use]
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }
}

/// Short "district neighbourhood" form of a full address
///
/// `서울특별시 중랑구 면목동` becomes `중랑구 면목동`. The first token is the
/// province and is dropped when more tokens follow.
#[must_use]
pub fn short_address(address: &str) -> String {
    let parts: Vec<&str> = address.split(' ').collect();
    let part = |i: usize| parts.get(i).copied().filter(|s| !s.is_empty());

    let province = part(1).or_else(|| part(0)).unwrap_or_default();
    let district = part(2).or_else(|| part(1)).unwrap_or_default();

    if !district.is_empty() {
        return format!("{province} {district}");
    }
    if province.is_empty() {
        address.to_string()
    } else {
        province.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seoul() -> GpsCoordinate {
        GpsCoordinate::seoul_city_hall()
    }

    #[test]
    fn add_and_find_by_address() {
        let mut list = FavoriteList::new();
        let id = list.add("집", "서울특별시 중구 태평로1가", seoul()).unwrap();

        let found = list.find_by_address("서울특별시 중구 태평로1가").unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.name, "집");
        assert!(list.contains_address("서울특별시 중구 태평로1가"));
    }

    #[test]
    fn rejects_duplicate_address() {
        let mut list = FavoriteList::new();
        list.add("a", "same", seoul()).unwrap();
        let err = list.add("b", "same", seoul()).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateFavorite(_)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn caps_at_six_entries() {
        let mut list = FavoriteList::new();
        for i in 0..FavoriteList::MAX_ENTRIES {
            list.add(format!("place {i}"), format!("address {i}"), seoul())
                .unwrap();
        }
        let err = list.add("seventh", "address 7", seoul()).unwrap_err();
        assert!(matches!(err, DomainError::FavoritesLimitReached(6)));
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn rename_is_last_write_wins() {
        let mut list = FavoriteList::new();
        let id = list.add("old", "address", seoul()).unwrap();
        list.rename(id, "first").unwrap();
        list.rename(id, "second").unwrap();
        assert_eq!(list.iter().next().unwrap().name, "second");
    }

    #[test]
    fn rename_unknown_id_fails() {
        let mut list = FavoriteList::new();
        assert!(list.rename(FavoriteId::new(), "x").is_err());
    }

    #[test]
    fn remove_frees_a_slot() {
        let mut list = FavoriteList::new();
        let id = list.add("a", "address", seoul()).unwrap();
        list.remove(id);
        assert!(list.is_empty());
        list.remove(id);
        assert!(list.is_empty());
    }

    #[test]
    fn short_address_drops_province() {
        assert_eq!(short_address("서울특별시 중랑구 면목동"), "중랑구 면목동");
    }

    #[test]
    fn short_address_with_two_parts() {
        assert_eq!(short_address("제주특별자치도 제주시"), "제주시 제주시");
    }

    #[test]
    fn short_address_single_token() {
        assert_eq!(short_address("세종특별자치시"), "세종특별자치시");
    }

    #[test]
    fn short_address_empty() {
        assert_eq!(short_address(""), "");
    }
}
