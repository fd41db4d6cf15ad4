//! Dish Identity
//!
//! Explicit identity variants for dishes before and after persistence, plus
//! the temporary id generator used as a stable list key for unsaved dishes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned dish id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(pub u32);

/// Server-assigned menu id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(pub u32);

/// Client-generated id for a dish that has no server id yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TempId(pub i64);

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TempId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tmp-{}", self.0)
    }
}

/// Where a dish stands with respect to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum DishIdentity {
    /// Known only by its name
    #[default]
    Draft,
    /// Unsaved, with a temporary list key
    Local(TempId),
    /// Persisted on the server
    Saved(DishId),
}

/// Lookup key for reconciliation operations
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DishKey {
    /// Natural key, valid only among unsaved dishes
    Name(String),
    Local(TempId),
    Saved(DishId),
}

impl DishKey {
    pub fn name(name: impl Into<String>) -> Self {
        DishKey::Name(name.into())
    }
}

impl fmt::Display for DishKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DishKey::Name(name) => write!(f, "name:{}", name),
            DishKey::Local(temp) => write!(f, "{}", temp),
            DishKey::Saved(id) => write!(f, "dish:{}", id),
        }
    }
}

/// Source of non-decreasing millisecond readings
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Issues strictly increasing temporary ids seeded from a clock.
///
/// Two dishes created within the same millisecond still get distinct ids:
/// a reading that does not advance past the last id is bumped by one.
#[derive(Debug)]
pub struct TempIdGenerator<C: Clock = SystemClock> {
    clock: C,
    last: Option<i64>,
}

impl TempIdGenerator<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TempIdGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TempIdGenerator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock, last: None }
    }

    pub fn next_id(&mut self) -> TempId {
        let now = self.clock.now_millis();
        let id = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(id);
        TempId(id)
    }
}
