// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Cached weather record for a city.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Weather snapshot cached in the `cities` collection.
///
/// Field names are camelCase on the wire and in the store, matching what the
/// frontend reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct City {
    /// City name as first requested by a client
    pub city_name: String,
    /// Condition summary (e.g. "Clouds")
    pub main: String,
    /// Condition detail (e.g. "broken clouds")
    pub description: String,
    /// Minimum temperature, degrees Celsius
    pub temp_min: f64,
    /// Maximum temperature, degrees Celsius
    pub temp_max: f64,
}

impl City {
    /// Store key for this record.
    pub fn key(&self) -> String {
        city_key(&self.city_name)
    }
}

/// Case-insensitive store key for a city name.
///
/// Also used as the Firestore document ID, so it is URL-encoded to keep
/// characters like `/` out of the document path.
pub fn city_key(city_name: &str) -> String {
    urlencoding::encode(&city_name.trim().to_lowercase()).into_owned()
}
