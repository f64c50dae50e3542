// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod city;
pub mod user;

pub use city::{city_key, City};
pub use user::User;
