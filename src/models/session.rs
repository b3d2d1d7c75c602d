// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-request session context.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Identity of the caller, decoded from the session token on every request
/// and handed to handlers as a request extension.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Session {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub user_id: u64,
    pub name: Option<String>,
    pub profile_image: Option<String>,
}
