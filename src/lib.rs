// SPDX-License-Identifier: MPL-2.0
//! `krishi_i18n` resolves the KrishiAI advisory client's display text in
//! English, Marathi and Hindi.
//!
//! It provides the Fluent-backed UI copy table, the per-session language
//! context, the crop calendar whose records carry inline translations, and
//! user preference management.

pub mod config;
pub mod crops;
pub mod error;
pub mod i18n;
