// SPDX-License-Identifier: MPL-2.0
//! `widh_site` is the presentation core of a small bilingual personal website.
//!
//! It provides localization with recursive `[[..]]` template substitution,
//! dark/light theming with system detection, landing-page banner rotation,
//! and user preference persistence.

#![doc(html_root_url = "https://docs.rs/widh_site/0.2.0")]

pub mod banner;
pub mod config;
pub mod error;
pub mod i18n;
pub mod theme;
