/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Engage
//!
//! Client library for the Engage (Engagor) social-engagement REST API at
//! `https://api.engagor.com`.
//!
//! ## Features
//!
//! - Account settings: users, user roles, teams, topics, tags, social
//!   profile groups, canned responses, business hours schedules
//! - Inbox: mentions, contacts, context history, mailboxes
//! - Publisher: scheduled and published mentions
//! - Dashboards, insights facets, filter suggestions, security audit logs,
//!   crisis plans and text-analysis tools
//! - OAuth2 authorize/token URL builders (string formatting only)
//!
//! Every operation validates its required identifiers, builds the request
//! URL, attaches the access token and hands off to a [`Transport`]. The
//! response is returned as-is; this library never interprets status codes
//! and never retries.
//!
//! *Obtaining the access token is left up to the consumer of this library;
//! see [`oauth`] for the authorization URLs to start that flow.*
//!
//! ## Usage
//!
//! ```no_run
//! use engage::{Client, EngageError};
//!
//! async fn newest_mentions(access_token: &str) -> Result<(), EngageError> {
//!     // Token acquired via the OAuth2 flow, external to this library
//!     let client = Client::with_access_token(access_token)?;
//!
//!     let response = client
//!         .get_mentions_for_account("12345", Default::default())
//!         .await?;
//!     println!("{}", String::from_utf8_lossy(&response.body));
//!     Ok(())
//! }
//! ```
//!
//! A custom [`Transport`] (a different HTTP library, a test double, a
//! retrying wrapper) can be supplied through [`Client::new`].

pub mod api;
pub mod client;
pub mod errors;
pub mod oauth;
mod request;
pub mod transport;

pub use api::*;
pub use client::{API_ORIGIN, Client};
pub use errors::EngageError;
pub use transport::{Body, BoxError, HttpTransport, Request, Response, Transport};
