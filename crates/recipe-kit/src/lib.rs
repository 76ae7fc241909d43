//! Shared recipe data model, validation rules and JSON wire contract.
//!
//! Clients and servers of the recipe API agree on:
//!
//! - the [`domain`] records (recipes and users) and their identifiers;
//! - the request and response shapes in [`dto`];
//! - the [`validation`] rules applied to request bodies, with user-facing
//!   messages;
//! - the JSON encoding in [`codec`], including ISO-8601 timestamps.
//!
//! [`boundary`] chains decoding and validation for request handlers,
//! [`routes`] names the HTTP endpoints, and [`example_data`] supplies sample
//! recipes. [`text`] and [`time_format`] hold display helpers.

pub mod boundary;
pub mod cli;
pub mod codec;
pub mod domain;
pub mod dto;
pub mod example_data;
pub mod routes;
pub mod text;
pub mod time_format;
pub mod validation;

#[cfg(test)]
mod test_support;
