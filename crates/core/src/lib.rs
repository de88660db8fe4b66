//! Core library for matchday
//!
//! This crate implements the **Functional Core** of the matchday application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The matchday project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`matchday_core`** (this crate): Pure transformation functions with zero I/O
//! - **`matchday`**: HTTP calls to football-data.org, orchestration, the MCP server
//!   and the CLI (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no clock reads, no global state
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`models`]: Typed football-data.org v4 payloads
//! - [`resolve`]: Team name resolution against a roster
//! - [`results`]: Win/draw/loss classification and form aggregation
//! - [`report`]: Plain-text report formatters, one per tool
//! - [`outcome`]: The tagged result every operation returns
//! - [`validate`]: Input validation, limit clamping and API limits
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use matchday_core::report::format_team_results;
//! use matchday_core::resolve::find_team_in_list;
//!
//! let team = find_team_in_list(&roster.teams, "arsenal").unwrap();
//! let outcome = format_team_results("arsenal", team.id, &matches.matches);
//!
//! println!("{outcome}");
//! ```

pub mod models;
pub mod outcome;
pub mod report;
pub mod resolve;
pub mod results;
pub mod validate;

pub use outcome::Outcome;
