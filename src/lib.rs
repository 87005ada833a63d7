//! # RSVP Rust Backend
//!
//! Backend for a lightweight event-scheduling service.
//!
//! This crate provides a Rust backend for coordinating event dates: users
//! create a schedule with candidate dates, participants record their
//! availability per candidate, and the service assembles the
//! user-by-candidate attendance grid that the frontend renders. The
//! backend exposes a REST API via Axum.
//!
//! ## Features
//!
//! - **Schedules**: Create and list schedules with free-text candidate dates
//! - **Availability**: Record per-user, per-candidate attendance answers
//! - **Matrix Assembly**: Build the attendance grid with the viewer's row first
//! - **Comments**: One free-text comment per user and schedule
//! - **Sessions**: Bearer-token login tied to a user id
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and composite API payloads
//! - [`models`]: Domain types (schedules, candidates, availability, comments)
//! - [`db`]: Repository pattern, in-memory persistence, and the service layer
//! - [`services`]: Matrix assembly and session tracking
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
