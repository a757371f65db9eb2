//! Web server for browser-based ratio matching.
//!
//! This module provides an interactive web interface using Axum. Users fill
//! in the two quantities and search options; each search runs on the
//! blocking thread pool so long computations never stall the server.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! ratio-matcher serve
//!
//! # Custom port and auto-open browser
//! ratio-matcher serve --port 3000 --open
//!
//! # Lower the per-search iteration ceiling for a shared deployment
//! ratio-matcher serve --address 0.0.0.0 --max-iterations 10000000
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /` - Main page with the search form
//! - `POST /api/match` - Run a search (JSON body)
//! - `GET /api/health` - Liveness and version

pub mod server;
