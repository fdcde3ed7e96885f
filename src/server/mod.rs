//! HTTP backend of the campus portal.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, token checks and DTO conversion
//! - **Service Layer** (`service/`) - Validation, business rules and transactions
//! - **Data Layer** (`data/`) - SeaORM queries and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models, parameter types and language selection
//! - **Error Layer** (`error/`) - Error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token guard and language extractor
//!
//! Supporting modules: `config` (environment configuration), `state` (shared
//! database pool and token keys), `startup` (tracing, database, CORS),
//! `router` (routes and OpenAPI document) and `seed` (demo data).
//!
//! # Request Flow
//!
//! 1. **Router** dispatches the request to a controller
//! 2. **Controller** verifies the bearer token, converts the DTO to params and calls a service
//! 3. **Service** validates and orchestrates repositories
//! 4. **Data** queries the database and returns domain models
//! 5. **Controller** renders the domain model in the request language

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod seed;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
