//! Onboard Test Utils
//!
//! Shared helpers for repository and service tests. Tests build an in-memory
//! SQLite database containing only the tables they need, then populate it with
//! factories.
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn finds_user() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_user_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = test_utils::factory::create_user(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
