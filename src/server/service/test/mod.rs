use test_utils::{builder::TestBuilder, factory};

use crate::server::error::AppError;

mod directory;
