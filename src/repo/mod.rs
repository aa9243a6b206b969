//! Data access, one module per table. Repositories take the pool and the
//! acting user id explicitly; nothing here reads ambient session state.
//!
//! Period repositories share one contract: normalize the requested date to
//! the granularity's canonical bucket start, then point-read or upsert the
//! single row for (user, bucket). The UNIQUE (user_id, date) index behind
//! each ON CONFLICT makes a second row for the same bucket unrepresentable.

pub mod daily;
pub mod monthly;
pub mod profile;
pub mod quarterly;
pub mod sheets;
pub mod weekly;
