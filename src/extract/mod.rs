//! Contact extraction from page text
//!
//! Both extractors are pure functions from a text blob to a set of strings.
//! They perform no network validation; callers merge the sets into the
//! crawl-wide accumulators.

mod email;
mod phone;

pub use email::extract_emails;
pub use phone::{extract_phones, is_valid_phone, normalize_phone};
