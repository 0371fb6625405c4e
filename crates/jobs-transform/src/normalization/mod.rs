//! Record normalization.
//!
//! - **numeric**: salary coercion
//! - **flags**: strict boolean coercion
//! - **list**: bracketed list-string parsing
//! - **record**: whole-record normalization and data-quality report
//!
//! Normalization never fails. Unusable field values degrade to documented
//! defaults (absent, false, empty list, sentinel string).

pub mod flags;
pub mod list;
pub mod numeric;
pub mod record;

pub use flags::{is_canonical_flag, parse_flag};
pub use list::parse_list;
pub use numeric::parse_salary;
pub use record::{NormalizationReport, NormalizedSet, normalize, normalize_records};
