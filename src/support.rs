//! Supporting utilities used by models.
//!
//! These modules are public because they're useful on their own (for example,
//! evaluating an isentropic relation or inverting an area ratio without
//! generating a full contour), but their APIs are not stable.

pub mod constraint;
pub mod isentropic;
pub mod units;
