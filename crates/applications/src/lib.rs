//! Job applications domain module.
//!
//! Career-page submissions reviewed in the admin dashboard. Deterministic
//! domain logic only; persistence lives in the store crate.

pub mod application;

pub use application::{Application, ApplicationStatus, NewApplication};
