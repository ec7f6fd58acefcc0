//! Scope decisions for reconnaissance targets.
//!
//! Everything in this crate is a pure computation over in-memory values.
//! Reading scope files and persisting results is left to the caller, and
//! anything worth reporting is handed to an injected [`events::EventSink`].
//!
//! * [`matcher`]: prefix containment between two scope expressions.
//! * [`classifier`]: in/out-of-scope verdicts for resolved hostnames.
//! * [`enumerate`]: expansion of prefixes into individual addresses.
//! * [`filter`]: validation of a priori known addresses.

pub mod classifier;
pub mod enumerate;
pub mod events;
pub mod filter;
pub mod matcher;
