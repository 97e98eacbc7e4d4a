//! # Billboard Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Full-service scenarios
//!     ├── lifecycle.rs  # Claim/update lifecycle and lifetime caps
//!     └── messaging.rs  # Envelope handling and notifications
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p billboard-tests
//!
//! # By category
//! cargo test -p billboard-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
