//! # Portfolio Core
//!
//! Content model and the two logic units behind the portfolio site:
//! the showcase category filter and the contact form validator.
//!
//! ## Architecture
//!
//! - `content/` - static datasets: project records, profile, startup loading
//! - `showcase` - category selection and the featured/other partition
//! - `contact` - form validation and the simulated delivery step

pub mod contact;
pub mod content;
pub mod showcase;
