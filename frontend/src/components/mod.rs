//! UI Components for the ShareXpress landing page.
//!
//! # Layout Components
//! - [`Navbar`] - Site header with logo, navigation and actions
//! - [`Hero`] - Promotional headline and call to action
//!
//! # Building Blocks
//! - [`Button`] - Styled call-to-action button

mod button;
mod hero;
mod navbar;

pub use button::*;
pub use hero::*;
pub use navbar::*;
