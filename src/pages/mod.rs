//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped behavior and delegates shared chrome to
//! `components`. Access control never lives here: the navigation guard has
//! already decided the destination by the time a page settles.

pub mod about;
pub mod contact_us;
pub mod home;
pub mod login;
pub mod not_found;
