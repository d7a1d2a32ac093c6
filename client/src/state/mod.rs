//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Form values and inline errors stay local to each page; only state that
//! outlives a page (toasts) or carries real bookkeeping (photo selection)
//! lives here.

pub mod photos;
pub mod toast;
