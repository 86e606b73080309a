//! Client-side state that is not part of the wall model.
//!
//! DESIGN
//! ======
//! `wall::Wall` is the domain model and lives in its own signal. The modules
//! here hold presentation concerns only: navbar visibility, drag bookkeeping,
//! open menus, and the notice queue.

pub mod notices;
pub mod ui;
