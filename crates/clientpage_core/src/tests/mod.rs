//! Controller tests
//!
//! Tests are organized by topic:
//! - `fakes` - Recording port implementations shared by the tests
//! - `lifecycle` - Feed ordering, loading and access revocation
//! - `edit_mode` - Edit-mode policy, toggling and its permission guard
//! - `submit` - Record updates, notifications and classification refresh


mod edit_mode;
