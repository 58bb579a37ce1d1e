//! # Directory crate — state behind the user directory view
//!
//! Framework-agnostic state and transitions for listing, deleting and editing
//! users. Nothing here performs I/O: the view issues a call through
//! [`api::UsersApi`] and hands the result to a `finish_*` method, which applies
//! it (or logs the failure and leaves state untouched).
//!
//! | Type | Owned by | Purpose |
//! |------|----------|---------|
//! | [`UserCollection`] | shared app state | Ordered users with unique ids |
//! | [`EditorState`] / [`EditDraft`] | the view | The edit modal and its draft |
//! | [`NoticeBoard`] / [`Notice`] | the view | The transient success message |
//! | [`InFlight`] | the view | Writes awaiting a response, per user id |
//! | [`DirectoryView`] | the view | All of the above, plus the load/delete/edit transitions |

pub mod collection;
pub mod draft;
pub mod in_flight;
pub mod notice;
pub mod view;

pub use collection::UserCollection;
pub use draft::{DraftField, EditDraft, EditorState};
pub use in_flight::InFlight;
pub use notice::{Notice, NoticeBoard};
pub use view::DirectoryView;
