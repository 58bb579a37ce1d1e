//! This crate contains all shared UI for the workspace.

pub mod views;

mod app_state;
pub use app_state::{use_api_config, use_app_state, use_users_api, AppState, AppStateProvider};

mod notice_timer;
pub use notice_timer::{expire_after, use_notice_timer, NoticeTimer};

mod notice_banner;
pub use notice_banner::NoticeBanner;

mod users_table;
pub use users_table::UsersTable;

mod edit_user_modal;
pub use edit_user_modal::EditUserModal;
