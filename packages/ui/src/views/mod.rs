mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod users_list;
pub use users_list::UsersList;
