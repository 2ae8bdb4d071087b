pub mod add;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod list;
pub mod search;
pub mod show;
pub mod tags;

pub use add::handle_add;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use filter::handle_filter;
pub use list::handle_list;
pub use search::handle_search;
pub use show::handle_show;
pub use tags::handle_tags;
