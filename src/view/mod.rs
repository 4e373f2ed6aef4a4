mod expense_view;
mod view_actor;

pub use expense_view::{DraftInput, ExpenseView, FilterInput};
pub use view_actor::ViewActor;
