pub mod diagram;
pub mod filter;
pub mod session;
pub mod view;

pub use diagram::filter_by_state;
pub use filter::{FilterEvent, FilterMachine, FilterSelection, StageOutput};
pub use session::DashboardSession;
pub use view::ViewModel;
