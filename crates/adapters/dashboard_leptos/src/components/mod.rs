mod action_bar;
mod load_indicator;
mod node_details;
mod node_select;
mod number_form;
mod status_panel;

pub use action_bar::ActionBar;
pub use load_indicator::LoadIndicator;
pub use node_details::NodeDetails;
pub use node_select::NodeSelect;
pub use number_form::NumberForm;
pub use status_panel::StatusPanel;
