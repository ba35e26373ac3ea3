pub mod controller;
pub mod gui;
pub mod logic;
pub mod model;

pub use controller::DashboardController;
pub use gui::App;
pub use model::DashboardModel;
