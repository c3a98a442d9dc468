pub mod app;
pub mod idle_panel;
pub mod preview_card;
pub mod progress_panel;
pub mod result_panel;
pub mod toast;
pub mod upload_zone;
