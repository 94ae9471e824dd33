pub mod app;
pub mod controls_panel;
pub mod time_display;
