pub mod alert;
pub mod status_bar;
pub mod toolbar;
