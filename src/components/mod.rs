pub mod desktop;
pub mod footer;
pub mod helpers;
pub mod output;
pub mod status_bar;
pub mod suggestions;
pub mod terminal_view;
