pub mod footer;
pub mod nav_menu;
pub mod site_link;
pub mod theme_button;
