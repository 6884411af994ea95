pub mod controller;
pub mod route_events;
pub mod state;
pub mod viewport;

pub use controller::{MenuController, MenuStore};
pub use route_events::{RouteEvents, RouteKey, RouteSubscription, navigation_completed};
pub use state::{MenuEvent, MenuState};
pub use viewport::{BREAKPOINT_PX, Viewport};
