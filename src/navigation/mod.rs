//! Navigation: who may go where, moving the player, and the map's derived
//! presentation state.

pub mod access;
pub mod display;
pub mod events;
pub mod movement;
pub mod regions;

#[allow(unused_imports)]
pub use access::{
    check_route_access, check_town_access, has_route_access, has_town_access, normalize_route,
    route_exists, route_name,
};
#[allow(unused_imports)]
pub use display::{
    calculate_battle_css_class, calculate_route_a11y_label, calculate_route_class,
    calculate_town_a11y_label, calculate_town_class, current_environment, route_status,
    town_status, LocationStatus, WATER_ROUTE_CLASS,
};
#[allow(unused_imports)]
pub use events::{AccessError, AnalyticsEvent, NavigationEvent, Notification, Severity};
#[allow(unused_imports)]
pub use movement::{move_to_route, move_to_route_input, move_to_town};
#[allow(unused_imports)]
pub use regions::{
    advance_to_next_region, can_advance_region, find_accessible_harbor_region, open_ship_modal,
};
