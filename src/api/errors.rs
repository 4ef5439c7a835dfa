//! Error codes reported by the hub's local API.

/// The caller's username is not in the hub's whitelist.
pub const ERR_UNAUTHORIZED_USER: i32 = 1;
/// The addressed resource does not exist on the hub.
pub const ERR_RESOURCE_NOT_FOUND: i32 = 3;
/// A parameter in the request body is not available.
pub const ERR_PARAMETER_UNAVAILABLE: i32 = 6;
/// Registration was attempted without the hub's link button pressed.
pub const ERR_LINK_BUTTON_NOT_PRESSED: i32 = 101;
/// The addressed parameter is not modifiable in the device's current state.
pub const ERR_PARAMETER_NOT_MODIFIABLE: i32 = 201;
