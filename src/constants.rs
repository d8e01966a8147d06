// DOM-facing names used by the web front-end.

// Namespace for everything the tilt effect stores on an element
pub const DATA_NAMESPACE: &str = "tilt";

// Attribute holding the registry id: the element's associated-data slot
pub const DATA_ID_ATTR: &str = "data-tilt-id";

// Option key naming the element to rotate (selector string or element)
pub const TARGET_OPTION_KEY: &str = "element";

// Pointer listeners registered on the container
pub const EVENT_ENTER: &str = "mouseenter";
pub const EVENT_LEAVE: &str = "mouseleave";
pub const EVENT_MOVE: &str = "mousemove";
pub const POINTER_EVENTS: [&str; 3] = [EVENT_ENTER, EVENT_LEAVE, EVENT_MOVE];

// Style property the effect reads and writes
pub const TRANSFORM_PROPERTY: &str = "transform";
