mod lifecycle;
mod placement;

pub use self::lifecycle::OrderLifecycleService;
pub use self::placement::OrderPlacementService;
