pub mod config;
pub mod destinations;
pub mod display;
pub mod drafts;
pub mod error;
pub mod loader;
pub mod overview;
pub mod status;
pub mod taxonomy;

// Re-exports for convenience
pub use config::{PlannerConfig, PlannerConfigExt};
pub use destinations::{completed_count, order, priority_of, progress, progress_of};
pub use drafts::{
    parse_budget_input, parse_priority_input, parse_traveler_input, prepare_destinations,
    prepare_trip,
};
pub use error::{ConfigError, InputError, LoadError, LookupError};
pub use loader::{load_export, load_form, parse_export};
pub use overview::{Dashboard, StatusCounts, TripIndex, TripOverview};
pub use status::{classify, classify_trip, duration_days, duration_text, parse_instant};
pub use taxonomy::{Priority, price_range_label, trip_type_choice_label, trip_type_name};
pub use waypoint_types::{
    Destination, DestinationDraft, NewDestination, NewTrip, StatusInfo, Trip, TripDraft,
    TripExport, TripForm, TripId, TripStatus,
};
