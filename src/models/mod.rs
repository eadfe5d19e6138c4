pub mod budget;
pub mod coordinates;
pub mod itinerary;
pub mod place;
pub mod transport;

pub use budget::{
    AccommodationEstimate, ActivitiesEstimate, AlignmentStatus, BudgetAlignment, BudgetBreakdown,
    BudgetEstimate, BudgetPreferences, BudgetRecommendation, CityTier, CostLevel, DiningStyle,
    FoodEstimate, MiscellaneousEstimate, TransportStyle, TransportationEstimate, TripParams,
};
pub use coordinates::Coordinates;
pub use itinerary::{DayPlan, Itinerary, ItineraryMetadata, Pace, ScheduledPlace, TimeBlock};
pub use place::{Place, PlaceCategory};
pub use transport::{
    ComparisonSummary, ModeOutcome, ModeRecommendation, ModeReport, RouteResult, RouteStep,
    TransportComparison, TransportMode,
};
