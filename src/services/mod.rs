pub mod budget;
pub mod clustering;
pub mod directions;
pub mod itinerary;
pub mod place_directory;
pub mod transport;
