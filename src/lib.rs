//! route-optimizer
//!
//! Round-trip delivery routing: given travel times between a start and a set
//! of destinations, find a low-cost closed tour. Small requests are solved
//! exactly; larger ones use nearest-neighbor construction refined by 2-opt.

pub mod cache;
pub mod config;
pub mod error;
pub mod exact;
pub mod haversine;
pub mod heuristic;
pub mod location;
pub mod matrix;
pub mod optimizer;
pub mod ors;
pub mod osrm;
pub mod tour;
pub mod traits;

pub use config::SolveOptions;
pub use error::{MatrixError, OptimizeError};
pub use location::{Coordinates, GeocodeResult, Location, LocationId};
pub use matrix::{TimeMatrix, TravelTime};
pub use optimizer::{Route, RouteWarning, SolverKind, optimize, plan};
pub use tour::{Solution, Tour, TourCost, tour_cost};
