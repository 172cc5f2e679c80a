//! Trip index and dashboard views
//!
//! Groups a user's destinations under their trips and derives the per-trip
//! overview (status, duration, progress) shown on the dashboard and the trip
//! detail page. Every derived value takes `now` from the caller.

use chrono::NaiveDateTime;
use hashbrown::HashMap;
use serde::Serialize;
use tracing::{debug, warn};
use waypoint_types::{Destination, StatusInfo, Trip, TripExport, TripId, TripStatus};

use crate::destinations::{completed_count, order, progress_of};
use crate::error::{LoadError, LookupError};
use crate::status::{classify_trip, duration_text};

/// Derived view of a single trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripOverview<'a> {
    pub trip: &'a Trip,
    pub status: StatusInfo,
    /// "6 days"
    pub duration: String,
    /// 0-100
    pub progress: u8,
    pub completed: usize,
    pub total: usize,
}

impl<'a> TripOverview<'a> {
    pub fn build(trip: &'a Trip, destinations: &[Destination], now: NaiveDateTime) -> Self {
        let completed = completed_count(destinations);
        let total = destinations.len();
        Self {
            trip,
            status: classify_trip(trip, now),
            duration: duration_text(trip.start_date, trip.end_date),
            progress: progress_of(completed, total),
            completed,
            total,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub upcoming: usize,
    pub ongoing: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: TripStatus) {
        match status {
            TripStatus::Upcoming => self.upcoming += 1,
            TripStatus::Ongoing => self.ongoing += 1,
            TripStatus::Completed => self.completed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.upcoming + self.ongoing + self.completed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard<'a> {
    /// Sorted by start date, then trip id
    pub trips: Vec<TripOverview<'a>>,
    pub counts: StatusCounts,
}

/// A user's trips with their destinations grouped by trip.
#[derive(Debug, Clone, Default)]
pub struct TripIndex {
    trips: Vec<Trip>,
    positions: HashMap<TripId, usize>,
    destinations: HashMap<TripId, Vec<Destination>>,
}

impl TripIndex {
    /// Build an index. Destinations keep their input order within a trip;
    /// destinations whose trip is not present are dropped.
    pub fn new(trips: Vec<Trip>, destinations: Vec<Destination>) -> Result<Self, LoadError> {
        let mut positions = HashMap::with_capacity(trips.len());
        for (i, trip) in trips.iter().enumerate() {
            if positions.insert(trip.id, i).is_some() {
                return Err(LoadError::DuplicateTrip { id: trip.id });
            }
        }

        let mut grouped: HashMap<TripId, Vec<Destination>> = HashMap::new();
        let mut orphaned = 0usize;
        for destination in destinations {
            if !positions.contains_key(&destination.trip_id) {
                warn!(
                    destination_id = destination.id,
                    trip_id = destination.trip_id,
                    "Destination references unknown trip, skipping"
                );
                orphaned += 1;
                continue;
            }
            if !(1..=5).contains(&destination.priority_level) {
                warn!(
                    destination_id = destination.id,
                    priority_level = destination.priority_level,
                    "Priority outside 1-5, labelled as default"
                );
            }
            grouped
                .entry(destination.trip_id)
                .or_default()
                .push(destination);
        }

        debug!(
            trips = trips.len(),
            destinations = grouped.values().map(Vec::len).sum::<usize>(),
            orphaned,
            "Built trip index"
        );

        Ok(Self {
            trips,
            positions,
            destinations: grouped,
        })
    }

    pub fn from_export(export: TripExport) -> Result<Self, LoadError> {
        Self::new(export.trips, export.destinations)
    }

    // Accessor methods

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn trip(&self, id: TripId) -> Result<&Trip, LookupError> {
        self.positions
            .get(&id)
            .map(|&i| &self.trips[i])
            .ok_or(LookupError::TripNotFound { id })
    }

    /// Destinations of a trip in stored order (empty for unknown trips)
    pub fn destinations(&self, id: TripId) -> &[Destination] {
        self.destinations.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Destinations of a trip in display order
    pub fn ordered_destinations(&self, id: TripId) -> Result<Vec<&Destination>, LookupError> {
        self.trip(id)?;
        Ok(order(self.destinations(id)))
    }

    pub fn overview(&self, id: TripId, now: NaiveDateTime) -> Result<TripOverview<'_>, LookupError> {
        let trip = self.trip(id)?;
        Ok(TripOverview::build(trip, self.destinations(id), now))
    }

    pub fn dashboard(&self, now: NaiveDateTime) -> Dashboard<'_> {
        self.dashboard_of(self.trips.iter(), now)
    }

    /// Dashboard restricted to trips marked as favorite
    pub fn favorites_dashboard(&self, now: NaiveDateTime) -> Dashboard<'_> {
        self.dashboard_of(self.favorites().into_iter(), now)
    }

    /// Id to hand a newly prepared trip when no backend assigns one.
    pub fn next_trip_id(&self) -> TripId {
        self.trips.iter().map(|t| t.id).max().map_or(1, |id| id + 1)
    }

    fn dashboard_of<'a>(
        &'a self,
        selected: impl Iterator<Item = &'a Trip>,
        now: NaiveDateTime,
    ) -> Dashboard<'a> {
        let mut trips: Vec<TripOverview<'a>> = selected
            .map(|trip| TripOverview::build(trip, self.destinations(trip.id), now))
            .collect();
        trips.sort_by_key(|o| (o.trip.start_date, o.trip.id));

        let mut counts = StatusCounts::default();
        for overview in &trips {
            counts.record(overview.status.status);
        }

        Dashboard { trips, counts }
    }

    pub fn favorites(&self) -> Vec<&Trip> {
        self.trips.iter().filter(|t| t.is_favorite).collect()
    }
}
