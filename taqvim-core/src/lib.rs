//! Scheduling engine for the taqvim certification dashboard.
//!
//! Everything here is a pure function over immutable snapshots: the host
//! owns the item collection, drives month navigation, and re-renders from
//! returned values. Time enters only through the injected `Clock`.
//!
//! The shipped calendar system is the arithmetic Jalali calendar;
//! `CalendarSystem` is the seam for adding others.

pub mod calendar;
pub mod classify;
pub mod clock;
pub mod draft;
pub mod error;
pub mod grid;
pub mod item;
pub mod month;
pub mod store;
pub mod upcoming;

pub use calendar::jalali::Jalali;
pub use calendar::{CalendarDate, CalendarSystem, CalendarSystemId};
pub use classify::{DayIndex, occurs_on, occurs_on_day};
pub use clock::{Clock, FixedClock, SystemClock};
pub use draft::ItemDraft;
pub use error::{ScheduleError, ScheduleResult};
pub use grid::{GRID_CELLS, GridCell, MonthGrid};
pub use item::{CalendarItem, ItemKind, Occurrence, OccurrenceShape, Stage};
pub use month::MonthRef;
