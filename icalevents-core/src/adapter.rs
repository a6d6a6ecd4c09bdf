//! Boundary between the facade and whatever produces flat records.
//!
//! An adapter allocates every [`QueryResult`] it hands out and expects each
//! one back exactly once through [`CalendarAdapter::release`]. The facade never
//! frees a result on its own; it holds it in a [`ReleaseGuard`], which returns
//! it to the adapter when the guard goes out of scope on any exit path.

use std::ops::Deref;

use crate::record::QueryResult;

pub trait CalendarAdapter {
    /// Load every event of the calendar titled `name` within the query window.
    fn load_calendar_named(&self, name: &str) -> QueryResult;

    /// Take back a result previously returned by `load_calendar_named`.
    fn release(&self, result: QueryResult);
}

impl<A: CalendarAdapter + ?Sized> CalendarAdapter for &A {
    fn load_calendar_named(&self, name: &str) -> QueryResult {
        (**self).load_calendar_named(name)
    }

    fn release(&self, result: QueryResult) {
        (**self).release(result)
    }
}

/// Scoped ownership of an adapter result.
pub struct ReleaseGuard<'a, A: CalendarAdapter + ?Sized> {
    adapter: &'a A,
    result: Option<QueryResult>,
}

impl<'a, A: CalendarAdapter + ?Sized> ReleaseGuard<'a, A> {
    /// Run a query and take ownership of its result.
    pub fn load(adapter: &'a A, name: &str) -> Self {
        let result = adapter.load_calendar_named(name);
        ReleaseGuard {
            adapter,
            result: Some(result),
        }
    }
}

impl<A: CalendarAdapter + ?Sized> Deref for ReleaseGuard<'_, A> {
    type Target = QueryResult;

    fn deref(&self) -> &QueryResult {
        // Only `drop` empties the slot.
        self.result.as_ref().unwrap_or(&EMPTY)
    }
}

static EMPTY: QueryResult = QueryResult::Events(Vec::new());

impl<A: CalendarAdapter + ?Sized> Drop for ReleaseGuard<'_, A> {
    fn drop(&mut self) {
        if let Some(result) = self.result.take() {
            self.adapter.release(result);
        }
    }
}
