/// Hook through which a solver reports its events `E` to the caller.
///
/// Returning `Some(action)` asks the solver to act on `A` (for the Newton
/// solver, stopping early); `None` leaves the iteration alone.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that ignores everything.
pub trait Observer<E, A> {
    /// Called once per event.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
