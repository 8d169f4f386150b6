use std::rc::Rc;
use yew::prelude::*;

/// Monotonic counter shared by a form and the views that refetch after it
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UpdateCounter(pub u32);

impl Reducible for UpdateCounter {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(UpdateCounter(self.0.wrapping_add(1)))
    }
}

pub struct UseUpdateCounterResult {
    pub value: u32,
    /// Increment the counter; safe to call from async tasks
    pub bump: Callback<()>,
}

#[hook]
pub fn use_update_counter() -> UseUpdateCounterResult {
    let counter = use_reducer(UpdateCounter::default);

    let bump = {
        let dispatcher = counter.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(()))
    };

    UseUpdateCounterResult {
        value: counter.0,
        bump,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_increments() {
        let counter = Rc::new(UpdateCounter::default());
        let counter = counter.reduce(());
        let counter = counter.reduce(());
        assert_eq!(*counter, UpdateCounter(2));
    }

    #[test]
    fn test_reduce_wraps() {
        let counter = Rc::new(UpdateCounter(u32::MAX)).reduce(());
        assert_eq!(counter.0, 0);
    }
}
