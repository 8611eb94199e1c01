use std::rc::Rc;

use yew::prelude::*;

/// Events the counter reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
}

/// The counter's state. Starts at zero and only moves through [`Counter::transition`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Pure `(state, event) -> state` step.
    pub fn transition(self, action: CounterAction) -> Self {
        match action {
            CounterAction::Increment => Self { value: self.value + 1 },
        }
    }

    /// Text shown on the counter button.
    pub fn label(&self) -> String {
        format!("Count is {}", self.value)
    }
}

impl Reducible for Counter {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).transition(action);
        log::debug!("counter {:?}: {} -> {}", action, self.value, next.value);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: i64) -> Counter {
        Counter { value }
    }

    #[test]
    fn starts_at_zero() {
        let counter = Counter::default();
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.label(), "Count is 0");
    }

    #[test]
    fn one_increment_adds_exactly_one() {
        for n in [0, 1, 7, 41, 1_000_000, i64::MAX - 1] {
            let next = at(n).transition(CounterAction::Increment);
            assert_eq!(next.value(), n + 1);
            assert_eq!(next.label(), format!("Count is {}", n + 1));
        }
    }

    #[test]
    fn k_increments_land_on_k() {
        let counter = (0..250).fold(Counter::default(), |c, _| c.transition(CounterAction::Increment));
        assert_eq!(counter.value(), 250);
    }

    #[test]
    fn reducer_matches_transition() {
        let state = Rc::new(at(3));
        let next = state.clone().reduce(CounterAction::Increment);
        assert_eq!(*next, at(4));
        // previous snapshot is untouched
        assert_eq!(*state, at(3));
    }

    #[test]
    fn instances_are_independent() {
        let a = Rc::new(Counter::default());
        let b = Rc::new(Counter::default());

        let a = a.reduce(CounterAction::Increment).reduce(CounterAction::Increment);

        assert_eq!(a.value(), 2);
        assert_eq!(b.value(), 0);
    }
}
