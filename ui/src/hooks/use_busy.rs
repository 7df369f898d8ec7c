use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// Guard for one async action, shared by every clone of it.
///
/// Checked and set synchronously, so two triggers that land before the next
/// render cannot both start.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Rc<Cell<bool>>);

impl InFlight {
    /// Returns `false` if the action is already running.
    pub fn try_begin(&self) -> bool {
        !self.0.replace(true)
    }

    pub fn end(&self) {
        self.0.set(false);
    }

    pub fn is_set(&self) -> bool {
        self.0.get()
    }
}

/// An [`InFlight`] guard plus the state that re-renders the control it
/// disables.
#[derive(Clone)]
pub struct BusyFlag {
    guard: InFlight,
    shown: UseStateHandle<bool>,
}

impl BusyFlag {
    pub fn begin(&self) -> bool {
        if !self.guard.try_begin() {
            return false;
        }
        self.shown.set(true);
        true
    }

    pub fn finish(&self) {
        self.guard.end();
        self.shown.set(false);
    }

    pub fn is_busy(&self) -> bool {
        *self.shown
    }
}

#[hook]
pub fn use_busy() -> BusyFlag {
    let guard = use_memo((), |_| InFlight::default());
    let shown = use_state(|| false);
    BusyFlag {
        guard: (*guard).clone(),
        shown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_refused_until_end() {
        let guard = InFlight::default();
        let from_other_click = guard.clone();

        assert!(guard.try_begin());
        assert!(from_other_click.is_set());
        assert!(!from_other_click.try_begin());

        guard.end();
        assert!(!from_other_click.is_set());
        assert!(from_other_click.try_begin());
    }
}
