/// Receiver of step-by-step notifications from a running algorithm.
///
/// Observers only watch. They are called synchronously after each step and
/// receive owned copies of the step data, so they have no way to influence the
/// outcome of the run. A typical observer redraws a cell or a line.
///
/// Any `FnMut(E)` closure is an observer.
pub trait Observer<E> {
    fn notify(&mut self, event: E);
}

impl<E, F> Observer<E> for F
where
    F: FnMut(E),
{
    fn notify(&mut self, event: E) {
        (self)(event)
    }
}

/// Observer that ignores all events. Used when none was given.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl<E> Observer<E> for Silent {
    #[inline]
    fn notify(&mut self, _event: E) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit<O: Observer<u32>>(mut observer: O) {
        for i in 0..3 {
            observer.notify(i);
        }
    }

    #[test]
    fn closure_observer() {
        let mut seen = Vec::new();
        emit(|e| seen.push(e));
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn silent_observer() {
        emit(Silent);
    }
}
