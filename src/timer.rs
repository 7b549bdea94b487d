use crate::logger;
use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// Countdown clock running on its own worker thread.
///
/// At most one worker exists per `Timer`: `start` stops the previous one
/// before spawning, so `on_expire` can never fire twice for one timer.
pub struct Timer {
    interval: Duration,
    worker: Option<Worker>,
}

struct Worker {
    cancel_tx: Sender<()>,
    handle: thread::JoinHandle<()>,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub fn new() -> Self {
        Self::with_interval(Duration::from_secs(1))
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            worker: None,
        }
    }

    pub fn start<T, E>(&mut self, total_seconds: u32, mut on_tick: T, on_expire: E)
    where
        T: FnMut(u32) + Send + 'static,
        E: FnOnce() + Send + 'static,
    {
        self.stop();

        let (cancel_tx, cancel_rx) = bounded::<()>(1);
        let interval = self.interval;
        let spawned = thread::Builder::new()
            .name("quiz-runner::timer".to_string())
            .spawn(move || {
                let mut remaining = total_seconds;
                // tick n is due at start + n * interval
                let mut deadline = Instant::now() + interval;
                while remaining > 0 {
                    let wait = deadline.saturating_duration_since(Instant::now());
                    match cancel_rx.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => {
                            remaining -= 1;
                            on_tick(remaining);
                            deadline += interval;
                        }
                        // cancelled, or the Timer was dropped
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
                    }
                }
                on_expire();
            });

        match spawned {
            Ok(handle) => self.worker = Some(Worker { cancel_tx, handle }),
            Err(e) => logger::log(&format!("Failed to spawn timer thread: {}", e)),
        }
    }

    pub fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        let _ = worker.cancel_tx.try_send(());
        // a callback that stops its own timer cannot wait for itself
        if worker.handle.thread().id() != thread::current().id() {
            let _ = worker.handle.join();
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|worker| !worker.handle.is_finished())
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    const FAST: Duration = Duration::from_millis(5);
    const WAIT: Duration = Duration::from_secs(2);

    #[derive(Debug, PartialEq)]
    enum Fired {
        Tick(u32),
        Expire(&'static str),
    }

    #[test]
    fn test_ticks_down_then_expires_once() {
        let (tx, rx) = unbounded();
        let tick_tx = tx.clone();
        let mut timer = Timer::with_interval(FAST);
        timer.start(
            3,
            move |remaining| {
                let _ = tick_tx.send(Fired::Tick(remaining));
            },
            move || {
                let _ = tx.send(Fired::Expire("only"));
            },
        );

        let mut fired = Vec::new();
        while let Ok(event) = rx.recv_timeout(WAIT) {
            fired.push(event);
        }
        assert_eq!(
            fired,
            vec![
                Fired::Tick(2),
                Fired::Tick(1),
                Fired::Tick(0),
                Fired::Expire("only"),
            ]
        );
        assert!(!timer.is_running());
    }

    #[test]
    fn test_stop_cancels_before_expiry() {
        let (tx, rx) = unbounded();
        let mut timer = Timer::with_interval(Duration::from_millis(50));
        timer.start(1_000, |_| {}, move || {
            let _ = tx.send(());
        });
        assert!(timer.is_running());
        timer.stop();
        assert!(!timer.is_running());
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn test_restart_cancels_previous_countdown() {
        let (tx, rx) = unbounded();
        let first_tx = tx.clone();
        let mut timer = Timer::with_interval(FAST);
        timer.start(50, |_| {}, move || {
            let _ = first_tx.send(Fired::Expire("first"));
        });
        timer.start(2, |_| {}, move || {
            let _ = tx.send(Fired::Expire("second"));
        });

        let mut fired = Vec::new();
        while let Ok(event) = rx.recv_timeout(Duration::from_millis(600)) {
            fired.push(event);
        }
        assert_eq!(fired, vec![Fired::Expire("second")]);
    }

    #[test]
    fn test_zero_seconds_expires_without_ticks() {
        let (tx, rx) = unbounded();
        let tick_tx = tx.clone();
        let mut timer = Timer::with_interval(FAST);
        timer.start(
            0,
            move |remaining| {
                let _ = tick_tx.send(Fired::Tick(remaining));
            },
            move || {
                let _ = tx.send(Fired::Expire("zero"));
            },
        );
        assert_eq!(rx.recv_timeout(WAIT).unwrap(), Fired::Expire("zero"));
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn test_drop_stops_worker() {
        let (tx, rx) = unbounded();
        {
            let mut timer = Timer::with_interval(Duration::from_millis(20));
            timer.start(3, |_| {}, move || {
                let _ = tx.send(());
            });
        }
        assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
    }

    #[test]
    fn test_slow_ticks_do_not_delay_expiry() {
        let (tx, rx) = unbounded();
        let mut timer = Timer::with_interval(Duration::from_millis(60));
        let started = Instant::now();
        timer.start(
            5,
            |_| thread::sleep(Duration::from_millis(50)),
            move || {
                let _ = tx.send(());
            },
        );

        rx.recv_timeout(WAIT).unwrap();
        let elapsed = started.elapsed();
        // 5 ticks of 60ms plus the last callback; drifting would take ~550ms
        assert!(elapsed >= Duration::from_millis(300), "{:?}", elapsed);
        assert!(elapsed < Duration::from_millis(480), "{:?}", elapsed);
    }

    #[test]
    fn test_stop_without_start_is_harmless() {
        let mut timer = Timer::new();
        timer.stop();
        assert!(!timer.is_running());
    }
}
