//! Slide carousel interaction state.
//!
//! [`Carousel`] is a plain state machine: callers pass the current time into
//! every transition and it hands back at most one pending [`Timer`]. Each
//! transition replaces the pending timer, so a timer that fires after it was
//! replaced is recognised by its id and ignored.
//!
//! [`CarouselDriver`] runs the machine on a tokio task, sleeping until the
//! pending deadline and publishing the current index on a watch channel.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// Delay between automatic advances.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(4000);

/// Delay before autoplay resumes after user interaction.
pub const RESUME_COOLDOWN: Duration = Duration::from_millis(5000);

/// Horizontal drag distance that counts as a swipe.
pub const SWIPE_THRESHOLD: f64 = 100.0;

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Move to the next slide
    Advance,
    /// Re-enable autoplay
    Resume,
}

/// A scheduled timer owned by the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub id: TimerId,
    pub kind: TimerKind,
    pub deadline: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Advancing on a timer. No timer when there is a single slide.
    Autoplaying { timer: Option<Timer> },
    /// Waiting out the cooldown after user interaction
    Paused { resume: Timer },
    /// Pointer held down
    Dragging { origin: f64, offset: f64 },
    /// Torn down; every input is ignored
    Stopped,
}

/// Errors from carousel construction and driving.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("A carousel needs at least one slide")]
    Empty,

    #[error("Carousel driver has stopped")]
    Closed,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    count: usize,
    index: usize,
    phase: Phase,
    next_id: u64,
}

impl Carousel {
    /// Start autoplaying at the first slide.
    pub fn new(count: usize, now: Instant) -> Result<Self, CarouselError> {
        if count == 0 {
            return Err(CarouselError::Empty);
        }

        let mut carousel = Self {
            count,
            index: 0,
            phase: Phase::Stopped,
            next_id: 0,
        };
        carousel.autoplay(now);
        Ok(carousel)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_autoplaying(&self) -> bool {
        matches!(self.phase, Phase::Autoplaying { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Current drag offset, zero when not dragging.
    pub fn drag_offset(&self) -> f64 {
        match self.phase {
            Phase::Dragging { offset, .. } => offset,
            _ => 0.0,
        }
    }

    /// The single pending timer, if any.
    pub fn pending_timer(&self) -> Option<Timer> {
        match self.phase {
            Phase::Autoplaying { timer } => timer,
            Phase::Paused { resume } => Some(resume),
            Phase::Dragging { .. } | Phase::Stopped => None,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_timer().map(|t| t.deadline)
    }

    /// Deliver a timer firing. Returns false when the timer is stale.
    pub fn fire(&mut self, id: TimerId, now: Instant) -> bool {
        let timer = match self.pending_timer() {
            Some(timer) if timer.id == id => timer,
            _ => return false,
        };

        match timer.kind {
            TimerKind::Advance => {
                self.index = (self.index + 1) % self.count;
                self.autoplay(now);
            }
            TimerKind::Resume => self.autoplay(now),
        }
        true
    }

    /// Begin a drag at horizontal position `x`. Cancels pending timers.
    pub fn drag_start(&mut self, x: f64) {
        if self.phase == Phase::Stopped {
            return;
        }
        self.phase = Phase::Dragging {
            origin: x,
            offset: 0.0,
        };
    }

    pub fn drag_move(&mut self, x: f64) {
        if let Phase::Dragging { origin, .. } = self.phase {
            self.phase = Phase::Dragging {
                origin,
                offset: x - origin,
            };
        }
    }

    /// Finish a drag, moving one slide when the offset passes the threshold.
    pub fn drag_end(&mut self, now: Instant) {
        let Phase::Dragging { offset, .. } = self.phase else {
            return;
        };

        if offset > SWIPE_THRESHOLD && self.index > 0 {
            self.index -= 1;
        } else if offset < -SWIPE_THRESHOLD && self.index + 1 < self.count {
            self.index += 1;
        }
        self.pause(now);
    }

    /// Move to the following slide, wrapping to the first.
    pub fn next(&mut self, now: Instant) {
        self.navigate((self.index + 1) % self.count, now);
    }

    /// Move to the preceding slide, wrapping to the last.
    pub fn prev(&mut self, now: Instant) {
        self.navigate((self.index + self.count - 1) % self.count, now);
    }

    /// Jump to a slide. Out-of-range indices are ignored.
    pub fn goto(&mut self, index: usize, now: Instant) {
        if index < self.count {
            self.navigate(index, now);
        }
    }

    /// Cancel every pending timer and stop reacting to input.
    pub fn teardown(&mut self) {
        self.phase = Phase::Stopped;
    }

    fn navigate(&mut self, index: usize, now: Instant) {
        if self.phase == Phase::Stopped {
            return;
        }
        self.index = index;
        self.pause(now);
    }

    fn autoplay(&mut self, now: Instant) {
        let timer = (self.count > 1)
            .then(|| self.schedule(TimerKind::Advance, now + AUTOPLAY_INTERVAL));
        self.phase = Phase::Autoplaying { timer };
    }

    fn pause(&mut self, now: Instant) {
        let resume = self.schedule(TimerKind::Resume, now + RESUME_COOLDOWN);
        self.phase = Phase::Paused { resume };
    }

    fn schedule(&mut self, kind: TimerKind, deadline: Instant) -> Timer {
        self.next_id += 1;
        Timer {
            id: TimerId(self.next_id),
            kind,
            deadline,
        }
    }
}

/// Input events accepted by [`CarouselDriver`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselInput {
    Next,
    Prev,
    Goto(usize),
    DragStart(f64),
    DragMove(f64),
    DragEnd,
}

/// Runs a [`Carousel`] on a background task.
pub struct CarouselDriver {
    input: mpsc::Sender<CarouselInput>,
    index: watch::Receiver<usize>,
    handle: JoinHandle<()>,
}

impl CarouselDriver {
    /// Spawn a driver for `count` slides. Must be called inside a tokio runtime.
    pub fn spawn(count: usize) -> Result<Self, CarouselError> {
        let carousel = Carousel::new(count, Instant::now())?;
        let (input, input_rx) = mpsc::channel(32);
        let (index_tx, index) = watch::channel(0);

        let handle = tokio::spawn(drive(carousel, input_rx, index_tx));

        Ok(Self {
            input,
            index,
            handle,
        })
    }

    pub async fn send(&self, input: CarouselInput) -> Result<(), CarouselError> {
        self.input
            .send(input)
            .await
            .map_err(|_| CarouselError::Closed)
    }

    /// The most recently published index.
    pub fn index(&self) -> usize {
        *self.index.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index.clone()
    }

    /// Close the input channel and wait for the task to tear down.
    pub async fn shutdown(self) {
        drop(self.input);
        if let Err(e) = self.handle.await {
            tracing::warn!("Carousel task failed: {}", e);
        }
    }
}

async fn drive(
    mut carousel: Carousel,
    mut input: mpsc::Receiver<CarouselInput>,
    index: watch::Sender<usize>,
) {
    loop {
        let pending = carousel.pending_timer();
        let timer = async {
            match pending {
                Some(timer) => sleep_until(timer.deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            event = input.recv() => {
                let Some(event) = event else {
                    carousel.teardown();
                    break;
                };
                let now = Instant::now();
                match event {
                    CarouselInput::Next => carousel.next(now),
                    CarouselInput::Prev => carousel.prev(now),
                    CarouselInput::Goto(i) => carousel.goto(i, now),
                    CarouselInput::DragStart(x) => carousel.drag_start(x),
                    CarouselInput::DragMove(x) => carousel.drag_move(x),
                    CarouselInput::DragEnd => carousel.drag_end(now),
                }
            }
            _ = timer => {
                if let Some(timer) = pending {
                    carousel.fire(timer.id, Instant::now());
                }
            }
        }

        index.send_if_modified(|current| {
            let changed = *current != carousel.index();
            *current = carousel.index();
            changed
        });
    }

    tracing::debug!("Carousel stopped at slide {}", carousel.index());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn advance(carousel: &mut Carousel) -> Instant {
        let timer = carousel.pending_timer().unwrap();
        assert!(carousel.fire(timer.id, timer.deadline));
        timer.deadline
    }

    #[test]
    fn rejects_empty_carousel() {
        assert!(matches!(
            Carousel::new(0, Instant::now()),
            Err(CarouselError::Empty)
        ));
    }

    #[test]
    fn autoplay_advances_and_wraps() {
        let start = Instant::now();
        let mut carousel = Carousel::new(3, start).unwrap();

        assert_eq!(carousel.next_deadline(), Some(start + AUTOPLAY_INTERVAL));

        advance(&mut carousel);
        advance(&mut carousel);
        assert_eq!(carousel.index(), 2);
        let at = advance(&mut carousel);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.next_deadline(), Some(at + AUTOPLAY_INTERVAL));
    }

    #[test]
    fn single_slide_never_schedules() {
        let mut carousel = Carousel::new(1, Instant::now()).unwrap();

        assert!(carousel.is_autoplaying());
        assert_eq!(carousel.pending_timer(), None);

        carousel.next(Instant::now());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn stale_timer_is_ignored() {
        let start = Instant::now();
        let mut carousel = Carousel::new(4, start).unwrap();
        let stale = carousel.pending_timer().unwrap();

        carousel.next(start + ms(100));
        assert_eq!(carousel.index(), 1);

        assert!(!carousel.fire(stale.id, stale.deadline));
        assert_eq!(carousel.index(), 1);
        assert!(!carousel.is_autoplaying());
    }

    #[test]
    fn manual_navigation_pauses_then_resumes() {
        let start = Instant::now();
        let mut carousel = Carousel::new(3, start).unwrap();

        carousel.prev(start);
        assert_eq!(carousel.index(), 2);

        let resume = carousel.pending_timer().unwrap();
        assert_eq!(resume.kind, TimerKind::Resume);
        assert_eq!(resume.deadline, start + RESUME_COOLDOWN);

        carousel.fire(resume.id, resume.deadline);
        assert!(carousel.is_autoplaying());
        assert_eq!(carousel.index(), 2);
        assert_eq!(
            carousel.next_deadline(),
            Some(start + RESUME_COOLDOWN + AUTOPLAY_INTERVAL)
        );
    }

    #[test]
    fn goto_ignores_out_of_range() {
        let start = Instant::now();
        let mut carousel = Carousel::new(3, start).unwrap();

        carousel.goto(7, start);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_autoplaying());

        carousel.goto(2, start);
        assert_eq!(carousel.index(), 2);
        assert!(!carousel.is_autoplaying());
    }

    #[test]
    fn drag_past_threshold_changes_slide() {
        let start = Instant::now();
        let mut carousel = Carousel::new(3, start).unwrap();

        carousel.drag_start(400.0);
        assert!(carousel.is_dragging());
        assert_eq!(carousel.pending_timer(), None);

        carousel.drag_move(250.0);
        assert_eq!(carousel.drag_offset(), -150.0);
        carousel.drag_end(start);
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.drag_offset(), 0.0);
        assert_eq!(carousel.next_deadline(), Some(start + RESUME_COOLDOWN));

        carousel.drag_start(100.0);
        carousel.drag_move(180.0);
        carousel.drag_end(start);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn drag_stops_at_edges() {
        let start = Instant::now();
        let mut carousel = Carousel::new(2, start).unwrap();

        carousel.drag_start(0.0);
        carousel.drag_move(300.0);
        carousel.drag_end(start);
        assert_eq!(carousel.index(), 0);

        carousel.goto(1, start);
        carousel.drag_start(300.0);
        carousel.drag_move(0.0);
        carousel.drag_end(start);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn index_stays_in_range() {
        let start = Instant::now();
        for count in 1..6 {
            let mut carousel = Carousel::new(count, start).unwrap();
            for step in 0..40 {
                match step % 5 {
                    0 => carousel.next(start),
                    1 => carousel.prev(start),
                    2 => carousel.goto(step, start),
                    3 => {
                        carousel.drag_start(0.0);
                        carousel.drag_move(if step % 2 == 0 { 150.0 } else { -150.0 });
                        carousel.drag_end(start);
                    }
                    _ => {
                        if let Some(timer) = carousel.pending_timer() {
                            carousel.fire(timer.id, timer.deadline);
                        }
                    }
                }
                assert!(carousel.index() < count);
            }
        }
    }

    #[test]
    fn teardown_cancels_timers() {
        let start = Instant::now();
        let mut carousel = Carousel::new(3, start).unwrap();
        let timer = carousel.pending_timer().unwrap();

        carousel.teardown();

        assert_eq!(carousel.pending_timer(), None);
        assert!(!carousel.fire(timer.id, timer.deadline));
        carousel.next(start);
        assert_eq!(carousel.index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn driver_autoplays() {
        let driver = CarouselDriver::spawn(3).unwrap();
        let mut index = driver.subscribe();

        tokio::time::sleep(ms(3999)).await;
        assert_eq!(driver.index(), 0);

        index.changed().await.unwrap();
        assert_eq!(*index.borrow(), 1);

        driver.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn driver_pauses_after_input() {
        let driver = CarouselDriver::spawn(3).unwrap();
        let mut index = driver.subscribe();

        driver.send(CarouselInput::Next).await.unwrap();
        index.changed().await.unwrap();
        assert_eq!(driver.index(), 1);

        // Cooldown plus one interval before the next advance.
        tokio::time::sleep(ms(8900)).await;
        assert_eq!(driver.index(), 1);

        tokio::time::sleep(ms(200)).await;
        assert_eq!(driver.index(), 2);

        driver.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn driver_swipes() {
        let driver = CarouselDriver::spawn(3).unwrap();
        let mut index = driver.subscribe();

        driver.send(CarouselInput::DragStart(500.0)).await.unwrap();
        driver.send(CarouselInput::DragMove(350.0)).await.unwrap();
        driver.send(CarouselInput::DragEnd).await.unwrap();

        index.changed().await.unwrap();
        assert_eq!(*index.borrow(), 1);

        driver.shutdown().await;
    }
}
