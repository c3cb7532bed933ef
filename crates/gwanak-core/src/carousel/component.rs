//! Auto-advancing carousel component
//!
//! `AutoAdvanceCarousel` owns the slides and a background task that owns both
//! timers: the autoplay interval and the single pending cooldown. Navigation
//! calls are forwarded to the task over a channel and processed in order; the
//! resulting state is published through a `watch` channel for renderers.
//!
//! Dropping the component aborts the task, so no timer fires after teardown.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

use super::state::{CarouselSnapshot, CarouselState};
use crate::config::CarouselConfig;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Next,
    Previous,
    GoTo(usize),
    Reveal,
    Shutdown,
}

/// Carousel that advances on a fixed interval once visible, and pauses for a
/// cooldown whenever the user navigates manually.
///
/// Must be created from within a tokio runtime.
pub struct AutoAdvanceCarousel<T> {
    slides: Arc<[T]>,
    commands: mpsc::UnboundedSender<Command>,
    snapshot: watch::Receiver<CarouselSnapshot>,
    task: Option<JoinHandle<()>>,
}

impl<T> AutoAdvanceCarousel<T> {
    /// Spawn the carousel task. Fails on an empty slide sequence or invalid timing.
    pub fn spawn(slides: Vec<T>, config: &CarouselConfig) -> Result<Self> {
        config.validate()?;
        let state = CarouselState::new(slides.len())?;

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());

        let runner = Runner {
            state,
            autoplay_interval: config.autoplay_interval(),
            cooldown: config.cooldown(),
            commands: command_rx,
            publisher: snapshot_tx,
        };

        info!(
            "Carousel started: {} slides, autoplay={:?}, cooldown={:?}",
            slides.len(),
            runner.autoplay_interval,
            runner.cooldown
        );

        let task = tokio::spawn(runner.run());

        Ok(Self {
            slides: slides.into(),
            commands: command_tx,
            snapshot: snapshot_rx,
            task: Some(task),
        })
    }

    pub fn slides(&self) -> &[T] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: construction rejects empty sequences
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Latest published state
    pub fn snapshot(&self) -> CarouselSnapshot {
        *self.snapshot.borrow()
    }

    /// The slide currently shown
    pub fn current(&self) -> &T {
        &self.slides[self.snapshot().current_index]
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot> {
        self.snapshot.clone()
    }

    /// User-triggered advance; pauses autoplay for the cooldown
    pub fn next(&self) {
        self.send(Command::Next);
    }

    /// User-triggered step back; pauses autoplay for the cooldown
    pub fn previous(&self) {
        self.send(Command::Previous);
    }

    /// Show slide `index` directly; pauses autoplay for the cooldown.
    ///
    /// # Panics
    /// If `index >= self.len()`.
    pub fn go_to(&self, index: usize) {
        assert!(
            index < self.slides.len(),
            "slide index {} out of range for {} slides",
            index,
            self.slides.len()
        );
        self.send(Command::GoTo(index));
    }

    /// The container entered the viewport. Only the first call has an effect.
    pub fn reveal(&self) {
        self.send(Command::Reveal);
    }

    /// Stop the task and wait for it to finish
    pub async fn shutdown(mut self) {
        self.send(Command::Shutdown);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            debug!("Carousel task gone, dropping {:?}", command);
        }
    }
}

impl<T> Drop for AutoAdvanceCarousel<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for AutoAdvanceCarousel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoAdvanceCarousel")
            .field("slides", &self.slides)
            .field("snapshot", &self.snapshot())
            .finish()
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingCooldown {
    generation: u64,
    deadline: Instant,
}

struct Runner {
    state: CarouselState,
    autoplay_interval: Duration,
    cooldown: Duration,
    commands: mpsc::UnboundedReceiver<Command>,
    publisher: watch::Sender<CarouselSnapshot>,
}

impl Runner {
    async fn run(mut self) {
        let mut autoplay: Option<Interval> = None;
        let mut cooldown: Option<PendingCooldown> = None;

        loop {
            tokio::select! {
                command = self.commands.recv() => {
                    let command = match command {
                        Some(Command::Shutdown) | None => break,
                        Some(command) => command,
                    };
                    if let Some(generation) = self.apply(command) {
                        // Replacing the pending cooldown cancels the older one
                        cooldown = Some(PendingCooldown {
                            generation,
                            deadline: Instant::now() + self.cooldown,
                        });
                    }
                }

                _ = next_tick(&mut autoplay) => {
                    if self.state.autoplay_tick() {
                        debug!("Autoplay advanced to slide {}", self.state.current_index());
                    }
                }

                generation = cooldown_expired(cooldown) => {
                    cooldown = None;
                    if self.state.resume_autoplay(generation) {
                        debug!("Cooldown elapsed, autoplay resumed");
                    }
                }
            }

            self.sync_autoplay(&mut autoplay);
            self.publish();
        }

        debug!("Carousel task stopped");
    }

    /// Returns the cooldown generation when the command was a manual navigation
    fn apply(&mut self, command: Command) -> Option<u64> {
        let generation = match command {
            Command::Next => self.state.manual_next(),
            Command::Previous => self.state.manual_previous(),
            Command::GoTo(index) => self.state.go_to(index),
            Command::Reveal => {
                if self.state.reveal() {
                    debug!("Carousel revealed");
                }
                return None;
            }
            Command::Shutdown => return None,
        };
        debug!(
            "Manual navigation to slide {}, autoplay paused for {:?}",
            self.state.current_index(),
            self.cooldown
        );
        Some(generation)
    }

    /// Arm the interval on entering (playing, visible), drop it on leaving
    fn sync_autoplay(&self, autoplay: &mut Option<Interval>) {
        match (self.state.autoplay_armed(), autoplay.is_some()) {
            (true, false) => {
                let mut interval = time::interval_at(
                    Instant::now() + self.autoplay_interval,
                    self.autoplay_interval,
                );
                interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
                *autoplay = Some(interval);
                debug!("Autoplay armed");
            }
            (false, true) => {
                *autoplay = None;
                debug!("Autoplay disarmed");
            }
            _ => {}
        }
    }

    fn publish(&self) {
        let latest = self.state.snapshot();
        self.publisher.send_if_modified(|current| {
            if *current == latest {
                false
            } else {
                *current = latest;
                true
            }
        });
    }
}

async fn next_tick(autoplay: &mut Option<Interval>) {
    match autoplay {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

async fn cooldown_expired(pending: Option<PendingCooldown>) -> u64 {
    match pending {
        Some(pending) => {
            time::sleep_until(pending.deadline).await;
            pending.generation
        }
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLIDES: [&str; 4] = ["A", "B", "C", "D"];

    fn spawn_carousel() -> AutoAdvanceCarousel<&'static str> {
        AutoAdvanceCarousel::spawn(SLIDES.to_vec(), &CarouselConfig::default()).unwrap()
    }

    /// Let the carousel task drain its queue without moving the clock
    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    /// Move the paused clock forward and let due timers run
    async fn pass(millis: u64) {
        time::advance(Duration::from_millis(millis)).await;
        settle().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejects_empty_slides() {
        let result = AutoAdvanceCarousel::<&str>::spawn(Vec::new(), &CarouselConfig::default());
        assert!(matches!(result, Err(crate::Error::EmptyCarousel)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejects_zero_interval() {
        let config = CarouselConfig {
            autoplay_interval_ms: 0,
            ..Default::default()
        };
        let result = AutoAdvanceCarousel::spawn(SLIDES.to_vec(), &config);
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_next_wraps() {
        let carousel = spawn_carousel();
        let mut seen = Vec::new();
        for _ in 0..4 {
            carousel.next();
            settle().await;
            seen.push(carousel.snapshot().current_index);
        }
        assert_eq!(seen, vec![1, 2, 3, 0]);
        assert_eq!(*carousel.current(), "A");
    }

    #[tokio::test(start_paused = true)]
    async fn test_previous_from_first_slide() {
        let carousel = spawn_carousel();
        carousel.previous();
        settle().await;
        assert_eq!(carousel.snapshot().current_index, 3);
        assert_eq!(*carousel.current(), "D");
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_autoplay_while_hidden() {
        let carousel = spawn_carousel();
        settle().await;

        pass(20_000).await;
        let snapshot = carousel.snapshot();
        assert_eq!(snapshot.current_index, 0);
        assert!(!snapshot.is_visible);
        assert!(snapshot.is_auto_playing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_then_one_step_per_interval() {
        let carousel = spawn_carousel();
        pass(20_000).await;
        assert_eq!(carousel.snapshot().current_index, 0);

        carousel.reveal();
        settle().await;
        assert!(carousel.snapshot().is_visible);

        pass(4_990).await;
        assert_eq!(carousel.snapshot().current_index, 0);

        pass(20).await;
        assert_eq!(carousel.snapshot().current_index, 1);

        pass(5_000).await;
        assert_eq!(carousel.snapshot().current_index, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_is_one_shot() {
        let carousel = spawn_carousel();
        carousel.reveal();
        settle().await;
        pass(2_500).await;

        // A second reveal must not re-arm the interval
        carousel.reveal();
        settle().await;
        pass(2_510).await;
        assert_eq!(carousel.snapshot().current_index, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_go_to_pauses_then_resumes_after_cooldown() {
        let carousel = spawn_carousel();
        carousel.reveal();
        settle().await;

        carousel.go_to(2);
        settle().await;
        let snapshot = carousel.snapshot();
        assert_eq!(snapshot.current_index, 2);
        assert!(!snapshot.is_auto_playing);

        pass(9_990).await;
        let snapshot = carousel.snapshot();
        assert_eq!(snapshot.current_index, 2);
        assert!(!snapshot.is_auto_playing);

        pass(20).await;
        let snapshot = carousel.snapshot();
        assert_eq!(snapshot.current_index, 2);
        assert!(snapshot.is_auto_playing);

        // Interval restarts from the moment autoplay resumed
        pass(5_000).await;
        assert_eq!(carousel.snapshot().current_index, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_interaction_supersedes_cooldown() {
        let carousel = spawn_carousel();
        carousel.reveal();
        carousel.go_to(1);
        settle().await;

        pass(6_000).await;
        carousel.next();
        settle().await;
        assert_eq!(carousel.snapshot().current_index, 2);

        // First cooldown would have ended here
        pass(4_010).await;
        assert!(!carousel.snapshot().is_auto_playing);

        pass(5_980).await;
        assert!(!carousel.snapshot().is_auto_playing);

        pass(20).await;
        assert!(carousel.snapshot().is_auto_playing);
        assert_eq!(carousel.snapshot().current_index, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cooldown_elapses_while_hidden() {
        let carousel = spawn_carousel();
        carousel.go_to(3);
        settle().await;

        pass(10_010).await;
        let snapshot = carousel.snapshot();
        assert!(snapshot.is_auto_playing);
        assert!(!snapshot.is_visible);

        pass(10_000).await;
        assert_eq!(carousel.snapshot().current_index, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_changes() {
        let carousel = spawn_carousel();
        let mut rx = carousel.subscribe();
        rx.borrow_and_update();

        carousel.go_to(1);
        settle().await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().current_index, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_timers() {
        let carousel = spawn_carousel();
        carousel.reveal();
        settle().await;
        let rx = carousel.subscribe();

        drop(carousel);
        settle().await;
        pass(30_000).await;

        assert!(rx.has_changed().is_err());
        assert_eq!(rx.borrow().current_index, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_completes() {
        let carousel = spawn_carousel();
        let rx = carousel.subscribe();
        carousel.reveal();
        carousel.shutdown().await;
        assert!(rx.has_changed().is_err());
    }

    #[tokio::test(start_paused = true)]
    #[should_panic(expected = "out of range")]
    async fn test_go_to_out_of_range_panics() {
        let carousel = spawn_carousel();
        carousel.go_to(SLIDES.len());
    }
}
