use std::time::Duration;

use anyhow::Result;
use tokio::time::{sleep_until, Instant};
use tracing::info;

use gwanak_core::{content::SiteContent, AppConfig, AutoAdvanceCarousel, CarouselSnapshot};

/// Drive the campus carousel without a terminal UI, printing each change
pub async fn run(config: &AppConfig, seconds: u64, reveal_after: u64) -> Result<()> {
    let content = SiteContent::builtin();
    let carousel = AutoAdvanceCarousel::spawn(content.slides, &config.carousel)?;
    let mut updates = carousel.subscribe();

    let start = Instant::now();
    let end = start + Duration::from_secs(seconds);
    let mut reveal_at = Some(start + Duration::from_secs(reveal_after));

    println!(
        "Running for {}s, revealing after {}s (autoplay every {:?}, cooldown {:?})\n",
        seconds,
        reveal_after,
        config.carousel.autoplay_interval(),
        config.carousel.cooldown()
    );
    print_snapshot(start.elapsed(), &carousel.snapshot(), carousel.slides());

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = *updates.borrow_and_update();
                print_snapshot(start.elapsed(), &snapshot, carousel.slides());
            }
            _ = async {
                match reveal_at {
                    Some(at) => sleep_until(at).await,
                    None => std::future::pending().await,
                }
            } => {
                reveal_at = None;
                info!("Revealing carousel");
                carousel.reveal();
            }
            _ = sleep_until(end) => break,
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }

    carousel.shutdown().await;
    Ok(())
}

fn print_snapshot(
    elapsed: Duration,
    snapshot: &CarouselSnapshot,
    slides: &[gwanak_core::content::Slide],
) {
    let state = match (snapshot.is_visible, snapshot.is_auto_playing) {
        (false, _) => "hidden",
        (true, true) => "autoplay",
        (true, false) => "paused",
    };
    let title = slides
        .get(snapshot.current_index)
        .map(|s| s.title.as_str())
        .unwrap_or("");
    println!(
        "[{:>6.1}s] {}/{} {:<9} {}",
        elapsed.as_secs_f64(),
        snapshot.current_index + 1,
        snapshot.slide_count,
        state,
        title
    );
}
