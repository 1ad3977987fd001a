use crossterm::event::Event as CrosstermEvent;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The terminal input stream failed or ended
    InputClosed,

    /// Periodic stopwatch refresh, posted every 10ms while running
    Tick,
}

/// Callback that posts [`AppEvent::Tick`] through a weak handle to `tx`.
///
/// The callback does not keep the channel open: once every strong sender is
/// gone the receiver sees the channel close and further ticks are dropped.
pub fn tick_notifier(tx: &UnboundedSender<AppEvent>) -> impl Fn() + Send + Sync + 'static {
    let weak = tx.downgrade();
    move || {
        if let Some(tx) = weak.upgrade() {
            let _ = tx.send(AppEvent::Tick);
        }
    }
}
