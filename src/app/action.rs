/// Side effects requested by the event handler, applied by the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Stop,
    Reset,
    Toggle,
    Quit,
}
