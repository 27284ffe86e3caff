mod output;
mod terminal;
mod timers;

pub use output::Output;
pub use terminal::Terminal;
pub use timers::{TimerSlots, Timers, apply_effect, new_timers};
