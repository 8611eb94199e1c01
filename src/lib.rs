//! A single-page counter: a header, a button that counts its clicks and a static caption.

pub mod app;
pub mod counter;

pub use app::{
    App, AppShell, AppShellProps, CounterButton, CounterButtonProps, CounterCard, CounterCardView,
    CounterCardViewProps, CAPTION_TEXT, HEADER_TEXT,
};
pub use counter::{Counter, CounterAction};
