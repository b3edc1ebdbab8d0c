//! Exhibit page interactions
//!
//! The decisions behind the exhibition page's scroll and pointer behaviour,
//! without a DOM. A host binding feeds in scroll offsets, visibility ratios,
//! clicks and frame timestamps; these types say which class to toggle, what
//! offset to apply, or what to animate.
//!
//! - [`header`]: shadow and hide-on-scroll-down
//! - [`parallax`]: per-frame throttled layer offsets
//! - [`reveal`]: visibility triggers and staggered entrances
//! - [`counter`]: counter markup to [`exhibit_animation::Interpolation`]
//! - [`nav`]: mobile menu and anchor links
//! - [`pointer`]: ripples and cursor trail
//! - [`typewriter`]: typing effect

pub mod counter;
pub mod header;
pub mod nav;
pub mod parallax;
pub mod pointer;
pub mod reveal;
pub mod typewriter;

pub use counter::{parse_int, CounterSpec};
pub use header::{HeaderScroll, HeaderState};
pub use nav::{anchor_target, MobileMenu};
pub use parallax::Parallax;
pub use pointer::{CursorTrail, Rect, Ripple};
pub use reveal::{reveal_batch, reveal_delay, stagger_delay, ObserverOptions, VisibilityTrigger};
pub use typewriter::Typewriter;
