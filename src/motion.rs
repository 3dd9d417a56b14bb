//! Scroll and viewport driven motion.
//!
//! Everything in here is plain data and pure functions. The components in
//! `app::effects` own the browser listeners and hand their readings to these
//! types, which decide what to publish and how elements should be styled.

pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod stagger;

pub use parallax::{Parallax, ParallaxConfig};
pub use reveal::{RevealPhase, RevealTracker};
pub use scroll::ScrollSampler;
pub use stagger::{AnimationUnit, Direction, SplitMode, StaggeredText};
