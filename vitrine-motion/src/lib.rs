mod ease;
mod particles;
mod scroll;
mod sequence;
mod timeline;
mod tween;
mod typewriter;

pub use ease::Ease;
pub use particles::{PARTICLE_COUNT, PARTICLE_PALETTE, ParticleSpec, Rng32, scatter};
pub use scroll::{GateEvent, ScrollGate, SectionRect, active_index, navbar_solid};
pub use sequence::{SubmitPhase, SubmitSequence};
pub use timeline::{ApplyFn, CompleteFn, Scheduler, Timeline, TweenId};
pub use tween::{Channels, StylePoint, Tween, TweenSample};
pub use typewriter::Typewriter;
