//! Search-to-cards pipeline for catalog results.
//!
//! This crate holds the **presentation logic** of the deal finder. It has
//! no terminal or drawing dependencies: front ends implement [`Surface`]
//! (or draw the in-memory [`Board`]) and feed triggers and resolved
//! searches through [`SearchFlow`].
//!
//! # Pipeline
//!
//! - **Input**: trim the typed title, reject empty input
//! - **Fetch**: one catalog request per search, dispatched as a task
//! - **Render**: replace the cards with one card per record
//! - **Animate**: staggered fade/slide entrance, or none

pub mod animation;
pub mod card;
pub mod input;
pub mod render;
pub mod search;
pub mod state;
pub mod surface;

pub use animation::{Animator, Disabled, Entrance, Frame, Staggered, Tween};
pub use card::{Card, DealLink};
pub use input::{InputLine, Key, Submission, is_trigger};
pub use search::{Catalog, Dispatcher, Resolved, SearchFlow, SearchOutcome};
pub use state::ViewState;
pub use surface::{Board, PlacedCard, Surface};
