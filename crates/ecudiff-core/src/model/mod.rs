pub mod block;
pub mod node;
pub mod snapshot;

pub use block::{Block, BlockKind};
pub use node::{AdaptionGroup, CodingItem, LeafRule, Node};
pub use snapshot::{EcuRecord, Snapshot};
