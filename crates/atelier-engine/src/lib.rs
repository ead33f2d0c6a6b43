pub mod carousel;
pub mod compose;
pub mod filter;
pub mod pager;
pub mod resolve;
pub mod route;

pub use carousel::Cursor;
pub use compose::ItemText;
pub use filter::{FacetBlock, FacetFolds, FilterSelection, OpenPanel};
pub use pager::TextPager;
pub use resolve::{resolve, MissLevel, Resolution};
pub use route::{History, Route};
