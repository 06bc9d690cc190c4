//! Screen composition: the root that owns the selection and the pure view
//! models it hands to the UI on every render pass.
//!
//! - `root` - `StarterScreen`, the selection owner and `Store` implementation
//! - `layout` - portrait/landscape arrangement of the screen's slots
//! - `option_row` - one glyph per catalog entry
//! - `detail_card` - the enlarged selected item
//! - `header` - static title and logo
//! - `appearance` - light/dark resolution
//! - `frame` - everything one render pass needs, bundled

pub mod appearance;
pub mod detail_card;
pub mod frame;
pub mod header;
pub mod layout;
pub mod option_row;
pub mod root;

pub use appearance::{Appearance, AppearanceMode};
pub use detail_card::DetailCard;
pub use frame::ScreenFrame;
pub use header::{Header, Logo};
pub use layout::{Arrangement, Orientation, Slot};
pub use option_row::{Glyph, option_row};
pub use root::StarterScreen;
