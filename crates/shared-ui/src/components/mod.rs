// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod empty_state;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod progress;
pub mod segmented;
pub mod textarea;

// Primitive wrappers
pub mod avatar;
pub mod dropdown_menu;
pub mod separator;
pub mod toast;

// Composite components built on the ones above
pub mod sidebar;
pub mod stat_card;
pub mod timeline;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use dropdown_menu::*;
pub use empty_state::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use progress::*;
pub use segmented::*;
pub use separator::*;
pub use sidebar::*;
pub use stat_card::*;
pub use textarea::*;
pub use timeline::*;
pub use toast::*;
