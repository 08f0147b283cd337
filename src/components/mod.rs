//! The components module contains all UI components for the playlist page.

mod app;
mod endpoint_panel;
mod icons;
mod mode_tabs;
mod mood_select;
mod notice_banner;
mod playlist_modal;
mod search_box;

pub use app::*;
pub use endpoint_panel::*;
pub use icons::*;
pub use mode_tabs::*;
pub use mood_select::*;
pub use notice_banner::*;
pub use playlist_modal::*;
pub use search_box::*;
