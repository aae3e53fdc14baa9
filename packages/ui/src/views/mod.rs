mod empty_state;
pub use empty_state::EmptyState;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

pub mod feed;
pub use feed::FeedView;

pub mod search;
pub use search::SearchView;

pub mod compare;
pub use compare::CompareView;

pub mod top_tracks;
pub use top_tracks::TopTracksView;

mod app_shell;
pub use app_shell::AppShell;
