mod app_header;
pub use app_header::AppHeader;

mod app_shell;
pub use app_shell::{AppShell, ShellHandle};

mod bottom_nav;
pub use bottom_nav::BottomNav;

mod providers;
pub use providers::{use_auth, use_language, AppProviders};
