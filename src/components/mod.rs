// Shared screen chrome for the my-alarm TUI

pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod tab_bar;

pub use footer::Footer;
pub use header::Header;
pub use help_overlay::HelpOverlay;
pub use tab_bar::{MainTab, TabBar};
