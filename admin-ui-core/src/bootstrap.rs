//! Work done once on every admin page load.

use crate::config::AdminUiConfig;
use crate::flash;
use crate::host::{Dom, IconReplacer, Scheduler};
use log::{debug, info};

/// What [`init_page`] found on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInit {
    pub icons_replaced: bool,
    pub flash_messages: usize,
}

/// Replace icons (if the icon library is loaded) and schedule flash-message dismissal.
///
/// The base template usually runs the icon replacement itself; calling it
/// again is harmless.
pub fn init_page<D, S, I>(dom: &D, scheduler: &S, icons: &I, config: &AdminUiConfig) -> PageInit
where
    D: Dom,
    S: Scheduler,
    I: IconReplacer,
{
    let icons_replaced = icons.replace_icons(&config.icon_library);
    if !icons_replaced {
        debug!("{} not loaded, icons left as-is", config.icon_library);
    }

    let flash_messages = flash::dismiss_all(dom, scheduler, config);
    if flash_messages > 0 {
        info!("{} flash message(s) scheduled for dismissal", flash_messages);
    }

    PageInit {
        icons_replaced,
        flash_messages,
    }
}
