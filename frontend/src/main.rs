use log::info;
use web_sys::Element;

mod behaviors;
mod config;
mod context;
mod dom;
mod error;
mod i18n;
mod components {
    pub mod enhancer;
}

use components::enhancer::Enhancer;
use error::{EnhanceError, Result};

/// Element the enhancer renders into, created at the end of `<body>` if the page lacks one.
fn mount_point() -> Result<Element> {
    let document = error::document()?;
    if let Some(existing) = document.get_element_by_id(config::MOUNT_POINT_ID) {
        return Ok(existing);
    }
    let body = document
        .body()
        .ok_or_else(|| EnhanceError::MissingElement("body".to_string()))?;
    let mount = document.create_element("div")?;
    mount.set_id(config::MOUNT_POINT_ID);
    mount.set_attribute("hidden", "")?;
    body.append_child(&mount)?;
    Ok(mount)
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page enhancements");
    match mount_point() {
        Ok(root) => {
            yew::Renderer::<Enhancer>::with_root(root).render();
        }
        Err(e) => log::error!("Cannot mount enhancer: {}", e),
    }
}
