use log::info;
use thiserror::Error;
use web_sys::window;

#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("no browser window available")]
    NoWindow,
    #[error("browser refused to open a new window (pop-up blocked?)")]
    Blocked,
    #[error("window.open failed: {0}")]
    Js(String),
}

/// Opens `url` in a new browsing context. The caller only gets to know
/// whether the browser accepted the request, not whether the app launched.
pub fn open_in_new_tab(url: &str) -> Result<(), HandoffError> {
    let window = window().ok_or(HandoffError::NoWindow)?;
    let opened = window
        .open_with_url_and_target(url, "_blank")
        .map_err(|e| HandoffError::Js(format!("{:?}", e)))?;

    match opened {
        Some(_) => {
            info!("Opened messaging handoff");
            Ok(())
        }
        None => Err(HandoffError::Blocked),
    }
}
