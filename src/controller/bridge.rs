/// The Telegram WebApp bridge as the controller sees it. Popup results are
/// not returned here: the host delivers a single global "popup closed"
/// event, fed back through `ListingPageController::on_popup_closed`.
pub trait HostBridge {
    fn open_link(&self, url: &str);
    fn show_popup(&self, popup: &PopupParams);
    fn show_alert(&self, message: &str);
    fn close(&self);
}

impl<T: HostBridge> HostBridge for &T {
    fn open_link(&self, url: &str) {
        (**self).open_link(url)
    }

    fn show_popup(&self, popup: &PopupParams) {
        (**self).show_popup(popup)
    }

    fn show_alert(&self, message: &str) {
        (**self).show_alert(message)
    }

    fn close(&self) {
        (**self).close()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupParams {
    pub title: String,
    pub message: String,
    pub buttons: Vec<PopupButton>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupButton {
    pub id: &'static str,
    pub kind: &'static str,
    pub text: &'static str,
}

/// Bridge for running outside a Telegram host (smoke runs, local
/// debugging). Every host call becomes a log line.
pub struct LogBridge;

impl HostBridge for LogBridge {
    fn open_link(&self, url: &str) {
        log::info!("open_link: {url}");
    }

    fn show_popup(&self, popup: &PopupParams) {
        log::info!("show_popup: {}: {}", popup.title, popup.message);
    }

    fn show_alert(&self, message: &str) {
        log::info!("show_alert: {message}");
    }

    fn close(&self) {
        log::info!("close requested");
    }
}
