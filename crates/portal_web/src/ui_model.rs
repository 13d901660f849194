//! Page routing and button inventory, available on both wasm and native.
//!
//! Kept out of the wasm-only `web` module so it can be unit-tested on the host.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortalRoute {
    #[default]
    Portal,
    Profile,
}

impl PortalRoute {
    /// Pick the view for a `location.pathname`.
    pub fn from_path(path: &str) -> Self {
        let file = path.rsplit('/').find(|seg| !seg.is_empty()).unwrap_or("");
        if file.eq_ignore_ascii_case("profile.html") || file.eq_ignore_ascii_case("profile") {
            PortalRoute::Profile
        } else {
            PortalRoute::Portal
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PortalRoute::Portal => "Secure WebView Portal",
            PortalRoute::Profile => "Profile",
        }
    }
}

/// One button on the portal page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAction {
    DeviceInfo,
    CopyToken,
    LogEvent,
    Toast,
    OpenUrl,
    SimulateCallback,
}

impl DemoAction {
    pub fn label(self) -> &'static str {
        match self {
            DemoAction::DeviceInfo => "Get device info",
            DemoAction::CopyToken => "Copy token",
            DemoAction::LogEvent => "Log event",
            DemoAction::Toast => "Native toast",
            DemoAction::OpenUrl => "Open URL",
            DemoAction::SimulateCallback => "Simulate native callback",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DemoAction::DeviceInfo => "📱",
            DemoAction::CopyToken => "📋",
            DemoAction::LogEvent => "📝",
            DemoAction::Toast => "🔔",
            DemoAction::OpenUrl => "🔗",
            DemoAction::SimulateCallback => "📨",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            DemoAction::DeviceInfo => "NativeBridge.getDeviceInfo(); logs only in a browser",
            DemoAction::CopyToken => "NativeBridge.copyToClipboard(); browser clipboard otherwise",
            DemoAction::LogEvent => "NativeBridge.logEvent() with a JSON event",
            DemoAction::Toast => "NativeBridge.showToast(); alert() otherwise",
            DemoAction::OpenUrl => "NativeBridge.openExternalUrl(); new tab otherwise",
            DemoAction::SimulateCallback => "Calls window.onNativeMessage(\"demo\", {...})",
        }
    }

    pub fn all() -> &'static [DemoAction] {
        &[
            DemoAction::DeviceInfo,
            DemoAction::CopyToken,
            DemoAction::LogEvent,
            DemoAction::Toast,
            DemoAction::OpenUrl,
            DemoAction::SimulateCallback,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_from_pathname() {
        assert_eq!(PortalRoute::from_path("/"), PortalRoute::Portal);
        assert_eq!(PortalRoute::from_path("/index.html"), PortalRoute::Portal);
        assert_eq!(PortalRoute::from_path("/app/profile.html"), PortalRoute::Profile);
        assert_eq!(PortalRoute::from_path("/app/profile/"), PortalRoute::Profile);
        assert_eq!(PortalRoute::from_path("/profiles.html"), PortalRoute::Portal);
    }

    #[test]
    fn demo_action_inventory_is_stable() {
        let all = DemoAction::all();
        assert_eq!(all.len(), 6);

        let mut labels: Vec<&'static str> = all.iter().copied().map(DemoAction::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 6);

        for a in all {
            assert!(!a.icon().trim().is_empty());
            assert!(!a.hint().trim().is_empty());
        }
    }
}
