// Linux-specific helpers: interface link state via /sys

/// Read link state from /sys/class/net/<interface>/operstate (Linux).
/// Returns false when the state is unreadable or not "up".
pub(super) fn is_interface_up(interface_name: &str) -> bool {
    #[cfg(target_os = "linux")]
    {
        let path = format!("/sys/class/net/{}/operstate", interface_name);
        if let Ok(content) = std::fs::read_to_string(&path) {
            return content.trim() == "up";
        }
    }
    #[cfg(not(target_os = "linux"))]
    let _ = interface_name;
    false
}
