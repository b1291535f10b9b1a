//! Virtual-reality stub module
//!
//! Placeholder registered on platforms where the virtual-reality hardware
//! integration is not built. It never probes hardware; it only tells the
//! user the feature is missing.

use crate::module::ModuleDescriptor;

/// Descriptor of the stub module
pub const VIRTUAL_REALITY: ModuleDescriptor = ModuleDescriptor {
    title: "Virtual Reality",
    category: "Virtual Reality",
};

/// Availability of virtual-reality hardware support
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VrSupportStatus {
    Available,
    Unavailable,
}

/// Report hardware support availability. The stub always reports
/// [`VrSupportStatus::Unavailable`].
pub fn support_status() -> VrSupportStatus {
    VrSupportStatus::Unavailable
}

/// User-facing explanation shown when the module is entered
pub fn unavailable_message() -> &'static str {
    "Virtual reality is not supported on this platform."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_reports_unavailable() {
        assert_eq!(support_status(), VrSupportStatus::Unavailable);
        assert!(!unavailable_message().is_empty());
        assert_eq!(VIRTUAL_REALITY.title, "Virtual Reality");
    }
}
