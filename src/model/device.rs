// Use 3rd party
use serde::{Deserialize, Serialize};

// Use built-in library
use std::fmt;

/// Output pixel size of a wallpaper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Device class a wallpaper is generated for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceProfile {
    #[default]
    Mobile,
    Tablet,
    Pc,
}

// 4K targets, indexed by `DeviceProfile` discriminant.
const TARGET_RESOLUTIONS: [Resolution; 3] = [
    // 9:16
    Resolution::new(1440, 2560),
    // UHD 16:9
    Resolution::new(3840, 2160),
    Resolution::new(3840, 2160),
];

impl DeviceProfile {
    pub const ALL: [DeviceProfile; 3] = [
        DeviceProfile::Mobile,
        DeviceProfile::Tablet,
        DeviceProfile::Pc,
    ];

    /// Looks a profile up by name, ignoring case.
    /// Unknown names fall back to `Mobile`.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|device| device.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }

    pub const fn name(self) -> &'static str {
        match self {
            DeviceProfile::Mobile => "mobile",
            DeviceProfile::Tablet => "tablet",
            DeviceProfile::Pc => "pc",
        }
    }

    pub const fn resolution(self) -> Resolution {
        TARGET_RESOLUTIONS[self as usize]
    }
}

impl fmt::Display for DeviceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for DeviceProfile {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}
