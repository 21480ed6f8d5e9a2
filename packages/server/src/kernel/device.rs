//! Device detection for the generation backend.

use std::path::Path;

use tracing::{debug, warn};

use super::{BaseDeviceProbe, Device};

/// Present when the NVIDIA kernel driver is loaded.
const NVIDIA_DRIVER_PATH: &str = "/proc/driver/nvidia/version";

/// Detects the device from an explicit override, then the environment.
///
/// Order:
/// 1. `SUMMARIZER_DEVICE` override (from config)
/// 2. `CUDA_VISIBLE_DEVICES` hiding every GPU ("" or "-1") forces CPU
/// 3. NVIDIA driver presence
pub struct SystemDeviceProbe {
    override_device: Option<String>,
}

impl SystemDeviceProbe {
    pub fn new(override_device: Option<String>) -> Self {
        Self { override_device }
    }
}

impl BaseDeviceProbe for SystemDeviceProbe {
    fn detect(&self) -> Device {
        if let Some(raw) = &self.override_device {
            match Device::parse(raw) {
                Some(device) => {
                    debug!(device = %device, "Using configured device override");
                    return device;
                }
                None => warn!(value = %raw, "Ignoring unrecognized SUMMARIZER_DEVICE"),
            }
        }

        let visible = std::env::var("CUDA_VISIBLE_DEVICES").ok();
        detect_from(visible.as_deref(), Path::new(NVIDIA_DRIVER_PATH).exists())
    }
}

fn detect_from(cuda_visible_devices: Option<&str>, driver_present: bool) -> Device {
    if let Some(visible) = cuda_visible_devices {
        let visible = visible.trim();
        if visible.is_empty() || visible == "-1" {
            return Device::Cpu;
        }
    }

    if driver_present {
        Device::Cuda
    } else {
        Device::Cpu
    }
}
