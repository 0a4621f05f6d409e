pub mod device_id;

pub use device_id::{DeviceId, DEVICE_ID_PREFIX};
